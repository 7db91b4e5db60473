use std::env;
use std::path::PathBuf;

use anyhow::Result;

/// Query used by `trendgate fetch` when none is given.
pub const DEFAULT_QUERY: &str = "trending";

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the media downloader puts fetched files (TRENDGATE_DOWNLOAD_DIR)
    pub download_dir: PathBuf,
    /// Fallback query for trend fetching (TRENDGATE_DEFAULT_QUERY)
    pub default_query: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a default, so this only fails on values that are set
    /// but unusable.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any variable source. `load` passes the
    /// process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let download_dir = lookup("TRENDGATE_DOWNLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_download_dir);

        let default_query =
            lookup("TRENDGATE_DEFAULT_QUERY").unwrap_or_else(|| DEFAULT_QUERY.to_string());

        let config = Self {
            download_dir,
            default_query,
        };
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<()> {
        if self.download_dir.as_os_str().is_empty() {
            anyhow::bail!(
                "TRENDGATE_DOWNLOAD_DIR is set but empty.\n\
                 Unset it to use the default ({}).",
                default_download_dir().display()
            );
        }
        if self.default_query.trim().is_empty() {
            anyhow::bail!("TRENDGATE_DEFAULT_QUERY is set but blank. Unset it or give it a value.");
        }
        Ok(())
    }
}

/// Returns the default directory for downloaded media.
/// Uses the platform data directory: ~/.local/share/trendgate/downloads/ on Linux.
pub fn default_download_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("trendgate")
        .join("downloads")
}
