// MediaDownloader: fetches a media URL into the download directory.
//
// Not implemented yet: run() returns an empty mapping, which breaks the
// contract (no `file_path`). The download directory is wired through from
// configuration so the real implementation only has to fill in run().

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde_json::Value;
use tracing::warn;

use super::traits::{Skill, SkillContract};
use crate::Payload;

pub const CONTRACT: SkillContract = SkillContract {
    skill: "media_downloader",
    input_key: "url",
    output_key: "file_path",
};

pub struct MediaDownloader {
    download_dir: PathBuf,
}

impl MediaDownloader {
    pub fn new(download_dir: impl Into<PathBuf>) -> Self {
        Self {
            download_dir: download_dir.into(),
        }
    }

    pub fn download_dir(&self) -> &Path {
        &self.download_dir
    }
}

impl Skill for MediaDownloader {
    fn contract(&self) -> SkillContract {
        CONTRACT
    }

    fn run(&self, payload: &Payload) -> Result<Payload> {
        let url = payload.get(CONTRACT.input_key).and_then(Value::as_str);
        warn!(
            url = ?url,
            download_dir = %self.download_dir.display(),
            "MediaDownloader is not implemented, returning an empty result"
        );
        Ok(Payload::new())
    }
}
