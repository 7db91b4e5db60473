use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::{debug, info};

use trendgate::config::Config;
use trendgate::intelligence::fetcher::{self, TrendFetcher};
use trendgate::intelligence::record::ValidationError;
use trendgate::output::terminal;
use trendgate::skills;
use trendgate::Payload;

/// Trendgate: trend record validation and skill contracts.
///
/// Checks trend payloads against the trend schema and runs pipeline skills
/// against their input/output contracts.
#[derive(Parser)]
#[command(name = "trendgate", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a trend record (JSON object) from a file, or `-` for stdin
    Validate {
        /// Path to a JSON file, or `-` to read stdin
        input: PathBuf,

        /// Print the validated record as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Fetch a trend for a query and validate it
    Fetch {
        /// Query to look up (defaults to TRENDGATE_DEFAULT_QUERY)
        query: Option<String>,
    },

    /// Run a skill with a JSON payload
    Run {
        /// Skill name (see `trendgate skills`)
        skill: String,

        /// Payload as a JSON object, e.g. '{"url": "http://example.com/video.mp4"}'
        #[arg(long, default_value = "{}")]
        payload: String,

        /// Fail if the result doesn't meet the skill's contract
        #[arg(long)]
        strict: bool,
    },

    /// List available skills and their contracts
    Skills,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("trendgate=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { input, json } => {
            let data = read_payload(&input)?;
            let trend_fetcher = TrendFetcher::new();

            match trend_fetcher.validate_trend(&data) {
                Ok(record) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&record)?);
                    } else {
                        terminal::display_trend_record(&record);
                    }
                }
                Err(err) => {
                    terminal::display_validation_error(&err);
                    anyhow::bail!("{} is not a valid trend record", input.display());
                }
            }
        }

        Commands::Fetch { query } => {
            let config = Config::load()?;
            let query = query.unwrap_or(config.default_query);

            println!("Fetching trend for {query:?}...");

            match fetcher::fetch_validated(&TrendFetcher::new(), &query) {
                Ok(record) => terminal::display_trend_record(&record),
                Err(err) => {
                    if let Some(validation) = err.downcast_ref::<ValidationError>() {
                        terminal::display_validation_error(validation);
                        println!(
                            "\n{}",
                            "The trend source returned an incomplete trend.".dimmed()
                        );
                        anyhow::bail!("Fetched trend for {query:?} failed validation");
                    }
                    return Err(err);
                }
            }
        }

        Commands::Run {
            skill,
            payload,
            strict,
        } => {
            let config = Config::load()?;
            let skill = skills::find(&config.download_dir, &skill).with_context(|| {
                format!("Unknown skill {skill:?}. Run `trendgate skills` to list them.")
            })?;

            let payload = parse_payload(&payload).context("Invalid --payload")?;
            let contract = skill.contract();
            if contract.missing_input(&payload) {
                println!(
                    "{} payload has no `{}` key",
                    "Warning:".yellow(),
                    contract.input_key
                );
            }

            info!(skill = skill.name(), "Running skill");

            if strict {
                let result = skill.run_checked(&payload)?;
                terminal::display_skill_result(skill.as_ref(), &result);
            } else {
                let result = skill.run(&payload)?;
                terminal::display_skill_result(skill.as_ref(), &result);
            }
        }

        Commands::Skills => {
            let config = Config::load()?;
            let registry = skills::registry(&config.download_dir);
            terminal::display_skill_list(&registry);
            println!(
                "{}",
                format!("Downloads go to: {}", config.download_dir.display()).dimmed()
            );
        }
    }

    Ok(())
}

/// Read a JSON object from a file, or from stdin when the path is `-`.
fn read_payload(input: &Path) -> Result<Payload> {
    let raw = if input.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read {}", input.display()))?
    };

    debug!(bytes = raw.len(), "Read trend payload");
    parse_payload(&raw).with_context(|| format!("Invalid JSON in {}", input.display()))
}

/// Parse text as a JSON object. Arrays, scalars and `null` are rejected.
fn parse_payload(raw: &str) -> Result<Payload> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    match value {
        serde_json::Value::Object(map) => Ok(map),
        other => anyhow::bail!(
            "Expected a JSON object, got {}",
            match other {
                serde_json::Value::Array(_) => "an array",
                serde_json::Value::Null => "null",
                _ => "a scalar",
            }
        ),
    }
}
