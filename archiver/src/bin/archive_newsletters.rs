use std::path::PathBuf;
use std::process;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use newsletter_archiver::client::{DEFAULT_TIMEOUT, INSTAPAPER_API_BASE};
use newsletter_archiver::job::{DEFAULT_RETENTION_DAYS, DEFAULT_TAG};
use newsletter_archiver::{
    default_config_path, ArchiverError, Config, InstapaperClient, JobOptions, Summary,
};

/// Archives Instapaper bookmarks with a tag once they are older than the
/// retention window. Meant to run from cron.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Credential file (defaults to instapaper_config.json beside the executable)
    #[arg(long, env = "INSTAPAPER_CONFIG")]
    config: Option<PathBuf>,

    /// Tag whose bookmarks are archived
    #[arg(long, default_value = DEFAULT_TAG)]
    tag: String,

    /// Archive bookmarks older than this many days
    #[arg(
        long,
        default_value_t = DEFAULT_RETENTION_DAYS,
        value_parser = clap::value_parser!(i64).range(0..=36_500)
    )]
    days: i64,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    timeout: u64,

    #[arg(long, hide = true, default_value = INSTAPAPER_API_BASE)]
    api_base: String,
}

fn archive(cli: &Cli) -> Result<Summary> {
    let config_path = cli.config.clone().unwrap_or_else(default_config_path);
    let config = Config::load(&config_path)?;

    let client = InstapaperClient::with_options(
        &config.consumer_key,
        &config.consumer_secret,
        &cli.api_base,
        Duration::from_secs(cli.timeout),
    )
    .context("Failed to create HTTP client")?;

    let options = JobOptions {
        tag: cli.tag.clone(),
        retention_days: cli.days,
    };

    Ok(newsletter_archiver::run(&client, &config, &options, Utc::now())?)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    log::debug!("{:?}", cli);

    match archive(&cli) {
        Ok(summary) => process::exit(summary.exit_code()),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            if let Some(archiver_error) = e.downcast_ref::<ArchiverError>() {
                for line in archiver_error.diagnostics() {
                    eprintln!("{}", line);
                }
            }
            process::exit(1);
        }
    }
}
