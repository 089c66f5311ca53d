pub mod output;
pub mod report;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use report::{publish_report, ReportConfig};
use tracing::level_filters::LevelFilter;

use crate::{
    api::{
        gist::{GistClient, DEFAULT_GIST_API_URL},
        wakatime::{WakaTimeClient, DEFAULT_WAKA_API_URL},
    },
    utils::logging::enable_logging,
};

#[derive(Parser, Debug)]
#[command(name = "wakabox", version, long_about = None)]
#[command(about = "Create a Gist box for WakaTime statistics", long_about = None)]
pub struct Args {
    #[arg(short, long, help = "WakaTime API key")]
    pub waka_api_key: String,
    #[arg(short, long, help = "Gist ID")]
    pub gist_id: String,
    #[arg(short = 't', long, help = "GitHub Token")]
    pub github_token: String,

    #[arg(
        long,
        env = "WAKABOX_WAKA_API_URL",
        default_value = DEFAULT_WAKA_API_URL,
        help = "Base address of the WakaTime API"
    )]
    pub waka_api_url: String,
    #[arg(
        long,
        env = "WAKABOX_GIST_API_URL",
        default_value = DEFAULT_GIST_API_URL,
        help = "Base address of the GitHub gists API"
    )]
    pub gist_api_url: String,

    #[arg(long, help = "Print the report to stdout instead of updating the gist")]
    pub dry_run: bool,
    #[arg(long, help = "Enable logging")]
    pub log: bool,
    #[arg(long, help = "Also write logs into daily rotated files in this directory")]
    pub log_dir: Option<PathBuf>,
}

pub async fn run_cli() -> Result<()> {
    let args = Args::parse();

    let logging_level = if args.log {
        Some(LevelFilter::TRACE)
    } else {
        None
    };
    enable_logging(args.log_dir.as_deref(), logging_level)?;

    run(args).await
}

/// Everything after argument parsing. Split from [run_cli] so it can run without touching the
/// process arguments or the global subscriber.
pub async fn run(args: Args) -> Result<()> {
    let source = WakaTimeClient::new(args.waka_api_url, args.waka_api_key)?;
    let sink = GistClient::new(args.gist_api_url, args.github_token)?;
    let config = ReportConfig {
        paste_id: args.gist_id,
        dry_run: args.dry_run,
    };

    let content = publish_report(&source, &sink, &config).await?;
    if config.dry_run {
        println!("{content}");
    }
    Ok(())
}
