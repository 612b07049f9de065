use clap::Parser;
use std::path::PathBuf;

/// Terminal client for the student roster service.
#[derive(Debug, Parser)]
#[command(name = "rosterdesk", version)]
#[command(about = "Manage the student roster from the terminal")]
#[command(after_help = "Environment:\n  ROSTERDESK_LOG   Write logs to this file (suffixed with timestamp and pid)\n  RUST_LOG         Log filter (default: info)")]
pub struct Cli {
    /// Read settings from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the roster endpoint from the config file
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,
}
