use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "progress-sync")]
#[command(about = "Inspect, merge and sync local game progress")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Cloud API URL (overrides [cloud].base_url)
    #[arg(long, global = true)]
    pub cloud_url: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
