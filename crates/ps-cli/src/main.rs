//! progress-sync - local progress and cloud sync CLI
//!
//! # Examples
//!
//! ```bash
//! # Show local progress
//! progress-sync show --pretty
//!
//! # Merge two snapshot files
//! progress-sync merge device.json cloud.json
//!
//! # Sync for a signed-in user
//! progress-sync sync --user-id u_123 --fallback
//! ```

use ps_cli::{Cli, CliResult, logger, run, runner};

use ps_config::Config;

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&cli, &config).await {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing output: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Load and validate configuration, then start logging.
fn load_config() -> CliResult<Config> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        runner::log_file_path(&config)?,
        config.logging.colored,
    )?;
    config.log_summary();

    Ok(config)
}
