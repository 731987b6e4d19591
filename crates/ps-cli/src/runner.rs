//! Command execution. Every command returns the JSON value `main` prints.

use crate::{Cli, CliError, CliResult, Commands};

use ps_config::Config;
use ps_core::{Identity, IdentitySource, ProgressSnapshot, UserInfo, merge};
use ps_sync::{
    CloudProgressLoader, CloudProgressWriter, CloudStore, HttpCloudStore, LocalProgressStores,
    SyncOrchestrator,
};

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use log::{info, warn};
use serde_json::{Value, json};

pub async fn run(cli: &Cli, config: &Config) -> CliResult<Value> {
    match &cli.command {
        Commands::Show => show(&config.storage_path()?),
        Commands::Merge { a, b } => merge_files(a, b),
        Commands::Sync {
            user_id,
            fallback,
            username,
            display_name,
        } => {
            if !config.sync.enabled {
                info!("Sync disabled by configuration");
                return Ok(json!({ "outcome": "disabled" }));
            }

            let identity = identity(
                user_id,
                *fallback,
                username.as_deref(),
                display_name.as_deref(),
            );
            let base_url = cli.cloud_url.as_deref().unwrap_or(&config.cloud.base_url);
            let cloud = HttpCloudStore::new(
                base_url,
                config.cloud.api_key.as_deref(),
                Duration::from_secs(config.cloud.timeout_secs),
            )?;

            sync(&config.storage_path()?, Arc::new(cloud), &identity).await
        }
    }
}

/// Log file location, relative to the config directory.
pub fn log_file_path(config: &Config) -> CliResult<Option<PathBuf>> {
    match config.logging.file {
        Some(ref file) => Ok(Some(Config::config_dir()?.join(file))),
        None => Ok(None),
    }
}

pub fn show(storage_dir: &Path) -> CliResult<Value> {
    let stores = LocalProgressStores::open_dir(storage_dir)?;
    to_value(&stores.snapshot(), "local progress")
}

pub fn merge_files(a: &Path, b: &Path) -> CliResult<Value> {
    let merged = merge(&read_snapshot(a)?, &read_snapshot(b)?);
    to_value(&merged, "merged progress")
}

pub async fn sync(
    storage_dir: &Path,
    cloud: Arc<dyn CloudStore>,
    identity: &Identity,
) -> CliResult<Value> {
    let stores = LocalProgressStores::open_dir(storage_dir)?;
    let orchestrator = SyncOrchestrator::new(
        stores,
        Arc::new(CloudProgressLoader::new(cloud.clone())),
        Arc::new(CloudProgressWriter::new(cloud)),
    );

    let outcome = orchestrator.trigger(Some(identity), true).await;
    to_value(&outcome, "sync outcome")
}

pub fn identity(
    user_id: &str,
    fallback: bool,
    username: Option<&str>,
    display_name: Option<&str>,
) -> Identity {
    let source = if fallback {
        IdentitySource::Fallback
    } else {
        IdentitySource::Primary
    };

    Identity::new(
        source,
        UserInfo {
            id: user_id.to_string(),
            username: username.unwrap_or(user_id).to_string(),
            display_name: display_name.map(String::from),
        },
    )
}

/// Read a snapshot file, repairing shape violations with a warning.
fn read_snapshot(path: &Path) -> CliResult<ProgressSnapshot> {
    let contents = fs::read_to_string(path).map_err(|e| CliError::read(path, e))?;
    let snapshot: ProgressSnapshot = serde_json::from_str(&contents)
        .map_err(|e| CliError::json(path.display().to_string(), e))?;

    if let Err(e) = snapshot.validate() {
        warn!("{}: {e}; normalizing", path.display());
        return Ok(snapshot.normalized());
    }

    Ok(snapshot)
}

fn to_value<T: serde::Serialize>(value: &T, context: &str) -> CliResult<Value> {
    serde_json::to_value(value).map_err(|e| CliError::json(context, e))
}
