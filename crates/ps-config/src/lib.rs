mod cloud_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod storage_config;
mod sync_config;

pub use cloud_config::CloudConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_config::StorageConfig;
pub use sync_config::SyncConfig;

pub const CONFIG_DIR_ENV: &str = "PS_CONFIG_DIR";
pub const DEFAULT_CONFIG_DIR: &str = ".progress-sync";
pub const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_CLOUD_BASE_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_STORAGE_DIR: &str = "data";
const DEFAULT_SYNC_ENABLED: bool = true;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;

#[cfg(test)]
mod tests;
