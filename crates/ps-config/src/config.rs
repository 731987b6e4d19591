use crate::{
    CONFIG_DIR_ENV, CONFIG_FILE_NAME, CloudConfig, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, LoggingConfig, StorageConfig, SyncConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub cloud: CloudConfig,
    pub storage: StorageConfig,
    pub sync: SyncConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for PS_CONFIG_DIR env var, else use ./.progress-sync/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply PS_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: PS_CONFIG_DIR env var > ./.progress-sync/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.cloud.validate()?;
        self.storage.validate()?;

        if let Some(file) = &self.logging.file
            && file.trim().is_empty()
        {
            return Err(ConfigError::logging("logging.file cannot be empty if set"));
        }

        Ok(())
    }

    /// Get absolute path to the local storage directory.
    pub fn storage_path(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.storage.dir))
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  cloud: {} (timeout {}s, auth: {})",
            self.cloud.base_url,
            self.cloud.timeout_secs,
            if self.cloud.api_key.is_some() {
                "api key"
            } else {
                "none"
            }
        );
        info!("  storage: {}", self.storage.dir);
        info!(
            "  sync: {}",
            if self.sync.enabled {
                "enabled"
            } else {
                "disabled"
            }
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Cloud
        Self::apply_env_string("PS_CLOUD_BASE_URL", &mut self.cloud.base_url);
        Self::apply_env_parse("PS_CLOUD_TIMEOUT_SECS", &mut self.cloud.timeout_secs);
        Self::apply_env_option_string("PS_CLOUD_API_KEY", &mut self.cloud.api_key);

        // Storage
        Self::apply_env_string("PS_STORAGE_DIR", &mut self.storage.dir);

        // Sync
        Self::apply_env_bool("PS_SYNC_ENABLED", &mut self.sync.enabled);

        // Logging
        Self::apply_env_parse("PS_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("PS_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("PS_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
