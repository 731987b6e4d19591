use crate::{ConfigError, ConfigErrorResult, DEFAULT_CLOUD_BASE_URL};

use serde::Deserialize;

// Request timeout constraints
pub const MIN_TIMEOUT_SECS: u64 = 1;
pub const MAX_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Cloud persistence API connection settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CloudConfig {
    /// Base URL of the persistence API (e.g., "http://127.0.0.1:8000").
    /// Plain HTTP only: the HTTP client is built without a TLS backend.
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Bearer token sent with every request (never logged)
    pub api_key: Option<String>,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_CLOUD_BASE_URL),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            api_key: None,
        }
    }
}

impl CloudConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.base_url.starts_with("https://") {
            return Err(ConfigError::cloud(format!(
                "cloud.base_url '{}' uses https, but TLS is not supported; \
                 use http:// (e.g. behind a local TLS-terminating proxy)",
                self.base_url
            )));
        }

        if !self.base_url.starts_with("http://") {
            return Err(ConfigError::cloud(format!(
                "cloud.base_url must start with http://, got '{}'",
                self.base_url
            )));
        }

        if self.timeout_secs < MIN_TIMEOUT_SECS || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::cloud(format!(
                "cloud.timeout_secs must be {}-{}, got {}",
                MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        if let Some(key) = &self.api_key
            && key.trim().is_empty()
        {
            return Err(ConfigError::cloud("cloud.api_key cannot be empty if set"));
        }

        Ok(())
    }
}
