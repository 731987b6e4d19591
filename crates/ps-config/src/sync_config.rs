use crate::DEFAULT_SYNC_ENABLED;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// When false, sign-in never touches the cloud store
    pub enabled: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_SYNC_ENABLED,
        }
    }
}
