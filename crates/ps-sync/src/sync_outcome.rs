use ps_core::MergedProgress;

use serde::Serialize;

/// What a single `trigger` call did. Hosts may ignore it entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SyncOutcome {
    /// No identity; the guard was reset
    SignedOut,
    /// Local stores not hydrated yet
    NotReady,
    /// This identity was already synced (or is being synced) this session
    AlreadySynced,
    /// No cloud record; local progress left as the source of truth
    NoCloudRecord,
    /// Loading failed; handled like `NoCloudRecord`
    LoadFailed,
    /// Merged progress was applied locally; `persisted` reports the cloud write
    Merged {
        progress: MergedProgress,
        persisted: bool,
    },
}

impl SyncOutcome {
    /// True if this call ran the sync pipeline.
    pub fn ran(&self) -> bool {
        matches!(
            self,
            Self::NoCloudRecord | Self::LoadFailed | Self::Merged { .. }
        )
    }
}
