mod json_file_store;

use crate::{
    CloudProgressLoader, CloudProgressWriter, LocalProgressStores, MemoryCloudStore,
    SyncOrchestrator,
};

use ps_core::{
    CloudProfile, CloudProgress, CloudRecord, Identity, IdentitySource, ThemeId, UserInfo,
};

use std::sync::Arc;

pub(crate) fn identity(id: &str, source: IdentitySource) -> Identity {
    Identity::new(
        source,
        UserInfo {
            id: id.into(),
            username: format!("{id}_name"),
            display_name: None,
        },
    )
}

pub(crate) fn cloud_record(coins: u64, themes: &[&str], gate: bool) -> CloudRecord {
    CloudRecord {
        profile: CloudProfile {
            username: Some("cloud_user".into()),
            display_name: None,
        },
        progress: CloudProgress {
            coins: Some(coins),
            total_earned: Some(coins),
            high_score: Some(0),
            unlocked_themes: Some(themes.iter().map(|t| ThemeId::from(*t)).collect()),
            owned_power_ups: None,
            has_completed_gate: Some(gate),
        },
    }
}

/// Orchestrator wired to in-memory stores and an in-memory cloud.
pub(crate) struct Harness {
    pub stores: LocalProgressStores,
    pub cloud: Arc<MemoryCloudStore>,
    pub orchestrator: Arc<SyncOrchestrator>,
}

impl Harness {
    pub fn new() -> Self {
        let stores = LocalProgressStores::in_memory();
        let cloud = Arc::new(MemoryCloudStore::new());
        let orchestrator = Arc::new(SyncOrchestrator::new(
            stores.clone(),
            Arc::new(CloudProgressLoader::new(cloud.clone())),
            Arc::new(CloudProgressWriter::new(cloud.clone())),
        ));

        Self {
            stores,
            cloud,
            orchestrator,
        }
    }
}
