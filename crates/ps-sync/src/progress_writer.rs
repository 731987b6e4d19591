use crate::{CloudStore, SyncResult};

use ps_core::{CloudProgress, Identity, MergedProgress};

use std::sync::Arc;

use async_trait::async_trait;

/// Persists merged progress back to the cloud.
#[async_trait]
pub trait ProgressWriter: Send + Sync {
    async fn persist(&self, identity: &Identity, progress: &MergedProgress) -> SyncResult<()>;
}

/// Writer backed by a [`CloudStore`]. Does not retry.
pub struct CloudProgressWriter {
    cloud: Arc<dyn CloudStore>,
}

impl CloudProgressWriter {
    pub fn new(cloud: Arc<dyn CloudStore>) -> Self {
        Self { cloud }
    }
}

#[async_trait]
impl ProgressWriter for CloudProgressWriter {
    async fn persist(&self, identity: &Identity, progress: &MergedProgress) -> SyncResult<()> {
        self.cloud
            .write(&identity.user_key(), &CloudProgress::from(progress))
            .await
    }
}
