use crate::SyncResult;

use ps_core::{CloudProgress, CloudRecord};

use async_trait::async_trait;

/// Cloud persistence API, keyed by `Identity::user_key()`.
#[async_trait]
pub trait CloudStore: Send + Sync {
    /// `Ok(None)` when no record exists for the key yet.
    async fn read(&self, user_key: &str) -> SyncResult<Option<CloudRecord>>;

    async fn write(&self, user_key: &str, progress: &CloudProgress) -> SyncResult<()>;
}
