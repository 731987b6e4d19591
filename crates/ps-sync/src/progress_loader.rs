use crate::{CloudStore, LoadResult};

use ps_core::Identity;

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, error, warn};

/// Fetches the cloud profile and progress for an identity.
#[async_trait]
pub trait ProgressLoader: Send + Sync {
    /// Never fails: absence and failure are both values.
    async fn load(&self, identity: &Identity) -> LoadResult;
}

/// Loader reading from a [`CloudStore`].
pub struct CloudProgressLoader {
    cloud: Arc<dyn CloudStore>,
}

impl CloudProgressLoader {
    pub fn new(cloud: Arc<dyn CloudStore>) -> Self {
        Self { cloud }
    }
}

#[async_trait]
impl ProgressLoader for CloudProgressLoader {
    async fn load(&self, identity: &Identity) -> LoadResult {
        let user_key = identity.user_key();

        match self.cloud.read(&user_key).await {
            Ok(Some(record)) => {
                debug!("Loaded cloud progress for {user_key}");
                LoadResult::Found(record)
            }
            Ok(None) => {
                debug!("No cloud progress for {user_key}");
                LoadResult::NotFound
            }
            Err(e) if e.is_transient() => {
                warn!("Failed to load cloud progress for {user_key}: {e}");
                LoadResult::Failed(e)
            }
            Err(e) => {
                error!("Cloud progress for {user_key} is unusable: {e}");
                LoadResult::Failed(e)
            }
        }
    }
}
