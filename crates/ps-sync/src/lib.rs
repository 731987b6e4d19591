//! Progress sync: reconciles local progress with the cloud profile when a
//! user signs in.

pub mod cloud_store;
pub mod error;
pub mod http_cloud_store;
pub mod json_file_store;
pub mod load_result;
pub mod local_progress_stores;
pub mod memory_cloud_store;
pub mod memory_store;
pub mod progress_loader;
pub mod progress_store;
pub mod progress_writer;
pub mod sync_orchestrator;
pub mod sync_outcome;

pub use cloud_store::CloudStore;
pub use error::{Result as SyncResult, SyncError};
pub use http_cloud_store::HttpCloudStore;
pub use json_file_store::JsonFileStore;
pub use load_result::LoadResult;
pub use local_progress_stores::{CoinBalance, LocalProgressStores, UnlockedContent};
pub use memory_cloud_store::MemoryCloudStore;
pub use memory_store::MemoryStore;
pub use progress_loader::{CloudProgressLoader, ProgressLoader};
pub use progress_store::ProgressStore;
pub use progress_writer::{CloudProgressWriter, ProgressWriter};
pub use sync_orchestrator::SyncOrchestrator;
pub use sync_outcome::SyncOutcome;

#[cfg(test)]
mod tests;
