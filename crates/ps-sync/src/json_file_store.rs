//! Progress store persisted as a single JSON file.

use crate::{ProgressStore, SyncError, SyncResult};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use log::{debug, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Keeps the current value in memory and writes every `set` through to disk
/// (temp file + fsync + rename).
///
/// `set` blocks the calling thread for the whole write. Inside an async
/// sync pass that is the executor thread, once per store. Hosts with a
/// latency-sensitive thread should hand the orchestrator `MemoryStore`s and
/// persist them from their own background task instead.
pub struct JsonFileStore<T> {
    path: PathBuf,
    value: RwLock<T>,
}

impl<T> JsonFileStore<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    /// Open the store at `path`. A missing file yields `T::default()`;
    /// an unreadable or corrupted file is an error so it is never
    /// silently overwritten.
    pub fn open(path: impl Into<PathBuf>) -> SyncResult<Self> {
        let path = path.into();

        let value = if path.exists() {
            let contents =
                fs::read_to_string(&path).map_err(|e| SyncError::store_io(path.clone(), e))?;
            serde_json::from_str(&contents)
                .map_err(|e| SyncError::store_corrupted(path.clone(), e.to_string()))?
        } else {
            debug!("No store file at {path:?}, starting from defaults");
            T::default()
        };

        Ok(Self {
            path,
            value: RwLock::new(value),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_atomic(&self, value: &T) -> SyncResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| SyncError::store_io(dir.to_path_buf(), e))?;
        }

        let mut temp_name = self.path.as_os_str().to_owned();
        temp_name.push(format!(".tmp.{}", std::process::id()));
        let temp_path = PathBuf::from(temp_name);

        let json = serde_json::to_string_pretty(value)?;

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| SyncError::store_io(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| SyncError::store_io(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| SyncError::store_io(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            SyncError::store_io(self.path.clone(), e)
        })
    }
}

impl<T> ProgressStore<T> for JsonFileStore<T>
where
    T: Serialize + DeserializeOwned + Default + Clone + Send + Sync,
{
    fn get(&self) -> T {
        self.value
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The in-memory value is always updated; a failed disk write is logged
    /// and retried implicitly by the next `set`.
    fn set(&self, value: T) {
        let mut current = self.value.write().unwrap_or_else(PoisonError::into_inner);

        if let Err(e) = self.write_atomic(&value) {
            warn!("Failed to persist {:?}: {e}", self.path);
        }

        *current = value;
    }
}
