//! File-backed session store for the fallback backend.

use crate::{AuthError, AuthResult, SessionStore};

use ps_core::UserInfo;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};

const SESSION_FILE_NAME: &str = "session.json";
const SCHEMA_VERSION: i32 = 1;
const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// On-disk session layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSession {
    pub user: UserInfo,
    pub saved_at: String,
    pub schema_version: i32,
}

/// Persists the session as `session.json` inside a directory.
///
/// A corrupted file is moved aside to `session.json.corrupted.{timestamp}`
/// and treated as "no session" so the user can simply sign in again.
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(SESSION_FILE_NAME)
    }

    /// Renames the session file to `session.json.corrupted.{timestamp}`.
    fn backup_corrupted(&self, path: &Path) -> AuthResult<PathBuf> {
        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let backup_path = self
            .dir
            .join(format!("{SESSION_FILE_NAME}.corrupted.{timestamp}"));

        fs::rename(path, &backup_path).map_err(AuthError::backup_failed)?;

        warn!("Backed up corrupted session to {backup_path:?}");
        Ok(backup_path)
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self) -> AuthResult<Option<UserInfo>> {
        let path = self.path();

        if !path.exists() {
            info!("No session file at {path:?}");
            return Ok(None);
        }

        let contents =
            fs::read_to_string(&path).map_err(|e| AuthError::file_read(path.clone(), e))?;

        match serde_json::from_str::<StoredSession>(&contents) {
            Ok(session) => {
                info!(
                    "Restored session for {} (schema v{})",
                    session.user.id, session.schema_version
                );
                Ok(Some(session.user))
            }
            Err(e) => {
                warn!("Session file corrupted at {path:?}: {e}");
                self.backup_corrupted(&path)?;
                Ok(None)
            }
        }
    }

    /// Writes to a temp file, fsyncs, then renames over the final path.
    fn save(&self, user: &UserInfo) -> AuthResult<()> {
        fs::create_dir_all(&self.dir).map_err(|e| AuthError::dir_creation(self.dir.clone(), e))?;

        let final_path = self.path();
        let temp_path = self
            .dir
            .join(format!("{SESSION_FILE_NAME}.tmp.{}", std::process::id()));

        let session = StoredSession {
            user: user.clone(),
            saved_at: chrono::Utc::now().to_rfc3339(),
            schema_version: SCHEMA_VERSION,
        };
        let json = serde_json::to_string_pretty(&session)?;

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| AuthError::file_write(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| AuthError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| AuthError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            AuthError::atomic_rename(temp_path, final_path.clone(), e)
        })?;

        info!("Saved session: {}", user.id);
        Ok(())
    }

    fn clear(&self) -> AuthResult<()> {
        let path = self.path();

        if path.exists() {
            fs::remove_file(&path).map_err(|e| AuthError::file_remove(path.clone(), e))?;
            info!("Cleared session at {path:?}");
        }

        Ok(())
    }
}
