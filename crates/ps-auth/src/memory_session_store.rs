use crate::{AuthResult, SessionStore};

use ps_core::UserInfo;

use std::sync::{Mutex, PoisonError};

/// Session store that lives only as long as the process.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: Mutex<Option<UserInfo>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(user: UserInfo) -> Self {
        Self {
            session: Mutex::new(Some(user)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> AuthResult<Option<UserInfo>> {
        Ok(self
            .session
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn save(&self, user: &UserInfo) -> AuthResult<()> {
        *self.session.lock().unwrap_or_else(PoisonError::into_inner) = Some(user.clone());
        Ok(())
    }

    fn clear(&self) -> AuthResult<()> {
        *self.session.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}
