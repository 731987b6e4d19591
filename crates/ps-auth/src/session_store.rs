use crate::AuthResult;

use ps_core::UserInfo;

/// Persistence for the fallback backend's signed-in session.
pub trait SessionStore: Send + Sync {
    /// `Ok(None)` when no session has been saved.
    fn get(&self) -> AuthResult<Option<UserInfo>>;

    fn save(&self, user: &UserInfo) -> AuthResult<()>;

    fn clear(&self) -> AuthResult<()>;
}
