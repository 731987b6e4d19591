//! Local credential-based backend used when the primary backend is
//! unavailable or the user opted out of it.
//!
//! Credential checks are delegated to a [`CredentialVerifier`]; this type
//! only sequences verification with session persistence and keeps the
//! current state.

use crate::{AuthResult, FallbackAuthState, SessionStore};

use ps_core::UserInfo;

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use log::{error, info, warn};

/// Checks credentials and registers new accounts.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, username: &str, password: &str) -> AuthResult<UserInfo>;

    async fn register(
        &self,
        username: &str,
        password: &str,
        display_name: Option<&str>,
    ) -> AuthResult<UserInfo>;
}

pub struct FallbackAuth<V, S> {
    verifier: V,
    sessions: S,
    state: Mutex<FallbackAuthState>,
}

impl<V: CredentialVerifier, S: SessionStore> FallbackAuth<V, S> {
    pub fn new(verifier: V, sessions: S) -> Self {
        Self {
            verifier,
            sessions,
            state: Mutex::new(FallbackAuthState::default()),
        }
    }

    /// Current backend state.
    pub fn state(&self) -> FallbackAuthState {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Restore a previously saved session, e.g. on app launch.
    pub fn restore(&self) -> FallbackAuthState {
        let state = match self.sessions.get() {
            Ok(Some(user)) => FallbackAuthState::signed_in(user),
            Ok(None) => FallbackAuthState::default(),
            Err(e) if e.is_transient() => {
                warn!("Failed to restore fallback session: {e}");
                FallbackAuthState::failed(e.user_message())
            }
            Err(e) => {
                error!("Fallback session store is unusable: {e}");
                FallbackAuthState::failed(e.user_message())
            }
        };

        self.set_state(state)
    }

    pub async fn sign_in(&self, username: &str, password: &str) -> FallbackAuthState {
        let result = self.verifier.verify(username, password).await;
        self.complete("sign-in", result)
    }

    pub async fn sign_up(
        &self,
        username: &str,
        password: &str,
        display_name: Option<&str>,
    ) -> FallbackAuthState {
        let result = self
            .verifier
            .register(username, password, display_name)
            .await;
        self.complete("sign-up", result)
    }

    /// Clear the saved session. A failure to remove it is logged; the
    /// in-memory state is signed out regardless.
    pub fn sign_out(&self) -> FallbackAuthState {
        if let Err(e) = self.sessions.clear() {
            warn!("Failed to clear fallback session: {e}");
        }

        info!("Fallback sign-out");
        self.set_state(FallbackAuthState::default())
    }

    fn complete(&self, action: &str, result: AuthResult<UserInfo>) -> FallbackAuthState {
        let state = match result {
            Ok(user) => {
                if let Err(e) = self.sessions.save(&user) {
                    // Still signed in for this run; only persistence is lost.
                    warn!("Fallback {action} succeeded but session was not saved: {e}");
                }
                info!("Fallback {action} for {}", user.id);
                FallbackAuthState::signed_in(user)
            }
            Err(e) => {
                warn!("Fallback {action} failed: {e}");
                FallbackAuthState::failed(e.user_message())
            }
        };

        self.set_state(state)
    }

    fn set_state(&self, state: FallbackAuthState) -> FallbackAuthState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = state.clone();
        state
    }
}

