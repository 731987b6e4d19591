//! Publishes identity-change events to subscribers.
//!
//! Hosts push backend state updates as often as they like (every render,
//! every poll); subscribers only see a new value when the resolved
//! identity actually changes. Each sign-out bumps the published generation,
//! so a sign-out is never lost when a sign-in follows before subscribers
//! wake up.

use crate::{FallbackAuthState, PrimaryAuthState, resolve};

use ps_core::{Identity, IdentityUpdate};

use std::sync::{Mutex, PoisonError};

use log::{debug, info};
use tokio::sync::watch;

#[derive(Debug, Default)]
struct BackendStates {
    primary: PrimaryAuthState,
    fallback: FallbackAuthState,
}

pub struct IdentityPublisher {
    states: Mutex<BackendStates>,
    identity_tx: watch::Sender<IdentityUpdate>,
}

impl Default for IdentityPublisher {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityPublisher {
    pub fn new() -> Self {
        let (identity_tx, _) = watch::channel(IdentityUpdate::default());
        Self {
            states: Mutex::new(BackendStates::default()),
            identity_tx,
        }
    }

    /// Record a new primary backend state. Returns true if the resolved
    /// identity changed.
    pub fn update_primary(&self, state: PrimaryAuthState) -> bool {
        let mut states = self.states.lock().unwrap_or_else(PoisonError::into_inner);
        states.primary = state;
        self.publish(&states)
    }

    /// Record a new fallback backend state. Returns true if the resolved
    /// identity changed.
    pub fn update_fallback(&self, state: FallbackAuthState) -> bool {
        let mut states = self.states.lock().unwrap_or_else(PoisonError::into_inner);
        states.fallback = state;
        self.publish(&states)
    }

    /// Currently resolved identity.
    pub fn current(&self) -> Option<Identity> {
        self.identity_tx.borrow().identity.clone()
    }

    /// Number of sign-outs published so far.
    pub fn generation(&self) -> u64 {
        self.identity_tx.borrow().generation
    }

    /// Subscribe to identity changes.
    pub fn subscribe(&self) -> watch::Receiver<IdentityUpdate> {
        self.identity_tx.subscribe()
    }

    fn publish(&self, states: &BackendStates) -> bool {
        let resolved = resolve(&states.primary, &states.fallback);

        let changed = self
            .identity_tx
            .send_if_modified(|current| current.advance(resolved.clone()));

        if changed {
            match &resolved {
                Some(identity) => info!(
                    "Identity resolved: {} via {} backend",
                    identity.id, identity.source
                ),
                None => info!("Identity cleared (signed out)"),
            }
        } else {
            debug!("Backend state updated, identity unchanged");
        }

        changed
    }
}
