//! Sync orchestrator - runs the load → merge → apply → persist pipeline at
//! most once per signed-in identity.
//!
//! ## Guard
//!
//! `last_synced_id` is the only piece of state. It is claimed synchronously,
//! before the first `.await`, so any further trigger for the same identity
//! (repeated renders, an event arriving while the sync is in flight) is a
//! no-op. Sign-out clears it; signing in again, through either backend,
//! syncs again.
//!
//! A failed load is not retried within the session: the guard stays set
//! until the identity round-trips through sign-out.
//!
//! ## Failure containment
//!
//! Nothing here returns an error. Load and persist failures are logged;
//! local stores are never rolled back. A lagging cloud copy is healed by the
//! next successful sync.

use crate::{LocalProgressStores, ProgressLoader, ProgressWriter, SyncOutcome};

use ps_core::{Identity, IdentityUpdate, merge};

use std::sync::{Arc, Mutex, PoisonError};

use log::{debug, error, info, warn};
use tokio::sync::watch;
use tokio::task::JoinHandle;

pub struct SyncOrchestrator {
    stores: LocalProgressStores,
    loader: Arc<dyn ProgressLoader>,
    writer: Arc<dyn ProgressWriter>,
    last_synced_id: Mutex<Option<String>>,
}

impl SyncOrchestrator {
    pub fn new(
        stores: LocalProgressStores,
        loader: Arc<dyn ProgressLoader>,
        writer: Arc<dyn ProgressWriter>,
    ) -> Self {
        Self {
            stores,
            loader,
            writer,
            last_synced_id: Mutex::new(None),
        }
    }

    /// Identity the guard currently holds.
    pub fn last_synced_id(&self) -> Option<String> {
        self.last_synced_id
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// React to an identity/readiness change and run the pipeline if this
    /// identity has not been synced yet.
    pub async fn trigger(&self, identity: Option<&Identity>, ready: bool) -> SyncOutcome {
        match self.claim(identity, ready) {
            Ok(identity) => self.sync(&identity).await,
            Err(outcome) => outcome,
        }
    }

    /// Like [`trigger`](Self::trigger), but runs the pipeline on a
    /// background task so the caller never waits on I/O. The guard is still
    /// claimed before this returns. `None` when there was nothing to do.
    pub fn spawn_trigger(
        self: &Arc<Self>,
        identity: Option<&Identity>,
        ready: bool,
    ) -> Option<JoinHandle<SyncOutcome>> {
        let identity = self.claim(identity, ready).ok()?;
        let this = Arc::clone(self);

        Some(tokio::spawn(async move { this.sync(&identity).await }))
    }

    /// Subscribe to identity and readiness changes until the identity
    /// channel closes. Each change is deduplicated through the guard, so
    /// publishers may send as often as they like.
    ///
    /// `watch` only keeps the latest value, so a sign-out followed at once
    /// by a sign-in is detected through the update's generation rather than
    /// by observing `None`.
    pub async fn run(
        self: Arc<Self>,
        mut identity_rx: watch::Receiver<IdentityUpdate>,
        mut ready_rx: watch::Receiver<bool>,
    ) {
        let mut generation = identity_rx.borrow().generation;
        let mut ready_open = true;

        loop {
            let update = identity_rx.borrow_and_update().clone();
            let ready = *ready_rx.borrow_and_update();

            if update.generation != generation {
                generation = update.generation;
                self.reset_guard();
            }

            self.spawn_trigger(update.identity.as_ref(), ready);

            tokio::select! {
                changed = identity_rx.changed() => {
                    if changed.is_err() {
                        info!("Identity channel closed, stopping sync orchestrator");
                        break;
                    }
                }
                changed = ready_rx.changed(), if ready_open => {
                    if changed.is_err() {
                        // Keep the last readiness value.
                        ready_open = false;
                    }
                }
            }
        }
    }

    /// Forget the synced identity so its next sign-in syncs again.
    pub fn reset_guard(&self) {
        let mut last_synced_id = self
            .last_synced_id
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(previous) = last_synced_id.take() {
            info!("Signed out, sync guard for {previous} reset");
        }
    }

    /// Synchronous guard check. `Ok` means this call owns the sync for the
    /// returned identity.
    fn claim(&self, identity: Option<&Identity>, ready: bool) -> Result<Identity, SyncOutcome> {
        let Some(identity) = identity else {
            self.reset_guard();
            return Err(SyncOutcome::SignedOut);
        };

        let mut last_synced_id = self
            .last_synced_id
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if !ready {
            debug!("Local stores not ready, deferring sync for {}", identity.id);
            return Err(SyncOutcome::NotReady);
        }

        if last_synced_id.as_deref() == Some(identity.id.as_str()) {
            debug!("Already synced {} this session", identity.id);
            return Err(SyncOutcome::AlreadySynced);
        }

        *last_synced_id = Some(identity.id.clone());
        Ok(identity.clone())
    }

    async fn sync(&self, identity: &Identity) -> SyncOutcome {
        info!(
            "Syncing progress for {} via {} backend",
            identity.id, identity.source
        );

        let loaded = self.loader.load(identity).await;
        if loaded.is_failure() {
            warn!(
                "Cloud progress unavailable for {}, keeping local progress",
                identity.id
            );
            return SyncOutcome::LoadFailed;
        }

        let Some(record) = loaded.into_record() else {
            info!("No cloud progress for {}, keeping local progress", identity.id);
            return SyncOutcome::NoCloudRecord;
        };

        // Read after the load: writes made while it was in flight must not
        // be overwritten by `apply`.
        let local = self.stores.snapshot();
        let cloud = record.progress.to_snapshot();
        let merged = merge(&local, &cloud);

        self.stores.apply(&merged);
        info!(
            "Applied merged progress for {}: coins={}, high_score={}, themes={}, gate={}",
            identity.id,
            merged.coins,
            merged.high_score,
            merged.unlocked_themes.len(),
            merged.has_completed_gate
        );

        let persisted = match self.writer.persist(identity, &merged).await {
            Ok(()) => {
                info!("Persisted merged progress for {}", identity.id);
                true
            }
            Err(e) if e.is_transient() => {
                warn!(
                    "Failed to persist merged progress for {}: {e} (will resend on next sync)",
                    identity.id
                );
                false
            }
            Err(e) => {
                error!(
                    "Cloud rejected merged progress for {}: {e}",
                    identity.id
                );
                false
            }
        };

        SyncOutcome::Merged {
            progress: merged,
            persisted,
        }
    }
}
