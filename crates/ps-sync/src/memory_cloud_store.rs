//! In-process cloud store with call counters and failure injection.

use crate::{CloudStore, SyncError, SyncResult};

use ps_core::{CloudProgress, CloudRecord};

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

#[derive(Debug, Default)]
pub struct MemoryCloudStore {
    records: Mutex<HashMap<String, CloudRecord>>,
    reads: AtomicUsize,
    writes: AtomicUsize,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemoryCloudStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a record, replacing any existing one.
    pub fn insert(&self, user_key: impl Into<String>, record: CloudRecord) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(user_key.into(), record);
    }

    pub fn record(&self, user_key: &str) -> Option<CloudRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(user_key)
            .cloned()
    }

    /// Number of `read` calls so far, failed ones included.
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    /// Number of `write` calls so far, failed ones included.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl CloudStore for MemoryCloudStore {
    async fn read(&self, user_key: &str) -> SyncResult<Option<CloudRecord>> {
        self.reads.fetch_add(1, Ordering::SeqCst);

        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(SyncError::unavailable(format!("read of {user_key} failed")));
        }

        Ok(self.record(user_key))
    }

    /// Upserts the progress, keeping any existing profile.
    async fn write(&self, user_key: &str, progress: &CloudProgress) -> SyncResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);

        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(SyncError::unavailable(format!(
                "write of {user_key} failed"
            )));
        }

        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(user_key.to_string())
            .or_default()
            .progress = progress.clone();

        Ok(())
    }
}
