use crate::ProgressStore;

use std::sync::{PoisonError, RwLock};

/// Progress store held in memory only.
#[derive(Debug, Default)]
pub struct MemoryStore<T> {
    value: RwLock<T>,
}

impl<T> MemoryStore<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }
}

impl<T: Clone + Send + Sync> ProgressStore<T> for MemoryStore<T> {
    fn get(&self) -> T {
        self.value
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set(&self, value: T) {
        *self.value.write().unwrap_or_else(PoisonError::into_inner) = value;
    }
}
