use crate::SyncError;

use ps_core::CloudRecord;

/// Result of loading cloud progress - distinguishes "not found" from errors
/// without making either one fatal.
#[derive(Debug)]
pub enum LoadResult {
    Found(CloudRecord),
    NotFound,
    /// Network or storage failure; treated exactly like `NotFound`
    Failed(SyncError),
}

impl LoadResult {
    /// The record, if one was loaded. Failures collapse to `None`.
    pub fn into_record(self) -> Option<CloudRecord> {
        match self {
            Self::Found(record) => Some(record),
            Self::NotFound | Self::Failed(_) => None,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}
