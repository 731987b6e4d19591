pub mod cloud_progress;
pub mod identity;
pub mod identity_update;
pub mod power_up_id;
pub mod progress_snapshot;
pub mod theme_id;
