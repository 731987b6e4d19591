pub mod error;
pub mod merge;
pub mod models;

pub use error::{CoreError, Result as CoreResult};
pub use merge::merge;
pub use models::cloud_progress::{CloudProfile, CloudProgress, CloudRecord};
pub use models::identity::{Identity, IdentitySource, UserInfo};
pub use models::identity_update::IdentityUpdate;
pub use models::power_up_id::PowerUpId;
pub use models::progress_snapshot::{LocalProgress, MergedProgress, ProgressSnapshot};
pub use models::theme_id::{DEFAULT_THEME_ID, ThemeId};

#[cfg(test)]
mod tests;
