//! Merge engine - combines a local and a cloud snapshot without losing progress.
//!
//! Every field uses an order-independent rule (max, set union, logical OR),
//! so the merge is commutative, associative and idempotent. No versioning or
//! tie-break scheme is involved.

use crate::{MergedProgress, ProgressSnapshot};

/// Merge two progress snapshots field by field.
///
/// | field                | rule        |
/// |----------------------|-------------|
/// | `coins`              | max         |
/// | `total_earned`       | max         |
/// | `high_score`         | max         |
/// | `unlocked_themes`    | union       |
/// | `owned_power_ups`    | union       |
/// | `has_completed_gate` | logical OR  |
///
/// The result always contains the default theme.
pub fn merge(local: &ProgressSnapshot, cloud: &ProgressSnapshot) -> MergedProgress {
    ProgressSnapshot {
        coins: local.coins.max(cloud.coins),
        total_earned: local.total_earned.max(cloud.total_earned),
        high_score: local.high_score.max(cloud.high_score),
        unlocked_themes: local
            .unlocked_themes
            .union(&cloud.unlocked_themes)
            .cloned()
            .collect(),
        owned_power_ups: local
            .owned_power_ups
            .union(&cloud.owned_power_ups)
            .cloned()
            .collect(),
        has_completed_gate: local.has_completed_gate || cloud.has_completed_gate,
    }
    .normalized()
}
