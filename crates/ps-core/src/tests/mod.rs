
use crate::{PowerUpId, ProgressSnapshot, ThemeId};

/// Build a snapshot with the given counters and extra themes.
pub(crate) fn snapshot(coins: u64, high_score: u64, themes: &[&str]) -> ProgressSnapshot {
    let mut snapshot = ProgressSnapshot {
        coins,
        total_earned: coins,
        high_score,
        ..ProgressSnapshot::default()
    };
    snapshot
        .unlocked_themes
        .extend(themes.iter().map(|t| ThemeId::from(*t)));
    snapshot
}

pub(crate) fn with_power_ups(mut snapshot: ProgressSnapshot, ids: &[&str]) -> ProgressSnapshot {
    snapshot
        .owned_power_ups
        .extend(ids.iter().map(|p| PowerUpId::from(*p)));
    snapshot
}
