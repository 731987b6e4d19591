//! Progress snapshot - one reading of every synced progress field.

use crate::{CoreError, CoreResult, PowerUpId, ThemeId};

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Snapshot of a player's progress, either read from the local stores
/// or normalized from a cloud record.
///
/// Every field only ever grows: counters are monotonic, sets only gain
/// members and the gate flag never flips back to `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProgressSnapshot {
    /// Current spendable coin balance
    pub coins: u64,
    /// Cumulative coins ever earned (never below `coins`)
    pub total_earned: u64,
    pub high_score: u64,
    /// Always contains the default theme
    pub unlocked_themes: BTreeSet<ThemeId>,
    pub owned_power_ups: BTreeSet<PowerUpId>,
    pub has_completed_gate: bool,
}

/// Snapshot read from the local progress stores at sync time.
pub type LocalProgress = ProgressSnapshot;

/// Output of the merge engine.
pub type MergedProgress = ProgressSnapshot;

impl Default for ProgressSnapshot {
    fn default() -> Self {
        Self {
            coins: 0,
            total_earned: 0,
            high_score: 0,
            unlocked_themes: BTreeSet::from([ThemeId::default_theme()]),
            owned_power_ups: BTreeSet::new(),
            has_completed_gate: false,
        }
    }
}

impl ProgressSnapshot {
    /// Restores the shape invariants: the default theme is present and
    /// `total_earned` is at least `coins`.
    pub fn normalized(mut self) -> Self {
        self.unlocked_themes.insert(ThemeId::default_theme());
        self.total_earned = self.total_earned.max(self.coins);
        self
    }

    /// Check the shape invariants without repairing them.
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        if self.total_earned < self.coins {
            return Err(CoreError::validation(
                "total_earned",
                format!(
                    "total_earned ({}) must not be below coins ({})",
                    self.total_earned, self.coins
                ),
            ));
        }

        if !self.unlocked_themes.contains(&ThemeId::default_theme()) {
            return Err(CoreError::validation(
                "unlocked_themes",
                "default theme must always be unlocked",
            ));
        }

        Ok(())
    }

    /// True when no field of `other` is ahead of `self`.
    pub fn dominates(&self, other: &ProgressSnapshot) -> bool {
        self.coins >= other.coins
            && self.total_earned >= other.total_earned
            && self.high_score >= other.high_score
            && self.unlocked_themes.is_superset(&other.unlocked_themes)
            && self.owned_power_ups.is_superset(&other.owned_power_ups)
            && (self.has_completed_gate || !other.has_completed_gate)
    }
}
