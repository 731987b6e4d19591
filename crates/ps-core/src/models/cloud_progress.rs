//! Cloud-side progress record as stored by the persistence API.
//!
//! Records written by older clients may lack any field, so everything is
//! optional on the wire and defaults conservatively when normalized.

use crate::{PowerUpId, ProgressSnapshot, ThemeId};

use serde::{Deserialize, Serialize};

/// Progress fields exactly as the cloud store returns them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CloudProgress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coins: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_earned: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_score: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlocked_themes: Option<Vec<ThemeId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owned_power_ups: Option<Vec<PowerUpId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_completed_gate: Option<bool>,
}

impl CloudProgress {
    /// Normalize into a snapshot: missing counters become `0`, missing sets
    /// become empty (plus the default theme), a missing flag is `false`.
    pub fn to_snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            coins: self.coins.unwrap_or(0),
            total_earned: self.total_earned.unwrap_or(0),
            high_score: self.high_score.unwrap_or(0),
            unlocked_themes: self
                .unlocked_themes
                .iter()
                .flatten()
                .cloned()
                .collect(),
            owned_power_ups: self
                .owned_power_ups
                .iter()
                .flatten()
                .cloned()
                .collect(),
            has_completed_gate: self.has_completed_gate.unwrap_or(false),
        }
        .normalized()
    }
}

impl From<&ProgressSnapshot> for CloudProgress {
    fn from(snapshot: &ProgressSnapshot) -> Self {
        Self {
            coins: Some(snapshot.coins),
            total_earned: Some(snapshot.total_earned),
            high_score: Some(snapshot.high_score),
            unlocked_themes: Some(snapshot.unlocked_themes.iter().cloned().collect()),
            owned_power_ups: Some(snapshot.owned_power_ups.iter().cloned().collect()),
            has_completed_gate: Some(snapshot.has_completed_gate),
        }
    }
}

/// Public profile stored next to the progress.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CloudProfile {
    pub username: Option<String>,
    pub display_name: Option<String>,
}

/// Everything the cloud store holds for one user key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudRecord {
    pub profile: CloudProfile,
    pub progress: CloudProgress,
}
