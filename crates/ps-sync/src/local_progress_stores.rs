//! The four local progress stores, bundled for the orchestrator.

use crate::{JsonFileStore, MemoryStore, ProgressStore, SyncResult};

use ps_core::{LocalProgress, MergedProgress, PowerUpId, ThemeId};

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

const COINS_FILE: &str = "coins.json";
const HIGH_SCORE_FILE: &str = "high_score.json";
const UNLOCKS_FILE: &str = "unlocks.json";
const GATE_FILE: &str = "gate.json";

/// Spendable balance plus the lifetime total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CoinBalance {
    pub coins: u64,
    pub total_earned: u64,
}

/// Unlocked themes and owned power-ups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UnlockedContent {
    pub themes: BTreeSet<ThemeId>,
    pub power_ups: BTreeSet<PowerUpId>,
}

impl Default for UnlockedContent {
    fn default() -> Self {
        Self {
            themes: BTreeSet::from([ThemeId::default_theme()]),
            power_ups: BTreeSet::new(),
        }
    }
}

/// Explicit handles to the local stores. Feature code keeps its own clones
/// of the `Arc`s; the orchestrator only touches them during a sync pass.
#[derive(Clone)]
pub struct LocalProgressStores {
    pub coins: Arc<dyn ProgressStore<CoinBalance>>,
    pub high_score: Arc<dyn ProgressStore<u64>>,
    pub unlocks: Arc<dyn ProgressStore<UnlockedContent>>,
    pub gate: Arc<dyn ProgressStore<bool>>,
}

impl LocalProgressStores {
    /// Fresh in-memory stores holding default values.
    pub fn in_memory() -> Self {
        Self {
            coins: Arc::new(MemoryStore::<CoinBalance>::default()),
            high_score: Arc::new(MemoryStore::<u64>::default()),
            unlocks: Arc::new(MemoryStore::<UnlockedContent>::default()),
            gate: Arc::new(MemoryStore::<bool>::default()),
        }
    }

    /// File-backed stores, one JSON file per store inside `dir`.
    pub fn open_dir(dir: &Path) -> SyncResult<Self> {
        Ok(Self {
            coins: Arc::new(JsonFileStore::<CoinBalance>::open(dir.join(COINS_FILE))?),
            high_score: Arc::new(JsonFileStore::<u64>::open(dir.join(HIGH_SCORE_FILE))?),
            unlocks: Arc::new(JsonFileStore::<UnlockedContent>::open(
                dir.join(UNLOCKS_FILE),
            )?),
            gate: Arc::new(JsonFileStore::<bool>::open(dir.join(GATE_FILE))?),
        })
    }

    /// Read every store into one snapshot.
    pub fn snapshot(&self) -> LocalProgress {
        let balance = self.coins.get();
        let unlocks = self.unlocks.get();

        LocalProgress {
            coins: balance.coins,
            total_earned: balance.total_earned,
            high_score: self.high_score.get(),
            unlocked_themes: unlocks.themes,
            owned_power_ups: unlocks.power_ups,
            has_completed_gate: self.gate.get(),
        }
        .normalized()
    }

    /// Write every field of `merged` into its store. Synchronous, so no
    /// partially-applied state is observable between the writes.
    ///
    /// With [`open_dir`](Self::open_dir) stores this performs four blocking
    /// file writes on the current thread.
    pub fn apply(&self, merged: &MergedProgress) {
        self.coins.set(CoinBalance {
            coins: merged.coins,
            total_earned: merged.total_earned,
        });
        self.high_score.set(merged.high_score);
        self.unlocks.set(UnlockedContent {
            themes: merged.unlocked_themes.clone(),
            power_ups: merged.owned_power_ups.clone(),
        });
        self.gate.set(merged.has_completed_gate);
    }
}
