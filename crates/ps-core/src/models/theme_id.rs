//! Theme identifiers - cosmetic content unlocked with coins.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Theme every player owns from the first launch.
pub const DEFAULT_THEME_ID: &str = "beach";

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeId(String);

impl ThemeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The theme that is always unlocked.
    pub fn default_theme() -> Self {
        Self(String::from(DEFAULT_THEME_ID))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ThemeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
