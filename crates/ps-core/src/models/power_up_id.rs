use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a purchased power-up.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PowerUpId(String);

impl PowerUpId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PowerUpId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for PowerUpId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
