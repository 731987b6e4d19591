//! Canonical authenticated-user reference, independent of the backend
//! that authenticated the user.

use crate::{CoreError, CoreResult};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which authentication backend produced an identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentitySource {
    Primary,
    Fallback,
}

impl IdentitySource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Fallback => "fallback",
        }
    }
}

impl fmt::Display for IdentitySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdentitySource {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s.to_lowercase().as_str() {
            "primary" => Ok(Self::Primary),
            "fallback" => Ok(Self::Fallback),
            _ => Err(CoreError::invalid_identity_source(s)),
        }
    }
}

/// User details as reported by either backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: String,
    pub source: IdentitySource,
    pub username: String,
    pub display_name: Option<String>,
}

impl Identity {
    pub fn new(source: IdentitySource, user: UserInfo) -> Self {
        Self {
            id: user.id,
            source,
            username: user.username,
            display_name: user.display_name,
        }
    }

    /// Key of this user's record in the cloud store, `"{source}:{id}"`.
    pub fn user_key(&self) -> String {
        format!("{}:{}", self.source, self.id)
    }
}
