use ps_core::UserInfo;

use serde::{Deserialize, Serialize};

/// Result of a fallback sign-in/sign-up and the backend's current state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackAuthState {
    pub user: Option<UserInfo>,
    pub error: Option<String>,
}

impl FallbackAuthState {
    pub fn signed_in(user: UserInfo) -> Self {
        Self {
            user: Some(user),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            user: None,
            error: Some(error.into()),
        }
    }

    pub fn signed_in_user(&self) -> Option<&UserInfo> {
        self.user.as_ref()
    }
}
