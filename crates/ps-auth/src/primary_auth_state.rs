use ps_core::UserInfo;

use serde::{Deserialize, Serialize};

/// State reported by the primary (hosted) authentication backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryAuthState {
    /// Backend finished initializing; before this nothing else is trustworthy
    pub is_loaded: bool,
    pub is_signed_in: bool,
    pub user: Option<UserInfo>,
}

impl PrimaryAuthState {
    pub fn signed_in(user: UserInfo) -> Self {
        Self {
            is_loaded: true,
            is_signed_in: true,
            user: Some(user),
        }
    }

    pub fn signed_out() -> Self {
        Self {
            is_loaded: true,
            is_signed_in: false,
            user: None,
        }
    }

    /// The signed-in user, only once the backend has loaded.
    pub fn signed_in_user(&self) -> Option<&UserInfo> {
        if self.is_loaded && self.is_signed_in {
            self.user.as_ref()
        } else {
            None
        }
    }
}
