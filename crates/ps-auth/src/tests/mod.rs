mod error;
mod identity_publisher;
mod identity_resolver;
mod session_store;

use ps_core::UserInfo;

pub(crate) fn user(id: &str) -> UserInfo {
    UserInfo {
        id: id.into(),
        username: format!("{id}_name"),
        display_name: None,
    }
}
