use ps_core::{Identity, IdentitySource, UserInfo};

/// A signed-in user tagged with the backend that authenticated them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthenticatedUser {
    Primary(UserInfo),
    Fallback(UserInfo),
}

impl AuthenticatedUser {
    pub fn source(&self) -> IdentitySource {
        match self {
            Self::Primary(_) => IdentitySource::Primary,
            Self::Fallback(_) => IdentitySource::Fallback,
        }
    }

    /// Collapse either backend's user into the uniform `Identity`.
    pub fn into_identity(self) -> Identity {
        match self {
            Self::Primary(user) => Identity::new(IdentitySource::Primary, user),
            Self::Fallback(user) => Identity::new(IdentitySource::Fallback, user),
        }
    }
}

impl From<AuthenticatedUser> for Identity {
    fn from(user: AuthenticatedUser) -> Self {
        user.into_identity()
    }
}
