pub mod authenticated_user;
pub mod error;
pub mod fallback_auth;
pub mod fallback_auth_state;
pub mod file_session_store;
pub mod identity_publisher;
pub mod identity_resolver;
pub mod memory_session_store;
pub mod primary_auth_state;
pub mod session_store;

pub use authenticated_user::AuthenticatedUser;
pub use error::{AuthError, Result as AuthResult};
pub use fallback_auth::{CredentialVerifier, FallbackAuth};
pub use fallback_auth_state::FallbackAuthState;
pub use file_session_store::{FileSessionStore, StoredSession};
pub use identity_publisher::IdentityPublisher;
pub use identity_resolver::{authenticated_user, resolve};
pub use memory_session_store::MemorySessionStore;
pub use primary_auth_state::PrimaryAuthState;
pub use session_store::SessionStore;

#[cfg(test)]
mod tests;
