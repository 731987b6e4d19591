//! Identity resolution across the two authentication backends.

use crate::{AuthenticatedUser, FallbackAuthState, PrimaryAuthState};

use ps_core::Identity;

/// Pick the authenticated user, preferring the primary backend when both
/// report a session.
pub fn authenticated_user(
    primary: &PrimaryAuthState,
    fallback: &FallbackAuthState,
) -> Option<AuthenticatedUser> {
    if let Some(user) = primary.signed_in_user() {
        return Some(AuthenticatedUser::Primary(user.clone()));
    }

    fallback
        .signed_in_user()
        .map(|user| AuthenticatedUser::Fallback(user.clone()))
}

/// Resolve the canonical identity for the current backend states.
///
/// Pure and uncached: call it again whenever either state changes.
/// `None` (nobody signed in) is a normal result, not an error.
pub fn resolve(primary: &PrimaryAuthState, fallback: &FallbackAuthState) -> Option<Identity> {
    authenticated_user(primary, fallback).map(AuthenticatedUser::into_identity)
}
