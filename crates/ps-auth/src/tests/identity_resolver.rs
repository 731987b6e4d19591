use crate::tests::user;
use crate::{AuthenticatedUser, FallbackAuthState, PrimaryAuthState, authenticated_user, resolve};

use ps_core::IdentitySource;

use googletest::assert_that;
use googletest::prelude::{eq, none, some};

// =========================================================================
// resolve
// =========================================================================

#[test]
fn given_nobody_signed_in_when_resolve_then_none() {
    let identity = resolve(&PrimaryAuthState::signed_out(), &FallbackAuthState::default());

    assert_that!(identity, none());
}

#[test]
fn given_primary_signed_in_when_resolve_then_primary_identity() {
    // Given
    let primary = PrimaryAuthState::signed_in(user("p1"));

    // When
    let identity = resolve(&primary, &FallbackAuthState::default()).unwrap();

    // Then
    assert_that!(identity.id.as_str(), eq("p1"));
    assert_that!(identity.source, eq(IdentitySource::Primary));
    assert_that!(identity.username.as_str(), eq("p1_name"));
}

#[test]
fn given_only_fallback_signed_in_when_resolve_then_fallback_identity() {
    let fallback = FallbackAuthState::signed_in(user("f1"));

    let identity = resolve(&PrimaryAuthState::signed_out(), &fallback).unwrap();

    let key = identity.user_key();
    assert_that!(identity.source, eq(IdentitySource::Fallback));
    assert_that!(key.as_str(), eq("fallback:f1"));
}

#[test]
fn given_both_signed_in_when_resolve_then_primary_wins() {
    // Given
    let primary = PrimaryAuthState::signed_in(user("p1"));
    let fallback = FallbackAuthState::signed_in(user("f1"));

    // When
    let identity = resolve(&primary, &fallback).unwrap();

    // Then
    assert_that!(identity.id.as_str(), eq("p1"));
    assert_that!(identity.source, eq(IdentitySource::Primary));
}

#[test]
fn given_primary_not_loaded_when_resolve_then_ignores_primary_user() {
    // Given - stale user object while the backend is still initializing
    let primary = PrimaryAuthState {
        is_loaded: false,
        is_signed_in: true,
        user: Some(user("p1")),
    };
    let fallback = FallbackAuthState::signed_in(user("f1"));

    // When
    let identity = resolve(&primary, &fallback).unwrap();

    // Then
    assert_that!(identity.source, eq(IdentitySource::Fallback));
}

#[test]
fn given_primary_signed_in_without_user_when_resolve_then_none() {
    let primary = PrimaryAuthState {
        is_loaded: true,
        is_signed_in: true,
        user: None,
    };

    assert_that!(resolve(&primary, &FallbackAuthState::default()), none());
}

#[test]
fn given_fallback_error_without_user_when_resolve_then_none() {
    let fallback = FallbackAuthState::failed("Invalid password");

    assert_that!(resolve(&PrimaryAuthState::default(), &fallback), none());
}

// =========================================================================
// authenticated_user
// =========================================================================

#[test]
fn given_fallback_user_when_authenticated_user_then_tagged_fallback() {
    let fallback = FallbackAuthState::signed_in(user("f1"));

    let tagged = authenticated_user(&PrimaryAuthState::default(), &fallback);

    assert_that!(tagged, some(eq(&AuthenticatedUser::Fallback(user("f1")))));
    assert_that!(
        tagged.map(|u| u.source()),
        some(eq(IdentitySource::Fallback))
    );
}
