use crate::tests::user;
use crate::{FallbackAuthState, IdentityPublisher, PrimaryAuthState};

use ps_core::IdentitySource;

use googletest::assert_that;
use googletest::prelude::{eq, none};

#[test]
fn given_new_publisher_when_current_then_none() {
    let publisher = IdentityPublisher::new();

    assert_that!(publisher.current(), none());
}

#[test]
fn given_primary_sign_in_when_update_then_publishes_identity() {
    // Given
    let publisher = IdentityPublisher::new();
    let mut rx = publisher.subscribe();

    // When
    let changed = publisher.update_primary(PrimaryAuthState::signed_in(user("p1")));

    // Then
    assert!(changed);
    assert!(rx.has_changed().unwrap());
    let identity = rx.borrow_and_update().identity.clone().unwrap();
    assert_that!(identity.id.as_str(), eq("p1"));
}

#[test]
fn given_same_state_pushed_repeatedly_when_update_then_publishes_once() {
    // Given
    let publisher = IdentityPublisher::new();
    let mut rx = publisher.subscribe();
    publisher.update_primary(PrimaryAuthState::signed_in(user("p1")));
    rx.borrow_and_update();

    // When - host re-evaluates without any real change
    let changed_again = publisher.update_primary(PrimaryAuthState::signed_in(user("p1")));
    let fallback_noise = publisher.update_fallback(FallbackAuthState::failed("ignored"));

    // Then
    assert!(!changed_again);
    assert!(!fallback_noise);
    assert!(!rx.has_changed().unwrap());
}

#[test]
fn given_primary_signs_out_with_fallback_session_when_update_then_switches_to_fallback() {
    // Given
    let publisher = IdentityPublisher::new();
    publisher.update_fallback(FallbackAuthState::signed_in(user("f1")));
    publisher.update_primary(PrimaryAuthState::signed_in(user("p1")));

    // When
    publisher.update_primary(PrimaryAuthState::signed_out());

    // Then
    let identity = publisher.current().unwrap();
    assert_that!(identity.source, eq(IdentitySource::Fallback));
    assert_that!(identity.id.as_str(), eq("f1"));
}

#[test]
fn given_signed_in_when_all_backends_sign_out_then_publishes_none() {
    let publisher = IdentityPublisher::new();
    publisher.update_primary(PrimaryAuthState::signed_in(user("p1")));

    let changed = publisher.update_primary(PrimaryAuthState::signed_out());

    assert!(changed);
    assert_that!(publisher.current(), none());
}

#[test]
fn given_sign_out_then_same_sign_in_when_not_observed_then_generation_reveals_sign_out() {
    // Given
    let publisher = IdentityPublisher::new();
    let mut rx = publisher.subscribe();
    publisher.update_primary(PrimaryAuthState::signed_in(user("p1")));
    let seen = rx.borrow_and_update().clone();

    // When - no subscriber runs between the two updates
    publisher.update_primary(PrimaryAuthState::signed_out());
    publisher.update_primary(PrimaryAuthState::signed_in(user("p1")));

    // Then
    let latest = rx.borrow_and_update().clone();
    assert_that!(latest.identity, eq(&seen.identity));
    assert_that!(latest.generation, eq(seen.generation + 1));
    assert_that!(publisher.generation(), eq(1));
}
