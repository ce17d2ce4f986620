use super::*;
use crate::net::types::{BearerToken, User};

#[test]
fn should_redirect_unauth_when_user_missing() {
    assert!(should_redirect_unauth(&AuthState::default()));
}

#[test]
fn should_not_redirect_when_user_exists() {
    let state = AuthState::signed_in(
        User { id: "u1".to_owned(), name: "Alice".to_owned(), email: "alice@x.com".to_owned() },
        BearerToken::new("t"),
    );
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn failure_message_for_rejected_credentials() {
    assert_eq!(failure_message(&AuthError::Status { status: 401 }), "Email or password incorrect.");
    assert_eq!(failure_message(&AuthError::Status { status: 400 }), "Email or password incorrect.");
}

#[test]
fn failure_message_for_conflict_and_server_errors() {
    assert_eq!(
        failure_message(&AuthError::Status { status: 409 }),
        "An account with this email already exists."
    );
    assert_eq!(
        failure_message(&AuthError::Status { status: 502 }),
        "The server had a problem. Try again later."
    );
}

#[test]
fn failure_message_for_transport_and_other_errors() {
    assert_eq!(failure_message(&AuthError::Request("x".to_owned())), "Could not reach the server.");
    assert_eq!(failure_message(&AuthError::Status { status: 418 }), "Something went wrong. Try again.");
    assert_eq!(failure_message(&AuthError::Decode("x".to_owned())), "Something went wrong. Try again.");
}
