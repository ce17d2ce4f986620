use super::*;

fn ana() -> User {
    User { id: "1".to_owned(), name: "Ana".to_owned(), email: "ana@x.com".to_owned() }
}

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(state.bearer.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn auth_state_with_user_is_authenticated() {
    let state = AuthState::signed_in(ana(), BearerToken::new("abc"));
    assert!(state.is_authenticated());
}

#[test]
fn auth_state_authentication_follows_user_only() {
    let state = AuthState { user: None, bearer: Some(BearerToken::new("abc")) };
    assert!(!state.is_authenticated());
    let state = AuthState { user: Some(ana()), bearer: None };
    assert!(state.is_authenticated());
}

// =============================================================
// MemoryAuthStore
// =============================================================

#[test]
fn memory_store_clones_share_state() {
    let store = MemoryAuthStore::default();
    let other = store.clone();
    store.replace(AuthState::signed_in(ana(), BearerToken::new("abc")));
    assert_eq!(other.snapshot().user, Some(ana()));
    other.replace(AuthState::default());
    assert!(!store.snapshot().is_authenticated());
}
