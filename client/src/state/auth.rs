//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided through context as `RwSignal<AuthState>` so pages and the route
//! guard re-render when the session changes. The session holder only ever
//! swaps the whole value, never individual fields.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use crate::net::types::{BearerToken, User};

/// Current user plus the credential attached to authenticated requests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub bearer: Option<BearerToken>,
}

impl AuthState {
    pub fn signed_in(user: User, bearer: BearerToken) -> Self {
        Self { user: Some(user), bearer: Some(bearer) }
    }

    /// True iff a user is held.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Where the session holder keeps its `AuthState`.
pub trait AuthStore {
    /// Current state, read without subscribing to changes.
    fn snapshot(&self) -> AuthState;

    /// Replace the whole state in a single write.
    fn replace(&self, state: AuthState);
}

impl AuthStore for RwSignal<AuthState> {
    fn snapshot(&self) -> AuthState {
        self.get_untracked()
    }

    fn replace(&self, state: AuthState) {
        self.set(state);
    }
}

/// Shared in-memory store for holders living outside a reactive owner.
#[derive(Clone, Debug, Default)]
pub struct MemoryAuthStore(Rc<RefCell<AuthState>>);

impl AuthStore for MemoryAuthStore {
    fn snapshot(&self) -> AuthState {
        self.0.borrow().clone()
    }

    fn replace(&self, state: AuthState) {
        *self.0.borrow_mut() = state;
    }
}
