//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages build their session holder through `use_auth_session` so every
//! route talks to the same backend, cookie jar and `RwSignal<AuthState>`.
//! Route components that need a user apply identical redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::{ApiConfig, HOME_ROUTE};
use crate::error::AuthError;
use crate::net::api::HttpApi;
use crate::session::AuthSession;
use crate::state::auth::AuthState;
use crate::util::cookie::BrowserCookies;
use crate::util::navigate::RouterNavigator;

/// Session holder wired to the browser collaborators.
pub type BrowserSession = AuthSession<HttpApi, BrowserCookies, RouterNavigator, RwSignal<AuthState>>;

/// Build the browser session holder. Must run inside `<Router>` with an
/// `RwSignal<AuthState>` in context.
pub fn use_auth_session() -> BrowserSession {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigator = RouterNavigator::new(use_navigate());
    AuthSession::new(HttpApi::new(ApiConfig::from_build_env()), BrowserCookies, navigator, auth)
}

/// True when a user-only route should send the visitor home.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.is_authenticated()
}

/// Redirect to the home route whenever no user is held.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(HOME_ROUTE, NavigateOptions::default());
        }
    });
}

/// Short message a form shows for a failed auth action.
pub fn failure_message(err: &AuthError) -> &'static str {
    match err {
        AuthError::Status { status: 400 | 401 | 403 } => "Email or password incorrect.",
        AuthError::Status { status: 409 } => "An account with this email already exists.",
        AuthError::Status { status } if *status >= 500 => "The server had a problem. Try again later.",
        AuthError::Request(_) => "Could not reach the server.",
        AuthError::Cookie(_) => "Could not save the session in this browser.",
        AuthError::Status { .. } | AuthError::Decode(_) | AuthError::Unavailable => {
            "Something went wrong. Try again."
        }
    }
}
