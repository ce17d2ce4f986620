//! Auth session holder: sign in, sign up and sign out for the current page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages build one `AuthSession` over the browser collaborators (see
//! `util::auth::use_auth_session`) and call it from `spawn_local` tasks. The
//! holder owns no state of its own; it reads and replaces `AuthState` through
//! an `AuthStore`, writes the token cookie and pushes routes.
//!
//! ERROR HANDLING
//! ==============
//! Each action logs a failure exactly once and returns it. A failed action
//! changes nothing: no cookie, no state write, no navigation.
//!
//! CONCURRENCY
//! ===========
//! Actions are not serialized. Overlapping sign ins each write cookie and
//! state when their response lands, so the last response wins. User and
//! bearer are swapped as one `AuthState`, never field by field.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::Serialize;
use serde_json::Value;

use crate::config::SessionConfig;
use crate::error::AuthError;
use crate::net::api::{ApiClient, SESSION_PATH, USERS_PATH};
use crate::net::types::{BearerToken, SignInRequest, SignInResponse, SignUpRequest, User};
use crate::state::auth::{AuthState, AuthStore};
use crate::util::cookie::{CookieOptions, CookieStore};
use crate::util::navigate::Navigator;

/// Holds the current user and performs the auth actions against its
/// collaborators.
#[derive(Clone)]
pub struct AuthSession<A, C, N, S> {
    api: A,
    cookies: C,
    navigator: N,
    store: S,
    config: SessionConfig,
}

impl<A, C, N, S> AuthSession<A, C, N, S>
where
    A: ApiClient,
    C: CookieStore,
    N: Navigator,
    S: AuthStore,
{
    pub fn new(api: A, cookies: C, navigator: N, store: S) -> Self {
        Self { api, cookies, navigator, store, config: SessionConfig::default() }
    }

    #[must_use]
    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn user(&self) -> Option<User> {
        self.store.snapshot().user
    }

    /// Recomputed from the store on every call.
    pub fn is_authenticated(&self) -> bool {
        self.store.snapshot().is_authenticated()
    }

    pub fn bearer(&self) -> Option<BearerToken> {
        self.store.snapshot().bearer
    }

    /// Exchange credentials for a session via `POST /session`.
    ///
    /// On success the token is written to the session cookie, the user
    /// (with the email given here) becomes current and the dashboard route
    /// is pushed.
    ///
    /// # Errors
    ///
    /// Returns the transport, status, decode or cookie failure after logging
    /// it.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let outcome = self.try_sign_in(email, password).await;
        if let Err(e) = &outcome {
            log::error!("sign in failed: {e}");
        }
        outcome
    }

    async fn try_sign_in(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let body = encode(&SignInRequest { email: email.to_owned(), password: password.to_owned() })?;
        let data = self.api.post(SESSION_PATH, body, None).await?;
        let resp: SignInResponse = serde_json::from_value(data).map_err(|e| AuthError::Decode(e.to_string()))?;

        self.cookies
            .set(&self.config.cookie_name, &resp.token, &CookieOptions::for_session(&self.config))?;

        let user = User { id: resp.id, name: resp.name, email: email.to_owned() };
        self.store
            .replace(AuthState::signed_in(user.clone(), BearerToken::new(resp.token)));
        self.navigator.push(&self.config.dashboard_route);
        Ok(user)
    }

    /// Register an account via `POST /users`, then go home.
    ///
    /// Does not sign the new user in.
    ///
    /// # Errors
    ///
    /// Returns the transport or status failure after logging it.
    pub async fn sign_up(&self, name: &str, email: &str, password: &str) -> Result<(), AuthError> {
        let outcome = self.try_sign_up(name, email, password).await;
        if let Err(e) = &outcome {
            log::error!("sign up failed: {e}");
        }
        outcome
    }

    async fn try_sign_up(&self, name: &str, email: &str, password: &str) -> Result<(), AuthError> {
        let body = encode(&SignUpRequest {
            name: name.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
        })?;
        let bearer = self.bearer();
        self.api.post(USERS_PATH, body, bearer.as_ref()).await?;
        log::info!("account created for {email}");
        self.navigator.push(&self.config.home_route);
        Ok(())
    }

    /// Delete the session cookie, drop the in-memory session and go home.
    ///
    /// # Errors
    ///
    /// Returns the cookie failure after logging it; the session is left
    /// untouched and no navigation happens.
    pub fn sign_out(&self) -> Result<(), AuthError> {
        if let Err(e) = self.cookies.destroy(&self.config.cookie_name, &self.config.cookie_path) {
            log::error!("sign out failed: {e}");
            return Err(e);
        }
        self.store.replace(AuthState::default());
        self.navigator.push(&self.config.home_route);
        Ok(())
    }

    /// `POST` with the held bearer token attached to this request only.
    ///
    /// # Errors
    ///
    /// Returns the `ApiClient` failure after logging it.
    pub async fn authorized_post(&self, path: &str, body: Value) -> Result<Value, AuthError> {
        let bearer = self.bearer();
        let outcome = self.api.post(path, body, bearer.as_ref()).await;
        if let Err(e) = &outcome {
            log::error!("POST {path} failed: {e}");
        }
        outcome
    }
}

fn encode<T: Serialize>(body: &T) -> Result<Value, AuthError> {
    serde_json::to_value(body).map_err(|e| AuthError::Request(e.to_string()))
}
