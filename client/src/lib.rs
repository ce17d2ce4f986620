//! # client
//!
//! Leptos + WASM frontend holding the browser's auth session: sign in, sign
//! up and sign out against the REST backend, the session token cookie, and
//! the pages that drive them.
//!
//! The session holder (`session::AuthSession`) is generic over its
//! collaborators (HTTP, cookie jar, router, state store) so the same flow
//! runs against browser APIs in the app and against doubles in tests.

pub mod app;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// WASM entry point: hydrate the server-rendered `App`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    util::logging::init();
    leptos::mount::hydrate_body(app::App);
}
