//! Session cookie persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session token survives page loads in a first-party cookie. String
//! formatting and parsing live in plain functions so they are testable off
//! the browser; `BrowserCookies` only moves those strings through
//! `document.cookie`.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

use crate::config::SessionConfig;
use crate::error::AuthError;

/// Attributes written alongside a cookie value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CookieOptions {
    pub max_age_secs: u64,
    pub path: String,
}

impl CookieOptions {
    pub fn for_session(config: &SessionConfig) -> Self {
        Self { max_age_secs: config.cookie_max_age_secs, path: config.cookie_path.clone() }
    }
}

/// Key/value cookie jar the session holder writes its token into.
pub trait CookieStore {
    fn get(&self, name: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns `AuthError::Cookie` when the jar rejects the write.
    fn set(&self, name: &str, value: &str, options: &CookieOptions) -> Result<(), AuthError>;

    /// # Errors
    ///
    /// Returns `AuthError::Cookie` when the jar rejects the deletion.
    fn destroy(&self, name: &str, path: &str) -> Result<(), AuthError>;
}

/// `Set-Cookie`-style assignment for `document.cookie`. `value` must already
/// be encoded.
pub fn set_cookie_string(name: &str, value: &str, options: &CookieOptions) -> String {
    format!("{name}={value}; Max-Age={}; Path={}", options.max_age_secs, options.path)
}

/// Assignment that expires `name` immediately for `path`.
pub fn destroy_cookie_string(name: &str, path: &str) -> String {
    format!("{name}=; Max-Age=0; Path={path}")
}

/// Find the raw (still encoded) value of `name` in a `document.cookie` string.
pub fn find_cookie<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then_some(value)
    })
}

/// Cookie jar backed by the page's `document.cookie`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserCookies;

#[cfg(feature = "hydrate")]
fn html_document() -> Result<web_sys::HtmlDocument, AuthError> {
    use wasm_bindgen::JsCast;

    web_sys::window()
        .and_then(|w| w.document())
        .ok_or(AuthError::Unavailable)?
        .dyn_into::<web_sys::HtmlDocument>()
        .map_err(|_| AuthError::Unavailable)
}

impl CookieStore for BrowserCookies {
    fn get(&self, name: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let header = html_document().ok()?.cookie().ok()?;
            let raw = find_cookie(&header, name)?;
            js_sys::decode_uri_component(raw).ok().map(String::from)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = name;
            None
        }
    }

    fn set(&self, name: &str, value: &str, options: &CookieOptions) -> Result<(), AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let encoded = String::from(js_sys::encode_uri_component(value));
            html_document()?
                .set_cookie(&set_cookie_string(name, &encoded, options))
                .map_err(|e| AuthError::Cookie(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name, value, options);
            Err(AuthError::Unavailable)
        }
    }

    fn destroy(&self, name: &str, path: &str) -> Result<(), AuthError> {
        #[cfg(feature = "hydrate")]
        {
            html_document()?
                .set_cookie(&destroy_cookie_string(name, path))
                .map_err(|e| AuthError::Cookie(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name, path);
            Err(AuthError::Unavailable)
        }
    }
}
