//! Client configuration: backend location and session cookie/route settings.
//!
//! The browser bundle cannot read process env at runtime, so the backend base
//! URL is baked in at build time from `API_BASE_URL`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3333";

/// Cookie key holding the opaque session token.
pub const SESSION_COOKIE_NAME: &str = "@nextauth.token";
/// 30 days, in seconds.
pub const SESSION_COOKIE_MAX_AGE_SECS: u64 = 60 * 60 * 24 * 30;
pub const SESSION_COOKIE_PATH: &str = "/";

pub const DASHBOARD_ROUTE: &str = "/dashboard";
pub const HOME_ROUTE: &str = "/";

/// Where REST calls are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Build from the `API_BASE_URL` value captured at compile time.
    pub fn from_build_env() -> Self {
        Self::from_raw(option_env!("API_BASE_URL"))
    }

    /// Build from an optional raw base URL; blank values fall back to the
    /// default and a trailing `/` is dropped so paths can be appended.
    pub fn from_raw(raw: Option<&str>) -> Self {
        let base_url = raw
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        Self { base_url }
    }

    /// Absolute URL for an API path such as `/session`.
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_raw(None)
    }
}

/// Cookie and redirect settings used by the session holder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub cookie_name: String,
    pub cookie_max_age_secs: u64,
    pub cookie_path: String,
    /// Route pushed after a successful sign in.
    pub dashboard_route: String,
    /// Route pushed after sign up and sign out.
    pub home_route: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: SESSION_COOKIE_NAME.to_owned(),
            cookie_max_age_secs: SESSION_COOKIE_MAX_AGE_SECS,
            cookie_path: SESSION_COOKIE_PATH.to_owned(),
            dashboard_route: DASHBOARD_ROUTE.to_owned(),
            home_route: HOME_ROUTE.to_owned(),
        }
    }
}
