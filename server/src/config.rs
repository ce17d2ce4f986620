//! Server configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory holding the built `pkg/` bundle; the Leptos site root when unset.
    pub site_root: Option<PathBuf>,
}

impl ServerConfig {
    /// Build from process env.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SITE_ROOT`: overrides the Leptos site root for static assets
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` when `PORT` is not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`ServerConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT").map(|v| v.trim().to_owned()) {
            None => DEFAULT_PORT,
            Some(v) if v.is_empty() => DEFAULT_PORT,
            Some(v) => v.parse().map_err(|_| ConfigError::Invalid { var: "PORT", value: v })?,
        };
        let site_root = lookup("SITE_ROOT")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Ok(Self { port, site_root })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
