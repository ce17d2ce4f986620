//! REST client seam used by the session holder.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: `HttpApi` answers
//! `AuthError::Unavailable` since these endpoints are only meaningful in the
//! browser.
//!
//! DESIGN
//! ======
//! Credentials travel with each call as an explicit `bearer` argument. The
//! client keeps no default headers, so two holders never share a token by
//! accident.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use serde_json::Value;

use super::types::BearerToken;
use crate::config::ApiConfig;
use crate::error::AuthError;

pub const SESSION_PATH: &str = "/session";
pub const USERS_PATH: &str = "/users";

/// Minimal JSON-over-HTTP surface the auth flows rely on.
#[async_trait(?Send)]
pub trait ApiClient {
    /// `POST` a JSON body to `path` and return the decoded JSON response.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Request` when no response arrives,
    /// `AuthError::Status` for non-2xx responses and `AuthError::Decode` when
    /// the body is not JSON.
    async fn post(&self, path: &str, body: Value, bearer: Option<&BearerToken>) -> Result<Value, AuthError>;
}

/// Browser HTTP client talking to the configured backend.
#[derive(Clone, Debug, Default)]
pub struct HttpApi {
    config: ApiConfig,
}

impl HttpApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

#[async_trait(?Send)]
impl ApiClient for HttpApi {
    async fn post(&self, path: &str, body: Value, bearer: Option<&BearerToken>) -> Result<Value, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.endpoint(path);
            let mut builder = gloo_net::http::Request::post(&url);
            if let Some(token) = bearer {
                builder = builder.header("Authorization", &token.header_value());
            }
            let resp = builder
                .json(&body)
                .map_err(|e| AuthError::Request(e.to_string()))?
                .send()
                .await
                .map_err(|e| AuthError::Request(e.to_string()))?;
            if !resp.ok() {
                return Err(AuthError::Status { status: resp.status() });
            }
            let text = resp.text().await.map_err(|e| AuthError::Decode(e.to_string()))?;
            decode_body(&text)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body, bearer);
            Err(AuthError::Unavailable)
        }
    }
}

/// Decode a response body, treating an empty body as JSON `null`.
#[cfg(any(test, feature = "hydrate"))]
fn decode_body(text: &str) -> Result<Value, AuthError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|e| AuthError::Decode(e.to_string()))
}
