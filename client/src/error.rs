//! Error type shared by the session holder and its collaborators.
//!
//! ERROR HANDLING
//! ==============
//! Every auth action logs its failure once where it happens and hands the
//! same value back to the caller, so pages can decide what to show without
//! anything panicking across a hydration boundary.

/// Failure outcome of an auth action or collaborator call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The HTTP request never produced a response (network, CORS, DNS).
    #[error("request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status.
    #[error("server responded with status {status}")]
    Status { status: u16 },

    /// The response body did not have the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),

    /// Writing or deleting the session cookie failed.
    #[error("cookie store failed: {0}")]
    Cookie(String),

    /// A browser-only API was called outside the browser (e.g. during SSR).
    #[error("not available outside the browser")]
    Unavailable,
}
