//! Networking modules for the auth REST endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` holds the HTTP client seam and its browser implementation, `types`
//! defines the wire schema.

pub mod api;
pub mod types;
