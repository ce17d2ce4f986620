//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (cookies, routing,
//! console logging) from page logic to improve reuse and testability.

pub mod auth;
pub mod cookie;
pub mod logging;
pub mod navigate;
