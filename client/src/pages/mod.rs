//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form state and hands the auth action to the session
//! holder; navigation after an action is the holder's job, not the page's.

pub mod dashboard;
pub mod sign_in;
pub mod sign_up;
