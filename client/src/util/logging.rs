//! Browser logging bootstrap.
//!
//! Routes the `log` facade to the devtools console and reports panics there
//! too. SSR and native builds leave logging to the host.

/// Install the console logger and panic hook. Safe to call more than once.
pub fn init() {
    #[cfg(feature = "hydrate")]
    {
        console_error_panic_hook::set_once();
        // A second init fails because a logger is already set; keep the first.
        let _ = console_log::init_with_level(log::Level::Debug);
    }
}
