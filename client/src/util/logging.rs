//! Browser console logging.
//!
//! Routes the `log` facade to the devtools console when running in the
//! browser. Server rendering logs through the server's `tracing` subscriber
//! instead, so this is a no-op there.

/// Install the console logger. Safe to call more than once.
pub fn init() {
    #[cfg(feature = "hydrate")]
    {
        let _ = console_log::init_with_level(log::Level::Info);
    }
}
