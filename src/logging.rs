//! Logging setup
//!
//! `RUST_LOG` picks the level; without it only warnings and errors show,
//! so rejected user input stays quiet by default.
//! Logs go to stderr so they never mix with console replies on stdout.

use env_logger::Env;

/// Setup logging for the portal binary
pub fn setup_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
}

/// Route log output through the test harness; safe to call repeatedly.
#[cfg(test)]
pub fn ensure_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
