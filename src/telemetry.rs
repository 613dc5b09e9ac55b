//! Logging setup for the command-line binary
//!
//! Logs go to stderr so that stdout carries only data (rows, menu JSON).
//! `RUST_LOG` takes precedence over the level chosen on the command line.

use tracing_subscriber::EnvFilter;

/// Crate-level filter when `RUST_LOG` is not set
pub fn default_filter(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("warn,school_portal_core={}", level)
}

/// Install the global fmt subscriber
///
/// Calling this more than once is harmless: later calls leave the first
/// subscriber in place.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
