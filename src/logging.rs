//! Logging setup for the mekkapack binary
//!
//! Events go to stderr in a compact one-line format with timestamps. The level
//! defaults to `info` (`warn` when quiet) and `RUST_LOG` takes precedence.

use std::io;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Call once, before any packaging work.
pub fn init_logging(quiet: bool) {
    let default_level = if quiet { "warn" } else { "info" };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .compact();

    // A subscriber may already exist when embedded in tests; keep the existing one.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init();
}
