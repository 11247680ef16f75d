//! Tracing setup.
//!
//! Logs go to stderr so `roster list` output on stdout stays machine-readable.
//! `RUST_LOG` overrides the default filter.

use std::io;

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "roster=info";

/// Installs the global subscriber. Call once, before anything logs.
pub fn init(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
