//! # Telemetry
//!
//! Tracing setup for host binaries.
//!
//! ## Log Levels
//! - `RUST_LOG=debug` - Show debug messages
//! - `RUST_LOG=tableside=trace` - Show trace for tableside crates only
//! - Default: INFO level, debug for the tableside crates

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber for structured logging.
///
/// Safe to call more than once: a second initialization (a host that also
/// configures logging, or parallel tests) is a no-op rather than a panic.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tableside=debug"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
