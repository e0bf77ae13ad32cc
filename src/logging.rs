//! Structured logging setup for the `sentir` binary.
//!
//! Stage progress (training counts, vocabulary size, accuracy) is emitted as
//! `tracing` events; this module wires up the subscriber that renders them.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Honors `RUST_LOG`; defaults to `sentir=info`. Events go to stderr so
/// they never mix with redirected data output. Safe to call more than once
/// (later calls are no-ops).
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sentir=info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
