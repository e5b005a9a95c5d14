//! Tracing/logging initialization.
//!
//! JSON lines with span context, filtered via `RUST_LOG`.

use tracing_subscriber::EnvFilter;

/// Install the process-wide subscriber.
///
/// Safe to call more than once (later calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_current_span(true)
        .with_target(false)
        .try_init();
}
