//! Stderr diagnostics via `RUST_LOG`.
//!
//! Per-file validation errors and discovery warnings go through `tracing`.
//! The end-of-run summary is product output on stdout and is not routed
//! through the subscriber.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`. Defaults to `warn` so per-file errors are visible
/// without configuration. Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=jsonvalidate=debug jsonvalidate 'dumps/*.json'
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
