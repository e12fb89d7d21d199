//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Initialize tracing for the process.
///
/// Emits JSON log lines, filter configurable via `RUST_LOG` (defaults to
/// `info`). Catalog mutations log at `debug`, so `RUST_LOG=debug` shows
/// every add/delete. Idempotent: `try_init` makes repeat calls no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .json()
        .try_init();
}
