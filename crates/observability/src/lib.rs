//! Shared tracing/logging setup for the storefront workspace.

/// Initialize process-wide observability.
///
/// Idempotent; callers (binaries, integration tests) may all invoke it.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, output format).
pub mod tracing;
