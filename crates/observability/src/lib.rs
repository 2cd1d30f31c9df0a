//! Tracing/logging setup shared by the binaries.

/// Initialize process-wide logging with an `info` default filter.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init("info");
}

/// Initialize logging with `default_filter` when `RUST_LOG` is unset.
pub fn init_with_default(default_filter: &str) {
    tracing::init(default_filter);
}

/// Subscriber configuration (filters, formatting).
pub mod tracing;
