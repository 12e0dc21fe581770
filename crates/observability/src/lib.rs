//! Process-wide tracing/logging setup.

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use tracing::{LogFormat, TracingConfig};

/// Initialize process-wide logging from `RUST_LOG` / `PLAYGROUND_LOG_FORMAT`.
///
/// Safe to call multiple times; only the first call installs a subscriber.
pub fn init() {
    tracing::init(&TracingConfig::from_env());
}
