//! Test helpers.
//!
//! Exposed to integration tests through the `test-internals` feature.

use std::sync::Once;

static INIT_LOGGING: Once = Once::new();

/// Installs a test-writer tracing subscriber once per process.
///
/// Filtering follows `RUST_LOG`, defaulting to `authutil=debug`.
pub fn init_test_logging() {
    INIT_LOGGING.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("authutil=debug"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
