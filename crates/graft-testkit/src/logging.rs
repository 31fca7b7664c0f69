//! Tracing setup for test binaries.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize a fmt subscriber once per test binary; respects `RUST_LOG`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
