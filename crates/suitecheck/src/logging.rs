//! Debug tracing for suite runs

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call from every test; only the first call does anything.
/// Enable with `RUST_LOG=suitecheck=debug` or `RUST_LOG=suitecheck=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // Another subscriber may already be installed by the embedding test binary
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_test_writer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
