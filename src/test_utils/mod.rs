//! Test utilities for validate-npm-package
//!
//! Available to unit tests and, through the `test-utils` feature, to the
//! integration suite.
//!
//! # Example
//!
//! ```rust,no_run
//! use validate_npm_package::test_utils::{ManifestFixture, init_test_logging};
//!
//! init_test_logging(None);
//! let dir = tempfile::TempDir::new().unwrap();
//! ManifestFixture::complete().write_to(dir.path()).unwrap();
//! ```

pub mod fixtures;

pub use fixtures::ManifestFixture;

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has any effect. An explicit `level` wins; otherwise
/// `RUST_LOG` is honored, and with neither set no subscriber is installed.
///
/// To enable logging in tests via environment variable:
/// ```bash
/// RUST_LOG=validate_npm_package=trace cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}
