//! Test utilities for webresource
//!
//! Helpers for writing tests: logging setup and temporary project directories with a
//! manifest and asset files.
//!
//! # Example
//!
//! ```rust,no_run
//! use webresource::test_utils::{ManifestFixture, TestProject};
//!
//! let project = TestProject::new().unwrap();
//! project.write_manifest(&ManifestFixture::basic()).unwrap();
//! project.write_file("js/app.js", "console.log(1);").unwrap();
//! assert!(project.manifest_path().exists());
//! ```

mod fixtures;

pub use fixtures::{ManifestFixture, TestProject};

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has an effect. Uses `level` when given, otherwise `RUST_LOG`;
/// without either, logging stays off.
///
/// ```bash
/// RUST_LOG=webresource=debug cargo test
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
