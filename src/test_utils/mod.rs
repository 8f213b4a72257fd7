//! Test utilities for proompt
//!
//! In-memory stand-ins for every capability the core consumes, so the
//! resolver, manager and fill-in flow can be exercised deterministically:
//!
//! - [`MemoryFilesystem`] – a [`Filesystem`](crate::filesystem::Filesystem) over a path map
//! - [`StaticLocationResolver`] – fixed location list
//! - [`FakeEditor`], [`FakePicker`], [`FakeClipboard`] – scripted external programs
//!
//! Available to unit tests and, with the `test-utils` feature, to
//! integration tests.

pub mod fakes;
pub mod memory_fs;

pub use fakes::{FakeClipboard, FakeEditor, FakePicker, StaticLocationResolver};
pub use memory_fs::MemoryFilesystem;

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Installs the tracing subscriber at most once. Uses `level` when given,
/// otherwise `RUST_LOG`; with neither, logging stays off.
///
/// ```bash
/// RUST_LOG=debug cargo test
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
