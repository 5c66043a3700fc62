//! Tracing setup for assertion-heavy test suites
//!
//! The engine emits `debug!` events for failed predicates and, when enabled,
//! `trace!` events for passing ones. Test binaries opt into seeing them by
//! calling [`init_test_tracing`] once; `RUST_LOG` controls the filter.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "warn";

/// Install a test-friendly fmt subscriber
///
/// Output goes through the libtest capture writer so it only shows for
/// failing tests. Safe to call from every test: a second installation is
/// ignored.
pub fn init_test_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // Another subscriber may already be installed by an earlier test
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_test_writer().try_init();
}
