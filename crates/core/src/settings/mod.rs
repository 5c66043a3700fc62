//! Process-wide assertion settings
//!
//! The first assertion in a process loads [`AssertionConfig`] through
//! [`loader::load`] and caches it. Loading problems are logged and the
//! built-in defaults are used instead, so a broken config file never turns
//! into a failing assertion.

pub mod loader;

use chronassert_domain::AssertionConfig;
use once_cell::sync::OnceCell;

use crate::errors::Result;

static GLOBAL: OnceCell<AssertionConfig> = OnceCell::new();

/// The cached process-wide configuration
pub fn global() -> &'static AssertionConfig {
    GLOBAL.get_or_init(|| {
        loader::load().unwrap_or_else(|err| {
            tracing::debug!(error = %err, "Using default assertion configuration");
            AssertionConfig::default()
        })
    })
}

/// Install `config` before the first assertion runs
///
/// Returns `Ok(false)` (and leaves the active configuration untouched) when
/// the configuration was already loaded.
///
/// # Errors
/// Returns `AssertionError::Domain` when `config` fails validation, in which
/// case nothing is installed.
pub fn install(config: AssertionConfig) -> Result<bool> {
    config.validate()?;
    Ok(GLOBAL.set(config).is_ok())
}
