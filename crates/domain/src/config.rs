//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PRECISION_MS;
use crate::errors::{DomainError, Result};

/// Process-wide assertion defaults
///
/// Loaded once per process (environment first, then a config file) and used
/// to seed [`AssertionOptions`](crate::types::AssertionOptions) for every new
/// assertion chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssertionConfig {
    /// Precision used by `be_close_to` when the caller sets none
    pub default_precision_ms: i64,
    /// Emit a trace event for every passing predicate
    pub log_passes: bool,
}

impl AssertionConfig {
    /// Reject values the engine cannot use.
    ///
    /// # Errors
    /// Returns `DomainError::Config` when the default precision is negative.
    pub fn validate(&self) -> Result<()> {
        if self.default_precision_ms < 0 {
            return Err(DomainError::Config(format!(
                "default_precision_ms must not be negative, got {}",
                self.default_precision_ms
            )));
        }
        Ok(())
    }
}

impl Default for AssertionConfig {
    fn default() -> Self {
        Self { default_precision_ms: DEFAULT_PRECISION_MS, log_passes: false }
    }
}
