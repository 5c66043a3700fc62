//! Per-chain assertion options

use serde::{Deserialize, Serialize};

use crate::config::AssertionConfig;
use crate::constants::DEFAULT_PRECISION_MS;

/// AssertionOptions - Explanation and precision applied to predicates
///
/// `reason` is a template whose `{0}`, `{1}`, ... placeholders are filled from
/// `reason_args`. It is appended to every failure message as a
/// "because ..." clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssertionOptions {
    /// Explanation template, if any
    pub reason: Option<String>,
    /// Values for the placeholders in `reason`
    pub reason_args: Vec<String>,
    /// Half-width of the `be_close_to` window, in milliseconds
    pub precision_ms: i64,
}

impl AssertionOptions {
    /// Options seeded from process-wide configuration
    pub fn from_config(config: &AssertionConfig) -> Self {
        Self { reason: None, reason_args: Vec::new(), precision_ms: config.default_precision_ms }
    }

    /// Attach an explanation and its arguments
    pub fn because<I, A>(mut self, reason: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: ToString,
    {
        self.reason = Some(reason.into());
        self.reason_args = args.into_iter().map(|arg| arg.to_string()).collect();
        self
    }

    /// Override the `be_close_to` precision
    pub fn with_precision_ms(mut self, precision_ms: i64) -> Self {
        self.precision_ms = precision_ms;
        self
    }
}

impl Default for AssertionOptions {
    fn default() -> Self {
        Self { reason: None, reason_args: Vec::new(), precision_ms: DEFAULT_PRECISION_MS }
    }
}
