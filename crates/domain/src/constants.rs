//! Assertion constants
//!
//! Centralized location for defaults and configuration keys used throughout
//! the engine.

// Proximity defaults
/// Half-width of the `be_close_to` window when nothing is configured
pub const DEFAULT_PRECISION_MS: i64 = 20;

// Configuration
/// Environment key overriding the default precision
pub const ENV_DEFAULT_PRECISION_MS: &str = "CHRONASSERT_DEFAULT_PRECISION_MS";
/// Environment key enabling trace events for passing predicates
pub const ENV_LOG_PASSES: &str = "CHRONASSERT_LOG_PASSES";
/// File name, without extension, of the probed config file
pub const CONFIG_FILE_STEM: &str = "chronassert";
