//! Shared utilities for the Chronassert crates.
//!
//! # Feature Tiers
//!
//! Enable cargo features to opt into the tiers you need:
//! - `foundation`: failure template rendering and value formatting
//! - `observability`: tracing subscriber setup for test binaries

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

// Foundation tier
// -----------------------------------------------------------------
#[cfg(feature = "foundation")]
pub mod template;
#[cfg(feature = "foundation")]
pub mod time;

// Observability tier
// -----------------------------------------------------------------
#[cfg(feature = "observability")]
pub mod observability;

// Re-export commonly used items
// ------------------------
#[cfg(feature = "observability")]
pub use observability::init_test_tracing;
#[cfg(feature = "foundation")]
pub use template::{because_clause, render};
#[cfg(feature = "foundation")]
pub use time::{format_datetime, format_optional, format_time_delta};
