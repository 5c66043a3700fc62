//! # Chronassert Domain
//!
//! Value types shared by the assertion engine.
//!
//! This crate contains:
//! - The subject under test and its date/time components
//! - Range comparison modes and requests
//! - Assertion options, failures and configuration
//! - Domain error types and Result definitions
//!
//! ## Architecture
//! - No dependencies on other Chronassert crates
//! - Only external dependencies allowed
//! - Pure value types, no reporting or I/O

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
