//! # Chronassert Core
//!
//! Fluent predicates over points in time.
//!
//! This crate contains:
//! - The predicate evaluator ([`DateTimeAssertions`]) and range comparator
//!   ([`RangeAssertion`])
//! - The reporting port ([`FailureReporter`]) and its panic/collect adapters
//! - Process-wide settings loaded from the environment or a config file
//!
//! ## Architecture Principles
//! - Value types live in `chronassert-domain`
//! - Rendering lives in `chronassert-common`
//! - Where failures go is decided behind [`FailureReporter`]
//!
//! ## Usage
//!
//! ```
//! use chrono::{NaiveDate, TimeDelta};
//! use chronassert_core::Should;
//!
//! let due = NaiveDate::from_ymd_opt(2020, 5, 1).unwrap().and_hms_opt(17, 0, 0).unwrap();
//! let sent = due - TimeDelta::minutes(10);
//!
//! sent.should()
//!     .because("{0} go out ahead of the deadline", ["reminders"])
//!     .be_before(due)
//!     .and()
//!     .be_same_date_as(due);
//! sent.should().be_within(TimeDelta::minutes(15)).before(due);
//! ```

pub mod assertions;
pub mod errors;
pub mod ports;
pub mod reporting;
pub mod settings;

// Re-export commonly used items
pub use assertions::{AndConstraint, DateTimeAssertions, RangeAssertion, Relation, Should};
pub use errors::{AssertionError, Result};
pub use ports::FailureReporter;
pub use reporting::{CollectingReporter, PanicReporter};
