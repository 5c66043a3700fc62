//! Time rendering utilities
//!
//! - **[`format`]**: Datetime, date and duration rendering for failure
//!   messages
//!
//! ## Usage
//!
//! ```rust
//! use chrono::{NaiveDate, TimeDelta};
//! use chronassert_common::time::{format_datetime, format_time_delta};
//!
//! let value = NaiveDate::from_ymd_opt(2020, 5, 1).unwrap().and_hms_opt(8, 0, 0).unwrap();
//! assert_eq!(format_datetime(&value), "<2020-05-01 08:00:00>");
//! assert_eq!(format_time_delta(TimeDelta::minutes(90)), "1h 30m 0s");
//! ```

pub mod format;

// Re-export commonly used items
pub use format::{
    format_date, format_datetime, format_datetime_list, format_optional, format_time_delta,
    NULL_LITERAL,
};
