//! The point-in-time value under test

use chrono::{DateTime, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

/// Subject - A possibly absent point in time wrapped for assertion
///
/// Absence is a first-class state: predicates decide for themselves whether
/// an absent subject passes (`not_be`) or fails (`be`). The subject never
/// changes after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Subject {
    value: Option<NaiveDateTime>,
}

impl Subject {
    /// Wrap an optional point in time
    pub const fn new(value: Option<NaiveDateTime>) -> Self {
        Self { value }
    }

    /// A subject without a value
    pub const fn none() -> Self {
        Self { value: None }
    }

    /// The wrapped value, if any
    pub const fn value(&self) -> Option<NaiveDateTime> {
        self.value
    }

    /// Whether a value is wrapped
    pub const fn is_present(&self) -> bool {
        self.value.is_some()
    }
}

impl From<NaiveDateTime> for Subject {
    fn from(value: NaiveDateTime) -> Self {
        Self::new(Some(value))
    }
}

impl From<Option<NaiveDateTime>> for Subject {
    fn from(value: Option<NaiveDateTime>) -> Self {
        Self::new(value)
    }
}

/// Zoned values are compared on their UTC wall clock.
impl<Tz: TimeZone> From<DateTime<Tz>> for Subject {
    fn from(value: DateTime<Tz>) -> Self {
        Self::new(Some(value.naive_utc()))
    }
}
