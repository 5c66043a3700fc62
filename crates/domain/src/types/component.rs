//! Calendar and clock components that can be asserted individually

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::impl_label_conversions;

/// DateComponent - One named field of a point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateComponent {
    /// Calendar year, may be negative
    Year,
    /// 1 to 12
    Month,
    /// Day of the month
    Day,
    /// 0 to 23
    Hour,
    /// 0 to 59
    Minute,
    /// 0 to 59
    Second,
    /// Sub-second part truncated to milliseconds
    Millisecond,
}

impl DateComponent {
    /// Read this component out of `value`
    ///
    /// Widened to `i64` so every component compares through one path.
    pub fn read(self, value: &NaiveDateTime) -> i64 {
        match self {
            Self::Year => i64::from(value.year()),
            Self::Month => i64::from(value.month()),
            Self::Day => i64::from(value.day()),
            Self::Hour => i64::from(value.hour()),
            Self::Minute => i64::from(value.minute()),
            Self::Second => i64::from(value.second()),
            // Leap-second nanos (>= 1e9) fold back into the 0..1000 range
            Self::Millisecond => i64::from(value.nanosecond() % 1_000_000_000 / 1_000_000),
        }
    }
}

impl_label_conversions!(DateComponent {
    Year => "year",
    Month => "month",
    Day => "day",
    Hour => "hour",
    Minute => "minute",
    Second => "second",
    Millisecond => "millisecond",
});

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn test_read_every_component() {
        let value = NaiveDate::from_ymd_opt(2015, 3, 10)
            .unwrap()
            .and_hms_milli_opt(10, 20, 30, 15)
            .unwrap();

        assert_eq!(DateComponent::Year.read(&value), 2015);
        assert_eq!(DateComponent::Month.read(&value), 3);
        assert_eq!(DateComponent::Day.read(&value), 10);
        assert_eq!(DateComponent::Hour.read(&value), 10);
        assert_eq!(DateComponent::Minute.read(&value), 20);
        assert_eq!(DateComponent::Second.read(&value), 30);
        assert_eq!(DateComponent::Millisecond.read(&value), 15);
    }

    #[test]
    fn test_labels() {
        assert_eq!(DateComponent::Year.to_string(), "year");
        assert_eq!("Millisecond".parse::<DateComponent>().unwrap(), DateComponent::Millisecond);
    }
}
