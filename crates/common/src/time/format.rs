//! Human-readable rendering of failure arguments
//!
//! Failure templates receive their arguments as pre-rendered strings. Points
//! in time render inside angle brackets, absent values as `<null>`, and
//! durations in the compact `1d 2h 3m 4s 15ms` style.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

/// Rendering of an absent value
pub const NULL_LITERAL: &str = "<null>";

/// Format a signed duration into a human-readable string
///
/// Leading zero components are dropped; a trailing millisecond component is
/// only added when non-zero. Sub-millisecond durations fall back to
/// microseconds.
///
/// # Examples
///
/// ```
/// use chrono::TimeDelta;
/// use chronassert_common::time::format::format_time_delta;
///
/// assert_eq!(format_time_delta(TimeDelta::milliseconds(15)), "15ms");
/// assert_eq!(format_time_delta(TimeDelta::seconds(65)), "1m 5s");
/// assert_eq!(format_time_delta(TimeDelta::milliseconds(-1_500)), "-1s 500ms");
/// ```
pub fn format_time_delta(delta: TimeDelta) -> String {
    let sign = if delta < TimeDelta::zero() { "-" } else { "" };
    let magnitude = delta.abs();

    let total_secs = magnitude.num_seconds();
    let nanos = magnitude.subsec_nanos();
    let millis = nanos / 1_000_000;

    if total_secs == 0 {
        if millis == 0 && nanos > 0 {
            return format!("{sign}{}us", nanos / 1_000);
        }
        return format!("{sign}{millis}ms");
    }

    let days = total_secs / 86_400;
    let hours = (total_secs % 86_400) / 3_600;
    let minutes = (total_secs % 3_600) / 60;
    let seconds = total_secs % 60;

    let components = [(days, "d"), (hours, "h"), (minutes, "m"), (seconds, "s")];
    let start_index =
        components.iter().position(|(value, _)| *value > 0).unwrap_or(components.len() - 1);

    let mut rendered = components[start_index..]
        .iter()
        .map(|(value, suffix)| format!("{value}{suffix}"))
        .collect::<Vec<_>>()
        .join(" ");

    if millis > 0 {
        rendered.push_str(&format!(" {millis}ms"));
    }

    format!("{sign}{rendered}")
}

/// Render a point in time, e.g. `<2015-03-10 10:00:00.015>`
///
/// The fractional second is omitted when it is zero.
pub fn format_datetime(value: &NaiveDateTime) -> String {
    format!("<{}>", value.format("%Y-%m-%d %H:%M:%S%.f"))
}

/// Render a calendar date, e.g. `<2020-05-01>`
pub fn format_date(value: &NaiveDate) -> String {
    format!("<{}>", value.format("%Y-%m-%d"))
}

/// Render a possibly absent point in time
pub fn format_optional(value: Option<NaiveDateTime>) -> String {
    value.as_ref().map_or_else(|| NULL_LITERAL.to_string(), format_datetime)
}

/// Render a set of candidates, e.g. `{<2020-05-01 10:00:00>, <null>}`
pub fn format_datetime_list(values: &[NaiveDateTime]) -> String {
    let items = values.iter().map(format_datetime).collect::<Vec<_>>();
    format!("{{{}}}", items.join(", "))
}
