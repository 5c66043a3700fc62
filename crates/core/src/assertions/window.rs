//! Saturating proximity window for `be_close_to`
//!
//! A naive `nearby ± precision` overflows when `nearby` sits within
//! `precision` of `NaiveDateTime::MIN` or `NaiveDateTime::MAX`. Each margin is
//! therefore clamped to the distance between `nearby` and the extreme on its
//! side, so the window saturates at the representable range instead.

use chrono::{NaiveDateTime, TimeDelta};

/// Inclusive `[lower, upper]` interval around a target point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseToWindow {
    lower: NaiveDateTime,
    upper: NaiveDateTime,
}

impl CloseToWindow {
    /// Window of `precision` on both sides of `nearby`
    ///
    /// `precision` is expected to be non-negative.
    pub fn around(nearby: NaiveDateTime, precision: TimeDelta) -> Self {
        let distance_to_min = nearby.signed_duration_since(NaiveDateTime::MIN);
        let distance_to_max = NaiveDateTime::MAX.signed_duration_since(nearby);

        let lower_margin = precision.min(distance_to_min);
        let upper_margin = precision.min(distance_to_max);

        // The margins never exceed the distance to the extremes, so neither
        // fallback is taken for a non-negative precision.
        Self {
            lower: nearby.checked_sub_signed(lower_margin).unwrap_or(NaiveDateTime::MIN),
            upper: nearby.checked_add_signed(upper_margin).unwrap_or(NaiveDateTime::MAX),
        }
    }

    /// Earliest point inside the window
    pub const fn lower(&self) -> NaiveDateTime {
        self.lower
    }

    /// Latest point inside the window
    pub const fn upper(&self) -> NaiveDateTime {
        self.upper
    }

    /// Inclusive on both ends
    pub fn contains(&self, value: NaiveDateTime) -> bool {
        self.lower <= value && value <= self.upper
    }
}
