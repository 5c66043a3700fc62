//! Relative-duration range comparison types
//!
//! A range assertion is built in two phases. `be_more_than`, `be_at_least`,
//! `be_exactly`, `be_within` and `be_less_than` only capture a
//! [`RangeRequest`]; the comparison runs once the caller supplies the second
//! point in time.

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use super::subject::Subject;
use crate::impl_label_conversions;

/// RangeMode - How a measured distance must relate to the threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RangeMode {
    /// Strictly above the threshold
    MoreThan,
    /// The threshold or above
    AtLeast,
    /// Equal to the threshold
    Exactly,
    /// The threshold or below
    Within,
    /// Strictly below the threshold
    LessThan,
}

impl RangeMode {
    /// Evaluate `distance` against `threshold` under this mode
    ///
    /// `LessThan`, `Exactly` and `MoreThan` partition every distance;
    /// `AtLeast` and `Within` are their inclusive unions.
    pub fn holds(self, distance: TimeDelta, threshold: TimeDelta) -> bool {
        match self {
            Self::MoreThan => distance > threshold,
            Self::AtLeast => distance >= threshold,
            Self::Exactly => distance == threshold,
            Self::Within => distance <= threshold,
            Self::LessThan => distance < threshold,
        }
    }
}

impl_label_conversions!(RangeMode {
    MoreThan => "more than",
    AtLeast => "at least",
    Exactly => "exactly",
    Within => "within",
    LessThan => "less than",
});

/// RangeRequest - A pending comparison awaiting its counterpart
///
/// Captures the origin subject, the mode and the caller's threshold. None of
/// them can change once the request exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeRequest {
    origin: Subject,
    mode: RangeMode,
    threshold: TimeDelta,
}

impl RangeRequest {
    /// Capture a comparison; nothing is evaluated yet
    pub const fn new(origin: Subject, mode: RangeMode, threshold: TimeDelta) -> Self {
        Self { origin, mode, threshold }
    }

    /// The subject the distance is measured from
    pub const fn origin(&self) -> Subject {
        self.origin
    }

    /// How the distance must relate to the threshold
    pub const fn mode(&self) -> RangeMode {
        self.mode
    }

    /// The caller-supplied duration
    pub const fn threshold(&self) -> TimeDelta {
        self.threshold
    }

    /// Negative thresholds are accepted at construction but never compared.
    pub fn has_valid_threshold(&self) -> bool {
        self.threshold >= TimeDelta::zero()
    }
}
