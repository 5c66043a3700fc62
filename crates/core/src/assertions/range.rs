//! Second phase of relative range comparisons

use std::sync::Arc;

use chrono::{NaiveDateTime, TimeDelta};
use chronassert_common::time::{format_datetime, format_time_delta};
use chronassert_domain::{
    impl_label_conversions, AssertionOptions, FailureKind, RangeMode, RangeRequest,
};

use super::constraint::AndConstraint;
use crate::ports::FailureReporter;
use crate::reporting::AssertionChain;

/// Relation - Which way the distance between the two points is measured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// Absolute distance, regardless of order
    Apart,
    /// `counterpart - subject`: positive when the subject is earlier
    Before,
    /// `subject - counterpart`: positive when the subject is later
    After,
}

impl Relation {
    /// Distance from the subject to `counterpart` as this relation measures it
    pub fn distance(self, subject: NaiveDateTime, counterpart: NaiveDateTime) -> TimeDelta {
        match self {
            Self::Apart => subject.signed_duration_since(counterpart).abs(),
            Self::Before => counterpart.signed_duration_since(subject),
            Self::After => subject.signed_duration_since(counterpart),
        }
    }

    /// The relation a subject on the wrong side actually has
    ///
    /// `None` for [`Relation::Apart`], which has no wrong side.
    pub const fn opposite(self) -> Option<Self> {
        match self {
            Self::Apart => None,
            Self::Before => Some(Self::After),
            Self::After => Some(Self::Before),
        }
    }
}

impl_label_conversions!(Relation {
    Apart => "from",
    Before => "before",
    After => "after",
});

/// A captured [`RangeRequest`] waiting for its counterpart
///
/// ```
/// use chrono::{NaiveDate, TimeDelta};
/// use chronassert_core::Should;
///
/// let deadline = NaiveDate::from_ymd_opt(2020, 5, 1).unwrap().and_hms_opt(12, 0, 0).unwrap();
/// let submitted = deadline - TimeDelta::minutes(45);
///
/// submitted.should().be_at_least(TimeDelta::minutes(30)).before(deadline);
/// submitted.should().be_within(TimeDelta::hours(1)).compared_to(deadline);
/// ```
#[must_use = "a range comparison only runs once `before`, `after` or `compared_to` is called"]
pub struct RangeAssertion {
    request: RangeRequest,
    reporter: Arc<dyn FailureReporter>,
    options: AssertionOptions,
}

impl RangeAssertion {
    /// Pending comparison for `request`
    pub(crate) fn new(
        request: RangeRequest,
        reporter: Arc<dyn FailureReporter>,
        options: AssertionOptions,
    ) -> Self {
        Self { request, reporter, options }
    }

    /// The captured subject, mode and threshold
    pub const fn request(&self) -> RangeRequest {
        self.request
    }

    /// Compare the absolute distance between the subject and `counterpart`
    pub fn compared_to(self, counterpart: NaiveDateTime) -> AndConstraint {
        self.complete(Relation::Apart, counterpart)
    }

    /// Compare how far the subject lies before `counterpart`
    ///
    /// A subject after `counterpart` fails whatever the mode.
    pub fn before(self, counterpart: NaiveDateTime) -> AndConstraint {
        self.complete(Relation::Before, counterpart)
    }

    /// Compare how far the subject lies after `counterpart`
    ///
    /// A subject before `counterpart` fails whatever the mode.
    pub fn after(self, counterpart: NaiveDateTime) -> AndConstraint {
        self.complete(Relation::After, counterpart)
    }

    fn complete(self, relation: Relation, counterpart: NaiveDateTime) -> AndConstraint {
        let request = self.request;
        let mode = request.mode();
        let args = [
            mode.to_string(),
            format_time_delta(request.threshold()),
            relation.to_string(),
            format_datetime(&counterpart),
        ];

        let mut chain =
            AssertionChain::new(self.reporter.as_ref(), predicate_name(mode), &self.options);
        chain.for_condition(request.has_valid_threshold()).fail_with_kind(
            FailureKind::InvalidInput,
            "Cannot assert that the date and time is {0} {1} {2} {3}{reason}: the threshold must \
             not be negative.",
            &args,
        );

        if let Some(value) = chain.require_subject(
            request.origin(),
            "Expected the date and time to be {0} {1} {2} {3}{reason}, but found a <null> datetime.",
            &args,
        ) {
            let distance = relation.distance(value, counterpart);
            let [mode_text, threshold_text, relation_text, counterpart_text] = args;

            if let Some(opposite) = relation.opposite() {
                chain.for_condition(distance >= TimeDelta::zero()).fail_with(
                    "Expected the date and time {0} to be {1} {2} {3} {4}{reason}, but it is {5} \
                     {6} it.",
                    &[
                        format_datetime(&value),
                        mode_text.clone(),
                        threshold_text.clone(),
                        relation_text.clone(),
                        counterpart_text.clone(),
                        format_time_delta(distance.abs()),
                        opposite.to_string(),
                    ],
                );
            }

            chain.for_condition(mode.holds(distance, request.threshold())).fail_with(
                "Expected the date and time {0} to be {1} {2} {3} {4}{reason}, but the measured \
                 distance is {5}.",
                &[
                    format_datetime(&value),
                    mode_text,
                    threshold_text,
                    relation_text,
                    counterpart_text,
                    format_time_delta(distance),
                ],
            );
        }

        AndConstraint::new(request.origin(), self.reporter)
    }
}

fn predicate_name(mode: RangeMode) -> &'static str {
    match mode {
        RangeMode::MoreThan => "be_more_than",
        RangeMode::AtLeast => "be_at_least",
        RangeMode::Exactly => "be_exactly",
        RangeMode::Within => "be_within",
        RangeMode::LessThan => "be_less_than",
    }
}
