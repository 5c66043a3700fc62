//! Predicates over a point-in-time subject
//!
//! Every predicate is evaluated independently: it opens its own
//! [`AssertionChain`], reports at most one failure and hands back an
//! [`AndConstraint`] so the caller can keep going. Predicates that read a
//! field of the value (year, month, ..., calendar date) use guard-then-check:
//! the field is only read once the subject is known to be present.

use std::sync::Arc;

use chrono::{NaiveDateTime, TimeDelta};
use chronassert_common::time::{
    format_date, format_datetime, format_datetime_list, format_optional, format_time_delta,
};
use chronassert_domain::{
    AssertionOptions, DateComponent, FailureKind, RangeMode, RangeRequest, Subject,
};

use super::constraint::AndConstraint;
use super::range::RangeAssertion;
use super::window::CloseToWindow;
use crate::ports::FailureReporter;
use crate::reporting::AssertionChain;
use crate::settings;

const NEGATIVE_PRECISION: &str =
    "Cannot use a negative precision of {0}ms when asserting that the date and time is {1} {2}{reason}.";
const COMPONENT_OF_NULL: &str =
    "Expected the {0} part of the date and time to be {1}{reason}, but found a <null> datetime.";
const COMPONENT_MISMATCH: &str =
    "Expected the {0} part of the date and time to be {1}{reason}, but found {2}.";

/// Fluent assertions on a [`Subject`]
///
/// Obtained through [`Should::should`](super::Should::should). The reason and
/// precision set with [`because`](Self::because) and
/// [`with_precision_ms`](Self::with_precision_ms) apply to every predicate
/// invoked on this value.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, TimeDelta};
/// use chronassert_core::Should;
///
/// let start = NaiveDate::from_ymd_opt(2015, 3, 10).unwrap().and_hms_opt(10, 0, 0).unwrap();
///
/// start
///     .should()
///     .have_year(2015)
///     .and()
///     .be_before(start + TimeDelta::hours(1))
///     .and()
///     .be_close_to(start + TimeDelta::milliseconds(15));
/// ```
pub struct DateTimeAssertions {
    subject: Subject,
    reporter: Arc<dyn FailureReporter>,
    options: AssertionOptions,
}

impl DateTimeAssertions {
    /// Assertions on `subject` reporting to `reporter`, with default options
    pub fn new(subject: Subject, reporter: Arc<dyn FailureReporter>) -> Self {
        Self { subject, reporter, options: AssertionOptions::from_config(settings::global()) }
    }

    /// Explain why the following predicates must hold
    ///
    /// `{0}`, `{1}`, ... in `reason` are filled from `args`; "because" is
    /// prepended unless the reason already starts with it.
    pub fn because<I, A>(mut self, reason: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: ToString,
    {
        self.options = self.options.because(reason, args);
        self
    }

    /// Half-width of the `be_close_to` window, in milliseconds
    pub fn with_precision_ms(mut self, precision_ms: i64) -> Self {
        self.options = self.options.with_precision_ms(precision_ms);
        self
    }

    /// Replace the reason and precision wholesale
    pub fn with_options(mut self, options: AssertionOptions) -> Self {
        self.options = options;
        self
    }

    /// The value under test
    pub const fn subject(&self) -> Subject {
        self.subject
    }

    /// Options applied to every predicate on this value
    pub const fn options(&self) -> &AssertionOptions {
        &self.options
    }

    // Equality
    // -----------------------------------------------------------------

    /// Passes when the subject is present and equal to `expected`, down to
    /// the nanosecond.
    pub fn be(&self, expected: NaiveDateTime) -> AndConstraint {
        self.chain("be").for_condition(self.subject.value() == Some(expected)).fail_with_kind(
            self.failure_kind(),
            "Expected the date and time to be {0}{reason}, but found {1}.",
            &[format_datetime(&expected), self.actual()],
        );
        self.and()
    }

    /// Passes when the subject is absent or differs from `unexpected`.
    pub fn not_be(&self, unexpected: NaiveDateTime) -> AndConstraint {
        self.chain("not_be").for_condition(self.subject.value() != Some(unexpected)).fail_with(
            "Expected the date and time not to be {0}{reason}, but it is.",
            &[format_datetime(&unexpected)],
        );
        self.and()
    }

    /// Passes when the subject is absent.
    pub fn be_null(&self) -> AndConstraint {
        self.chain("be_null").for_condition(!self.subject.is_present()).fail_with(
            "Expected the date and time to be <null>{reason}, but found {0}.",
            &[self.actual()],
        );
        self.and()
    }

    /// Passes when the subject is present.
    pub fn not_be_null(&self) -> AndConstraint {
        self.chain("not_be_null").for_condition(self.subject.is_present()).fail_with_kind(
            FailureKind::MissingSubject,
            "Expected the date and time not to be <null>{reason}.",
            &[],
        );
        self.and()
    }

    /// Passes when the subject equals one of `candidates`.
    pub fn be_one_of(&self, candidates: &[NaiveDateTime]) -> AndConstraint {
        let found = self.subject.value().is_some_and(|value| candidates.contains(&value));
        self.chain("be_one_of").for_condition(found).fail_with_kind(
            self.failure_kind(),
            "Expected the date and time to be one of {0}{reason}, but found {1}.",
            &[format_datetime_list(candidates), self.actual()],
        );
        self.and()
    }

    // Proximity
    // -----------------------------------------------------------------

    /// Passes when the subject lies within the configured precision
    /// (default 20ms) of `nearby`, bounds included.
    ///
    /// The window saturates at `NaiveDateTime::MIN`/`MAX`, so targets at the
    /// edge of the representable range are safe. A negative precision is
    /// reported as [`FailureKind::InvalidInput`] without comparing anything.
    pub fn be_close_to(&self, nearby: NaiveDateTime) -> AndConstraint {
        let mut chain = self.chain("be_close_to");
        let Some(window) = self.window(&mut chain, "close to", nearby) else {
            return self.and();
        };

        let inside = self.subject.value().is_some_and(|value| window.contains(value));
        chain.for_condition(inside).fail_with_kind(
            self.failure_kind(),
            "Expected the date and time to be within {0} from {1}{reason}, but found {2}.",
            &[self.precision_text(), format_datetime(&nearby), self.actual()],
        );
        self.and()
    }

    /// Passes when the subject is absent or outside the precision window
    /// around `distant`.
    pub fn not_be_close_to(&self, distant: NaiveDateTime) -> AndConstraint {
        let mut chain = self.chain("not_be_close_to");
        let Some(window) = self.window(&mut chain, "not close to", distant) else {
            return self.and();
        };

        let outside = self.subject.value().map_or(true, |value| !window.contains(value));
        chain.for_condition(outside).fail_with(
            "Expected the date and time not to be within {0} from {1}{reason}, but found {2}.",
            &[self.precision_text(), format_datetime(&distant), self.actual()],
        );
        self.and()
    }

    // Ordering
    // -----------------------------------------------------------------

    /// Passes when the subject is present and strictly earlier than `expected`.
    pub fn be_before(&self, expected: NaiveDateTime) -> AndConstraint {
        self.compare("be_before", "before", expected, |actual, expected| actual < expected)
    }

    /// Passes when the subject is present and not later than `expected`.
    pub fn be_on_or_before(&self, expected: NaiveDateTime) -> AndConstraint {
        self.compare("be_on_or_before", "on or before", expected, |actual, expected| {
            actual <= expected
        })
    }

    /// Passes when the subject is present and strictly later than `expected`.
    pub fn be_after(&self, expected: NaiveDateTime) -> AndConstraint {
        self.compare("be_after", "after", expected, |actual, expected| actual > expected)
    }

    /// Passes when the subject is present and not earlier than `expected`.
    pub fn be_on_or_after(&self, expected: NaiveDateTime) -> AndConstraint {
        self.compare("be_on_or_after", "on or after", expected, |actual, expected| {
            actual >= expected
        })
    }

    // Components
    // -----------------------------------------------------------------

    /// Passes when the subject is present and its year is `expected`.
    pub fn have_year(&self, expected: i32) -> AndConstraint {
        self.have_component("have_year", DateComponent::Year, i64::from(expected))
    }

    /// Passes when the subject's month (1 to 12) is `expected`.
    pub fn have_month(&self, expected: u32) -> AndConstraint {
        self.have_component("have_month", DateComponent::Month, i64::from(expected))
    }

    /// Passes when the subject's day of the month is `expected`.
    pub fn have_day(&self, expected: u32) -> AndConstraint {
        self.have_component("have_day", DateComponent::Day, i64::from(expected))
    }

    /// Passes when the subject's hour (0 to 23) is `expected`.
    pub fn have_hour(&self, expected: u32) -> AndConstraint {
        self.have_component("have_hour", DateComponent::Hour, i64::from(expected))
    }

    /// Passes when the subject's minute is `expected`.
    pub fn have_minute(&self, expected: u32) -> AndConstraint {
        self.have_component("have_minute", DateComponent::Minute, i64::from(expected))
    }

    /// Passes when the subject's second is `expected`.
    pub fn have_second(&self, expected: u32) -> AndConstraint {
        self.have_component("have_second", DateComponent::Second, i64::from(expected))
    }

    /// Passes when the subject's millisecond (0 to 999) is `expected`.
    pub fn have_millisecond(&self, expected: u32) -> AndConstraint {
        self.have_component("have_millisecond", DateComponent::Millisecond, i64::from(expected))
    }

    /// Compares only the calendar date, ignoring the time of day.
    pub fn be_same_date_as(&self, expected: NaiveDateTime) -> AndConstraint {
        let mut chain = self.chain("be_same_date_as");
        let expected_date = expected.date();
        let expected_text = format_date(&expected_date);

        if let Some(value) = chain.require_subject(
            self.subject,
            "Expected the date part of the date and time to be {0}{reason}, but found a <null> \
             datetime.",
            &[expected_text.clone()],
        ) {
            chain.for_condition(value.date() == expected_date).fail_with(
                "Expected the date part of the date and time to be {0}{reason}, but it was {1}.",
                &[expected_text, format_date(&value.date())],
            );
        }
        self.and()
    }

    /// Fails for an absent subject or one on the same calendar date as `unexpected`.
    pub fn not_be_same_date_as(&self, unexpected: NaiveDateTime) -> AndConstraint {
        let mut chain = self.chain("not_be_same_date_as");
        let unexpected_date = unexpected.date();
        let unexpected_text = format_date(&unexpected_date);

        if let Some(value) = chain.require_subject(
            self.subject,
            "Did not expect the date part of the date and time to be {0}{reason}, but found a \
             <null> datetime.",
            &[unexpected_text.clone()],
        ) {
            chain.for_condition(value.date() != unexpected_date).fail_with(
                "Did not expect the date part of the date and time to be {0}{reason}, but it was.",
                &[unexpected_text],
            );
        }
        self.and()
    }

    // Relative ranges
    // -----------------------------------------------------------------

    /// Start a range comparison; finish it with `before`, `after` or
    /// `compared_to`.
    pub fn be_more_than(&self, threshold: TimeDelta) -> RangeAssertion {
        self.range(RangeMode::MoreThan, threshold)
    }

    /// Distance must be `threshold` or more.
    pub fn be_at_least(&self, threshold: TimeDelta) -> RangeAssertion {
        self.range(RangeMode::AtLeast, threshold)
    }

    /// Distance must equal `threshold`.
    pub fn be_exactly(&self, threshold: TimeDelta) -> RangeAssertion {
        self.range(RangeMode::Exactly, threshold)
    }

    /// Distance must be `threshold` or less.
    pub fn be_within(&self, threshold: TimeDelta) -> RangeAssertion {
        self.range(RangeMode::Within, threshold)
    }

    /// Distance must be strictly below `threshold`.
    pub fn be_less_than(&self, threshold: TimeDelta) -> RangeAssertion {
        self.range(RangeMode::LessThan, threshold)
    }

    // Helpers
    // -----------------------------------------------------------------

    fn chain(&self, predicate: &'static str) -> AssertionChain<'_> {
        AssertionChain::new(self.reporter.as_ref(), predicate, &self.options)
    }

    fn and(&self) -> AndConstraint {
        AndConstraint::new(self.subject, Arc::clone(&self.reporter))
    }

    /// `MissingSubject` for an absent subject, `Mismatch` otherwise
    fn failure_kind(&self) -> FailureKind {
        if self.subject.is_present() {
            FailureKind::Mismatch
        } else {
            FailureKind::MissingSubject
        }
    }

    fn actual(&self) -> String {
        format_optional(self.subject.value())
    }

    fn precision_text(&self) -> String {
        format_time_delta(TimeDelta::milliseconds(self.options.precision_ms))
    }

    fn range(&self, mode: RangeMode, threshold: TimeDelta) -> RangeAssertion {
        RangeAssertion::new(
            RangeRequest::new(self.subject, mode, threshold),
            Arc::clone(&self.reporter),
            self.options.clone(),
        )
    }

    /// Validate the precision and build the saturating window around `target`
    fn window(
        &self,
        chain: &mut AssertionChain<'_>,
        relation: &str,
        target: NaiveDateTime,
    ) -> Option<CloseToWindow> {
        let precision_ms = self.options.precision_ms;
        if chain.for_condition(precision_ms >= 0).fail_with_kind(
            FailureKind::InvalidInput,
            NEGATIVE_PRECISION,
            &[precision_ms.to_string(), relation.to_string(), format_datetime(&target)],
        ) {
            return None;
        }
        Some(CloseToWindow::around(target, TimeDelta::milliseconds(precision_ms)))
    }

    fn compare(
        &self,
        predicate: &'static str,
        relation: &str,
        expected: NaiveDateTime,
        holds: impl FnOnce(NaiveDateTime, NaiveDateTime) -> bool,
    ) -> AndConstraint {
        let passed = self.subject.value().is_some_and(|actual| holds(actual, expected));
        self.chain(predicate).for_condition(passed).fail_with_kind(
            self.failure_kind(),
            "Expected the date and time to be {0} {1}{reason}, but found {2}.",
            &[relation.to_string(), format_datetime(&expected), self.actual()],
        );
        self.and()
    }

    fn have_component(
        &self,
        predicate: &'static str,
        component: DateComponent,
        expected: i64,
    ) -> AndConstraint {
        let mut chain = self.chain(predicate);
        let label = component.to_string();
        let expected_text = expected.to_string();

        if let Some(value) = chain.require_subject(
            self.subject,
            COMPONENT_OF_NULL,
            &[label.clone(), expected_text.clone()],
        ) {
            let actual = component.read(&value);
            chain
                .for_condition(actual == expected)
                .fail_with(COMPONENT_MISMATCH, &[label, expected_text, actual.to_string()]);
        }
        self.and()
    }
}
