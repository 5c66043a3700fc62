//! Shared test helpers for `chronassert-core` integration tests.
//!
//! Fixtures build points in time from compact literals, and [`scope`] hands
//! out a collecting reporter so a test can inspect failures instead of
//! unwinding on the first one.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use chronassert_common::init_test_tracing;
use chronassert_core::{CollectingReporter, DateTimeAssertions, Should};
use chronassert_domain::{AssertionFailure, FailureKind};

/// `2015-03-10 10:00:00.000`, the default anchor for proximity scenarios
pub fn anchor() -> NaiveDateTime {
    at(2015, 3, 10, 10, 0, 0, 0)
}

#[allow(clippy::too_many_arguments)]
pub fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32, ms: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .and_then(|date| date.and_hms_milli_opt(h, mi, s, ms))
        .expect("fixture date is valid")
}

/// Soft-mode assertions on `subject` plus the reporter collecting them
pub fn scope<S: Should>(subject: S) -> (DateTimeAssertions, Arc<CollectingReporter>) {
    init_test_tracing();
    let reporter = Arc::new(CollectingReporter::new());
    (subject.should_report_to(reporter.clone()), reporter)
}

/// The single failure recorded by `reporter`
pub fn single_failure(reporter: &CollectingReporter) -> AssertionFailure {
    let mut failures = reporter.take();
    assert_eq!(failures.len(), 1, "expected one failure, got {failures:?}");
    failures.remove(0)
}

pub fn assert_passed(reporter: &CollectingReporter) {
    let failures = reporter.failures();
    assert!(failures.is_empty(), "expected no failures, got {failures:?}");
}

pub fn assert_failed_with(reporter: &CollectingReporter, kind: FailureKind) -> String {
    let failure = single_failure(reporter);
    assert_eq!(failure.kind, kind, "unexpected failure kind: {}", failure.message);
    failure.message
}
