//! Soft-mode reporter

use std::sync::Arc;

use chronassert_domain::AssertionFailure;
use parking_lot::Mutex;
use tracing::warn;

use crate::errors::{AssertionError, Result};
use crate::ports::FailureReporter;

/// Reporter that records failures instead of panicking
///
/// Lets a test run every assertion in a block and inspect or raise all
/// failures at the end. Clones share the same underlying list.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use chrono::NaiveDate;
/// use chronassert_core::{CollectingReporter, Should};
///
/// let scope = Arc::new(CollectingReporter::new());
/// let value = NaiveDate::from_ymd_opt(2020, 5, 1).unwrap().and_hms_opt(8, 0, 0).unwrap();
///
/// value.should_report_to(scope.clone()).have_year(2021).and().have_month(6);
///
/// assert_eq!(scope.len(), 2);
/// assert!(scope.finish().is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CollectingReporter {
    failures: Arc<Mutex<Vec<AssertionFailure>>>,
}

impl CollectingReporter {
    /// An empty reporter
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the failures recorded so far
    pub fn failures(&self) -> Vec<AssertionFailure> {
        self.failures.lock().clone()
    }

    /// Number of recorded failures
    pub fn len(&self) -> usize {
        self.failures.lock().len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.failures.lock().is_empty()
    }

    /// Drain the recorded failures, leaving the reporter empty
    pub fn take(&self) -> Vec<AssertionFailure> {
        std::mem::take(&mut *self.failures.lock())
    }

    /// Close the scope and convert its failures into a result
    ///
    /// # Errors
    /// Returns `AssertionError::Failed` carrying every recorded failure when at
    /// least one predicate failed. The reporter is drained either way.
    pub fn finish(&self) -> Result<()> {
        let failures = self.take();
        if failures.is_empty() {
            Ok(())
        } else {
            Err(AssertionError::Failed { failures })
        }
    }
}

impl FailureReporter for CollectingReporter {
    fn report(&self, failure: AssertionFailure) {
        warn!(kind = %failure.kind, message = %failure.message, "assertion_failure_recorded");
        self.failures.lock().push(failure);
    }
}

#[cfg(test)]
mod tests {
    use chronassert_domain::FailureKind;

    use super::*;

    fn failure(message: &str) -> AssertionFailure {
        AssertionFailure::new(FailureKind::Mismatch, message)
    }

    #[test]
    fn test_records_in_order() {
        let reporter = CollectingReporter::new();
        reporter.report(failure("first"));
        reporter.report(failure("second"));

        let messages: Vec<_> = reporter.failures().into_iter().map(|f| f.message).collect();
        assert_eq!(messages, vec!["first", "second"]);
        assert_eq!(reporter.len(), 2);
    }

    #[test]
    fn test_clones_share_failures() {
        let reporter = CollectingReporter::new();
        let clone = reporter.clone();
        clone.report(failure("shared"));
        assert_eq!(reporter.len(), 1);
    }

    #[test]
    fn test_finish_drains() {
        let reporter = CollectingReporter::new();
        assert!(reporter.finish().is_ok());

        reporter.report(failure("boom"));
        let err = reporter.finish().unwrap_err();
        assert!(matches!(err, AssertionError::Failed { ref failures } if failures.len() == 1));
        assert!(reporter.is_empty());
    }

    #[test]
    fn test_concurrent_reports() {
        let reporter = Arc::new(CollectingReporter::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let reporter = Arc::clone(&reporter);
                std::thread::spawn(move || reporter.report(failure(&format!("thread {i}"))))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(reporter.len(), 8);
    }
}
