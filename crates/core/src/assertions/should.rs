//! Entry point for fluent assertions

use std::sync::Arc;

use chronassert_domain::Subject;

use super::datetime::DateTimeAssertions;
use crate::ports::FailureReporter;
use crate::reporting::PanicReporter;

/// Start an assertion on anything convertible into a [`Subject`]
///
/// Implemented for `NaiveDateTime`, `Option<NaiveDateTime>` and zoned
/// `DateTime` values.
pub trait Should: Into<Subject> + Sized {
    /// Assertions that panic on the first failure
    fn should(self) -> DateTimeAssertions {
        DateTimeAssertions::new(self.into(), Arc::new(PanicReporter))
    }

    /// Assertions that hand failures to `reporter`
    fn should_report_to(self, reporter: Arc<dyn FailureReporter>) -> DateTimeAssertions {
        DateTimeAssertions::new(self.into(), reporter)
    }
}

impl<T: Into<Subject>> Should for T {}
