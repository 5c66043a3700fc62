//! Hard-mode reporter

use chronassert_domain::AssertionFailure;

use crate::ports::FailureReporter;

/// Reporter that fails the current test immediately
///
/// This is the default adapter: the first failing predicate panics with the
/// rendered message, which the test harness reports as a test failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanicReporter;

impl FailureReporter for PanicReporter {
    #[allow(clippy::panic)]
    fn report(&self, failure: AssertionFailure) {
        panic!("{}", failure.message);
    }
}
