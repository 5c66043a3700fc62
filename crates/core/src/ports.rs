//! Port interface for surfacing assertion failures
//!
//! The engine decides pass or fail and renders the message; what happens to
//! a failure afterwards (panic, collect, forward to a test harness) belongs
//! to the adapter behind this trait.

use chronassert_domain::AssertionFailure;

/// Trait for receiving failed assertions
///
/// Implementations must tolerate independent chains reporting from several
/// threads at once (parallel test execution).
pub trait FailureReporter: Send + Sync {
    /// Record one failure. Passing predicates never call this.
    fn report(&self, failure: AssertionFailure);
}
