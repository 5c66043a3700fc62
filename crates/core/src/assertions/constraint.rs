//! Continuation returned by every predicate

use std::sync::Arc;

use chronassert_domain::Subject;

use super::datetime::DateTimeAssertions;
use crate::ports::FailureReporter;

/// AndConstraint - Lets a caller keep chaining predicates on the same subject
///
/// Carries nothing but the subject and where failures go; the explanation
/// and precision of the previous predicate do not carry over.
pub struct AndConstraint {
    subject: Subject,
    reporter: Arc<dyn FailureReporter>,
}

impl AndConstraint {
    /// Continuation for `subject`, reporting to `reporter`
    pub(crate) fn new(subject: Subject, reporter: Arc<dyn FailureReporter>) -> Self {
        Self { subject, reporter }
    }

    /// Continue with fresh assertions on the same subject
    pub fn and(self) -> DateTimeAssertions {
        DateTimeAssertions::new(self.subject, self.reporter)
    }

    /// The subject later predicates apply to
    pub const fn subject(&self) -> Subject {
        self.subject
    }
}
