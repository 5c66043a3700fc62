//! Guard-then-check evaluation
//!
//! An [`AssertionChain`] evaluates the steps of one predicate in order. Once a
//! step fails, every later step is skipped, so a predicate that first checks
//! for a present subject never goes on to compare a field of a value that
//! does not exist, and never reports a second, misleading failure.

use chrono::NaiveDateTime;
use chronassert_common::template::{because_clause, render};
use chronassert_domain::{AssertionFailure, AssertionOptions, FailureKind, Subject};
use tracing::{debug, trace};

use crate::ports::FailureReporter;
use crate::settings;

/// Sequential evaluation state for one predicate
pub struct AssertionChain<'r> {
    reporter: &'r dyn FailureReporter,
    predicate: &'static str,
    reason: String,
    log_passes: bool,
    failed: bool,
}

impl<'r> AssertionChain<'r> {
    /// Start a chain for `predicate`, rendering the caller's explanation once
    pub fn new(
        reporter: &'r dyn FailureReporter,
        predicate: &'static str,
        options: &AssertionOptions,
    ) -> Self {
        Self {
            reporter,
            predicate,
            reason: because_clause(options.reason.as_deref(), &options.reason_args),
            log_passes: settings::global().log_passes,
            failed: false,
        }
    }

    /// Evaluate one condition; finish it with [`Verdict::fail_with`]
    pub fn for_condition(&mut self, condition: bool) -> Verdict<'_, 'r> {
        Verdict { chain: self, condition }
    }

    /// Phase one of guard-then-check
    ///
    /// Returns the subject's value when it is present and nothing has failed
    /// yet. An absent subject is reported as [`FailureKind::MissingSubject`]
    /// with `template`/`args`, and `None` tells the caller to stop.
    pub fn require_subject(
        &mut self,
        subject: Subject,
        template: &str,
        args: &[String],
    ) -> Option<NaiveDateTime> {
        if self.failed {
            return None;
        }
        let value = subject.value();
        if value.is_none() {
            self.for_condition(false).fail_with_kind(FailureKind::MissingSubject, template, args);
        }
        value
    }

    /// Whether any step of this chain has failed
    pub const fn has_failed(&self) -> bool {
        self.failed
    }
}

/// Pending outcome of one condition
#[must_use = "a condition is only reported once `fail_with` is called"]
pub struct Verdict<'c, 'r> {
    chain: &'c mut AssertionChain<'r>,
    condition: bool,
}

impl Verdict<'_, '_> {
    /// Report a [`FailureKind::Mismatch`] unless the condition held
    ///
    /// Returns `true` when a failure was reported.
    pub fn fail_with(self, template: &str, args: &[String]) -> bool {
        self.fail_with_kind(FailureKind::Mismatch, template, args)
    }

    /// Report a failure of `kind` unless the condition held or an earlier
    /// step already failed
    pub fn fail_with_kind(self, kind: FailureKind, template: &str, args: &[String]) -> bool {
        let chain = self.chain;
        if chain.failed {
            trace!(predicate = chain.predicate, "assertion_step_skipped");
            return false;
        }
        if self.condition {
            if chain.log_passes {
                trace!(predicate = chain.predicate, "assertion_passed");
            }
            return false;
        }

        let message = render(template, args, &chain.reason);
        debug!(predicate = chain.predicate, kind = %kind, "assertion_failed");
        chain.failed = true;
        chain.reporter.report(AssertionFailure::new(kind, message));
        true
    }
}
