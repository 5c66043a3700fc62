//! Failures handed to the reporting collaborator

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::impl_label_conversions;

/// FailureKind - Why a predicate did not pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureKind {
    /// The subject was present but did not satisfy the predicate
    Mismatch,
    /// The predicate needed a value and the subject had none
    MissingSubject,
    /// The caller passed an argument the predicate cannot work with
    InvalidInput,
}

impl_label_conversions!(FailureKind {
    Mismatch => "mismatch",
    MissingSubject => "missing subject",
    InvalidInput => "invalid input",
});

/// AssertionFailure - One rendered failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssertionFailure {
    /// Why the predicate failed
    pub kind: FailureKind,
    /// Rendered, human-readable explanation
    pub message: String,
}

impl AssertionFailure {
    /// Failure of `kind` with a rendered message
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }
}

impl fmt::Display for AssertionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
