//! Engine error types

use chronassert_domain::{AssertionFailure, DomainError};
use thiserror::Error;

/// Errors surfaced by the engine itself
///
/// Failed predicates are not errors: they are reported. This type only shows
/// up when collected failures are turned into a `Result` or when
/// configuration cannot be loaded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssertionError {
    #[error("{} assertion(s) failed:\n{}", .failures.len(), render_failures(.failures))]
    Failed { failures: Vec<AssertionFailure> },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, AssertionError>;

fn render_failures(failures: &[AssertionFailure]) -> String {
    failures.iter().map(|failure| format!("  - {}", failure.message)).collect::<Vec<_>>().join("\n")
}
