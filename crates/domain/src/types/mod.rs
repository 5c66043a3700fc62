//! Domain value types

pub mod component;
pub mod failure;
pub mod options;
pub mod range;
pub mod subject;

pub use component::DateComponent;
pub use failure::{AssertionFailure, FailureKind};
pub use options::AssertionOptions;
pub use range::{RangeMode, RangeRequest};
pub use subject::Subject;
