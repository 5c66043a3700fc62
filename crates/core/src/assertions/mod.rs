//! Fluent predicates over points in time
//!
//! - [`DateTimeAssertions`]: equality, proximity, ordering, component and
//!   calendar-date predicates
//! - [`RangeAssertion`]: relative range comparisons started by `be_within` and
//!   friends
//! - [`CloseToWindow`]: the saturating window behind `be_close_to`

pub mod constraint;
pub mod datetime;
pub mod range;
pub mod should;
pub mod window;

pub use constraint::AndConstraint;
pub use datetime::DateTimeAssertions;
pub use range::{RangeAssertion, Relation};
pub use should::Should;
pub use window::CloseToWindow;
