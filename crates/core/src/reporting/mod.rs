//! Reporter adapters and the guard-then-check chain

pub mod chain;
pub mod collecting;
pub mod panic;

pub use chain::{AssertionChain, Verdict};
pub use collecting::CollectingReporter;
pub use panic::PanicReporter;
