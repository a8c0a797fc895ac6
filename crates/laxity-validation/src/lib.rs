//! # laxity-validation
//!
//! The violation-search engine: batched, demand-driven testing of specs
//! against an execution tester, plus the maximality search that drives
//! spec strengthening.
//!
//! ## Validators
//! - [`RandomTestValidator`] — randomized programs, lazily filtered
//! - [`ProgramValidator`] — deterministic replay of a fixed program list
//! - [`SpecStrengthValidator`] — per-method strengthening search
//!
//! Violation sequences are lazy and consumer-cancellable: dropping a
//! stream cancels the underlying program source's token, releasing a
//! possibly infinite source without draining it.

pub mod batch;
pub mod random;
pub mod replay;
pub mod stream;
pub mod strength;

pub use batch::Batches;
pub use random::RandomTestValidator;
pub use replay::ProgramValidator;
pub use stream::ViolationStream;
pub use strength::{MaximalityStream, SpecStrengthValidator};
