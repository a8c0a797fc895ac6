//! Contracts of the external collaborators.

pub mod cancellation;
pub mod generator;
pub mod relation;
pub mod strengthener;
pub mod tester;
pub mod validator;

pub use cancellation::{Cancellable, CancellationToken};
pub use generator::{IProgramGenerator, IProgramSource, ProgramFilter};
pub use relation::IRelation;
pub use strengthener::{ISpecStrengthener, Strengthening};
pub use tester::IOutcomeTester;
pub use validator::{ISpecValidator, ViolationIter};
