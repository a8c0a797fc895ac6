//! Program schema: the invocation/session data model used as test input.

pub mod invocation;
pub mod program;
pub mod spec;

pub use invocation::{Invocation, Method};
pub use program::{Program, Sequence};
pub use spec::Spec;
