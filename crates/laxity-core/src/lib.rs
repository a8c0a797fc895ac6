//! # laxity-core
//!
//! Foundation crate for the Laxity consistency-spec miner.
//! Defines the program schema, the contracts of the external collaborators
//! (tester, generator, strengthener, execution relations), errors, config,
//! and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod logging;
pub mod models;
pub mod schema;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{ProgramLimits, TestingConfig};
pub use errors::{LaxityError, LaxityResult};
pub use models::{AttributeKey, MaximalityViolation, Outcome, OutcomeViolation, PropertyKind, RelationKind};
pub use schema::{Invocation, Method, Program, Sequence, Spec};
