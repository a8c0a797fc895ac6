//! Shared vocabulary and result models.

pub mod attribute_key;
pub mod violation;

pub use attribute_key::{AttributeKey, PropertyKind, RelationKind};
pub use violation::{MaximalityViolation, Outcome, OutcomeViolation};
