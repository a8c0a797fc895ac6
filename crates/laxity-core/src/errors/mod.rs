//! Error handling for Laxity.
//! One error enum for the validation pipeline, `thiserror` only, zero `anyhow`.
//!
//! Only failures of the external collaborators are represented here; they
//! propagate as failures of the enclosing violation sequence, with no
//! retries (retry policy belongs to the collaborator). Structural lattice
//! invariant violations are programming errors and panic instead, and a
//! level reaching bottom is an ordinary finding, not an error.

pub type LaxityResult<T> = Result<T, LaxityError>;

/// Failure of an external collaborator while a violation sequence is
/// being produced or consumed.
#[derive(Debug, thiserror::Error)]
pub enum LaxityError {
    #[error("tester failure: {reason}")]
    Tester { reason: String },

    #[error("program generation failure: {reason}")]
    Generator { reason: String },

    #[error("strengthener failure: {reason}")]
    Strengthener { reason: String },
}
