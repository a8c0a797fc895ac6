use crate::errors::LaxityResult;
use crate::models::OutcomeViolation;
use crate::schema::Spec;

/// A lazy, possibly unbounded sequence of violations.
///
/// Consumer-cancellable: dropping the iterator before exhaustion releases
/// the underlying program source (streams cancel their source token on
/// drop). Collaborator failures surface as `Err` items and end the
/// sequence.
pub type ViolationIter<'a> = Box<dyn Iterator<Item = LaxityResult<OutcomeViolation>> + 'a>;

/// Validates a spec by hunting for counter-examples.
pub trait ISpecValidator {
    /// Lazy sequence of violations of `spec`, in program-generation
    /// order.
    fn violations(&self, spec: &Spec) -> LaxityResult<ViolationIter<'_>>;

    /// The first violation of `spec`, if any.
    ///
    /// The underlying program source is released as soon as a result (or
    /// exhaustion) is obtained — the source may be infinite, so this is a
    /// correctness requirement, not a courtesy. The default impl gets it
    /// from the stream's guaranteed drop.
    fn first_violation(&self, spec: &Spec) -> LaxityResult<Option<OutcomeViolation>> {
        let mut stream = self.violations(spec)?;
        match stream.next() {
            Some(Ok(violation)) => Ok(Some(violation)),
            Some(Err(e)) => Err(e),
            None => Ok(None),
        }
    }
}
