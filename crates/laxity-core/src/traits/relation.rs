use crate::schema::Invocation;

/// One axis (program order, linearization, or visibility) of one
/// candidate execution.
///
/// Consumers take one instance per relevant axis; the invocations a
/// relation hands back all belong to that single execution.
pub trait IRelation {
    /// All invocations related by this axis.
    fn values(&self) -> Vec<Invocation>;

    /// Invocations ordered before `i`.
    fn before(&self, i: &Invocation) -> Vec<Invocation>;

    /// Whether `i1` is ordered before `i2`.
    fn is_before(&self, i1: &Invocation, i2: &Invocation) -> bool;
}
