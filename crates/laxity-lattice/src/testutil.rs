//! Fixtures shared by the lattice crate's unit tests.

use laxity_core::schema::{Invocation, Method};
use laxity_core::traits::IRelation;

/// `n` plain invocations with ids `0..n` and methods `op0..opN`.
pub(crate) fn invocations(n: usize) -> Vec<Invocation> {
    (0..n)
        .map(|id| Invocation::new(id, Method::new(format!("op{id}")), vec![], false))
        .collect()
}

/// Finite relation over explicit (before, after) id pairs.
pub(crate) struct PairRelation {
    invocations: Vec<Invocation>,
    pairs: Vec<(usize, usize)>,
}

impl PairRelation {
    pub(crate) fn new(invocations: &[Invocation], pairs: &[(usize, usize)]) -> Self {
        Self {
            invocations: invocations.to_vec(),
            pairs: pairs.to_vec(),
        }
    }
}

impl IRelation for PairRelation {
    fn values(&self) -> Vec<Invocation> {
        self.invocations.clone()
    }

    fn before(&self, i: &Invocation) -> Vec<Invocation> {
        self.pairs
            .iter()
            .filter(|(_, after)| *after == i.id)
            .map(|(before, _)| self.invocations[*before].clone())
            .collect()
    }

    fn is_before(&self, i1: &Invocation, i2: &Invocation) -> bool {
        self.pairs.contains(&(i1.id, i2.id))
    }
}
