//! The nine-axiom attribute registry and its satisfaction rules.

use std::fmt;

use laxity_core::models::{AttributeKey, PropertyKind, RelationKind};
use laxity_core::schema::Invocation;
use laxity_core::traits::IRelation;
use rustc_hash::FxHashSet;
use tracing::trace;

/// How a relational axiom composes its base relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Composition {
    /// `rel` must contain `base` directly.
    Simple,
    /// `rel` must contain `rel` composed with `base`.
    Left,
    /// `rel` must contain `base` composed with `rel`.
    Right,
}

impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Composition::Simple => ".",
            Composition::Left => "L",
            Composition::Right => "R",
        };
        write!(f, "{token}")
    }
}

/// A dimension-1 axiom over an opaque property flag; no structural check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimpleAttribute {
    pub property: PropertyKind,
}

impl fmt::Display for SimpleAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "W({})", self.property)
    }
}

/// A dimension-2 axiom: relation `rel` must contain the declared
/// composition of `base`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationalAttribute {
    pub rel: RelationKind,
    pub base: RelationKind,
    pub composition: Composition,
}

impl RelationalAttribute {
    /// Whether the pair (i1, i2) is admitted: vacuously true unless the
    /// axiom's body applies (matching kinds, base composition holds) and
    /// its head fails.
    pub fn satisfies(
        &self,
        rel_kind: RelationKind,
        base_kind: RelationKind,
        rel: &dyn IRelation,
        base: &dyn IRelation,
        i1: &Invocation,
        i2: &Invocation,
    ) -> bool {
        let body = self.satisfies_body(rel_kind, base_kind, rel, base, i1, i2);
        let result = !body || self.satisfies_head(rel, i1, i2);
        trace!("{self}.satisfies({rel_kind}, {base_kind}, _, _, {i1}, {i2}) = {result}");
        result
    }

    /// Whether the axiom's body applies to the pair.
    pub fn satisfies_body(
        &self,
        rel_kind: RelationKind,
        base_kind: RelationKind,
        rel: &dyn IRelation,
        base: &dyn IRelation,
        i1: &Invocation,
        i2: &Invocation,
    ) -> bool {
        let result =
            self.same_kind(rel_kind, base_kind) && self.satisfies_base(rel, base, i1, i2);
        trace!("{self}.satisfies_body({rel_kind}, {base_kind}, _, _, {i1}, {i2}) = {result}");
        result
    }

    fn satisfies_head(&self, rel: &dyn IRelation, i1: &Invocation, i2: &Invocation) -> bool {
        rel.is_before(i1, i2)
    }

    fn same_kind(&self, rel_kind: RelationKind, base_kind: RelationKind) -> bool {
        self.rel == rel_kind && self.base == base_kind
    }

    fn satisfies_base(
        &self,
        rel: &dyn IRelation,
        base: &dyn IRelation,
        i1: &Invocation,
        i2: &Invocation,
    ) -> bool {
        match self.composition {
            Composition::Simple => base.is_before(i1, i2),
            Composition::Left => base.before(i2).iter().any(|i| rel.is_before(i1, i)),
            Composition::Right => rel.before(i2).iter().any(|i| base.is_before(i1, i)),
        }
    }

    /// Candidate left-hand invocations for `i2`, per the composition:
    /// direct predecessors, or the union of second-hop predecessors
    /// (deduped by invocation, first-seen order).
    fn candidates(
        &self,
        rel: &dyn IRelation,
        base: &dyn IRelation,
        i2: &Invocation,
    ) -> Vec<Invocation> {
        match self.composition {
            Composition::Simple => base.before(i2),
            Composition::Left => {
                dedup_by_id(base.before(i2).iter().flat_map(|i| rel.before(i)))
            }
            Composition::Right => {
                dedup_by_id(rel.before(i2).iter().flat_map(|i| base.before(i)))
            }
        }
    }

    /// Whether every candidate pair of the execution is admitted.
    pub fn satisfies_all(
        &self,
        rel_kind: RelationKind,
        base_kind: RelationKind,
        rel: &dyn IRelation,
        base: &dyn IRelation,
    ) -> bool {
        for i2 in base.values() {
            for i1 in self.candidates(rel, base, &i2) {
                if !self.satisfies(rel_kind, base_kind, rel, base, &i1, &i2) {
                    trace!("{self}.satisfies_all({rel_kind}, {base_kind}, _, _) = false");
                    return false;
                }
            }
        }
        trace!("{self}.satisfies_all({rel_kind}, {base_kind}, _, _) = true");
        true
    }

    /// All candidate pairs the execution fails to admit.
    pub fn unsat_pairs(
        &self,
        rel_kind: RelationKind,
        base_kind: RelationKind,
        rel: &dyn IRelation,
        base: &dyn IRelation,
    ) -> Vec<(Invocation, Invocation)> {
        let mut pairs = Vec::new();
        for i2 in base.values() {
            for i1 in self.candidates(rel, base, &i2) {
                if !self.satisfies(rel_kind, base_kind, rel, base, &i1, &i2) {
                    pairs.push((i1.clone(), i2.clone()));
                }
            }
        }
        pairs
    }
}

impl fmt::Display for RelationalAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "W({},{})[{}]", self.rel, self.base, self.composition)
    }
}

fn dedup_by_id(invocations: impl IntoIterator<Item = Invocation>) -> Vec<Invocation> {
    let mut seen = FxHashSet::default();
    invocations.into_iter().filter(|i| seen.insert(i.id)).collect()
}

/// One of the nine registered axioms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    Simple(SimpleAttribute),
    Relational(RelationalAttribute),
}

impl Attribute {
    /// Number of invocation slots the attribute classifies.
    pub fn dimensions(&self) -> usize {
        match self {
            Attribute::Simple(_) => 1,
            Attribute::Relational(_) => 2,
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attribute::Simple(a) => a.fmt(f),
            Attribute::Relational(a) => a.fmt(f),
        }
    }
}

/// The axiom shape registered under a key.
pub fn attribute(key: AttributeKey) -> Attribute {
    match key {
        AttributeKey::LinContainsPo => relational(
            RelationKind::Linearization,
            RelationKind::ProgramOrder,
            Composition::Simple,
        ),
        AttributeKey::VisContainsPo => relational(
            RelationKind::Visibility,
            RelationKind::ProgramOrder,
            Composition::Simple,
        ),
        AttributeKey::VisContainsVisXPo => relational(
            RelationKind::Visibility,
            RelationKind::ProgramOrder,
            Composition::Left,
        ),
        AttributeKey::VisContainsPoXVis => relational(
            RelationKind::Visibility,
            RelationKind::ProgramOrder,
            Composition::Right,
        ),
        AttributeKey::VisContainsLin => relational(
            RelationKind::Visibility,
            RelationKind::Linearization,
            Composition::Simple,
        ),
        AttributeKey::VisContainsVisXLin => relational(
            RelationKind::Visibility,
            RelationKind::Linearization,
            Composition::Left,
        ),
        AttributeKey::VisContainsLinXVis => relational(
            RelationKind::Visibility,
            RelationKind::Linearization,
            Composition::Right,
        ),
        AttributeKey::VisIsTransitive => relational(
            RelationKind::Visibility,
            RelationKind::Visibility,
            Composition::Left,
        ),
        AttributeKey::ConsistentReturns => Attribute::Simple(SimpleAttribute {
            property: PropertyKind::ConsistentReturns,
        }),
    }
}

fn relational(rel: RelationKind, base: RelationKind, composition: Composition) -> Attribute {
    Attribute::Relational(RelationalAttribute {
        rel,
        base,
        composition,
    })
}

/// All registered attributes, in the fixed comparison order.
pub fn registered() -> impl Iterator<Item = (AttributeKey, Attribute)> {
    AttributeKey::ALL.iter().map(|&key| (key, attribute(key)))
}
