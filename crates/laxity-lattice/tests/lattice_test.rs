//! End-to-end lattice behavior: mining-style weakening across the whole
//! algebra, ordering laws, and join reduction.

use laxity_core::models::{AttributeKey, RelationKind};
use laxity_core::schema::{Invocation, Method};
use laxity_core::traits::IRelation;
use laxity_lattice::{Comparison, Consistency, ConsistencyLevel, Expression};

// ── Test Harness ─────────────────────────────────────────────────────────

fn invocation(id: usize, method: &str, atomic: bool) -> Invocation {
    Invocation::new(id, Method::new(method), vec![], atomic)
}

/// Finite relation over explicit (before, after) id pairs.
struct PairRelation {
    invocations: Vec<Invocation>,
    pairs: Vec<(usize, usize)>,
}

impl PairRelation {
    fn new(invocations: &[Invocation], pairs: &[(usize, usize)]) -> Self {
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

// ── Expression order spot checks ─────────────────────────────────────────

#[test]
fn expression_order_spot_checks() {
    assert_eq!(
        Expression::compare(&Expression::Wildcard, &Expression::Bottom),
        Comparison::Greater
    );
    assert_eq!(
        Expression::compare(&Expression::Atomic, &Expression::Named("foo".into())),
        Comparison::Incomparable
    );
    assert_eq!(
        Expression::compare(&Expression::Named("foo".into()), &Expression::Named("foo".into())),
        Comparison::Equal
    );
}

// ── Level laws ───────────────────────────────────────────────────────────

#[test]
fn level_extremes_behave() {
    for dim in [1, 2] {
        assert!(!ConsistencyLevel::top(dim).is_weak());
        assert!(ConsistencyLevel::bottom(dim).is_bottom());
        let atomic = ConsistencyLevel::atomic(dim);
        assert_eq!(ConsistencyLevel::top(dim).compare(&atomic), Comparison::Greater);
        assert_eq!(atomic.compare(&ConsistencyLevel::bottom(dim)), Comparison::Greater);
    }
}

#[test]
fn weakening_top_by_non_atomic_pair_yields_the_two_one_sided_maximals() {
    let i1 = invocation(0, "add", false);
    let i2 = invocation(1, "remove", false);
    let weakened = ConsistencyLevel::top(2).weaken(&[&i1, &i2]);
    assert_eq!(
        weakened.maximals(),
        &[
            vec![Expression::Atomic, Expression::Wildcard],
            vec![Expression::Wildcard, Expression::Atomic],
        ]
    );
}

#[test]
fn comparison_directions_are_mutually_inverse() {
    let i1 = invocation(0, "add", false);
    let i2 = invocation(1, "remove", true);
    let top = ConsistencyLevel::top(2);
    let levels = [
        top.clone(),
        ConsistencyLevel::atomic(2),
        ConsistencyLevel::bottom(2),
        top.weaken(&[&i1, &i2]),
        top.weaken(&[&i2, &i1]),
    ];

    for l1 in &levels {
        assert_eq!(l1.compare(l1), Comparison::Equal);
        for l2 in &levels {
            let forward = l1.compare(l2);
            let backward = l2.compare(l1);
            let expected = match forward {
                Comparison::Equal => Comparison::Equal,
                Comparison::Greater => Comparison::Lesser,
                Comparison::Lesser => Comparison::Greater,
                Comparison::Incomparable => Comparison::Incomparable,
            };
            assert_eq!(backward, expected);
        }
    }
}

// ── Mining scenario ──────────────────────────────────────────────────────

#[test]
fn observed_execution_weakens_only_the_violated_axioms() {
    // Session order 0 -> 1 -> 2, but visibility only relates 0 -> 1.
    let invs: Vec<Invocation> = (0..3)
        .map(|id| invocation(id, ["add", "remove", "size"][id], false))
        .collect();
    let po = PairRelation::new(&invs, &[(0, 1), (1, 2), (0, 2)]);
    let vis = PairRelation::new(&invs, &[(0, 1)]);

    let mined = Consistency::top().weaken_relational_level_all(
        RelationKind::Visibility,
        RelationKind::ProgramOrder,
        &vis,
        &po,
    );

    assert!(mined.is_weak());
    assert!(!mined.has_bottom());
    assert_eq!(mined.compare(&Consistency::top()), Comparison::Lesser);
    // vis-over-po axioms weakened; lin-over-po untouched.
    assert!(mined.level(AttributeKey::VisContainsPo).is_weak());
    assert!(!mined.level(AttributeKey::LinContainsPo).is_weak());
    assert!(!mined.level(AttributeKey::ConsistentReturns).is_weak());

    // The text form names only the weak attributes.
    let rendered = mined.to_string();
    assert!(rendered.contains("W(vis,po)"));
    assert!(!rendered.contains("W(lin,po)"));
    assert!(!rendered.contains("fully atomic"));
}

#[test]
fn repeated_observations_converge() {
    let invs: Vec<Invocation> = (0..2).map(|id| invocation(id, "add", false)).collect();
    let po = PairRelation::new(&invs, &[(0, 1)]);
    let vis = PairRelation::new(&invs, &[]);

    let once = Consistency::top().weaken_relational_level_all(
        RelationKind::Visibility,
        RelationKind::ProgramOrder,
        &vis,
        &po,
    );
    let twice = once.weaken_relational_level_all(
        RelationKind::Visibility,
        RelationKind::ProgramOrder,
        &vis,
        &po,
    );
    assert_eq!(once, twice);
}

// ── Join ─────────────────────────────────────────────────────────────────

#[test]
fn join_members_are_pairwise_incomparable() {
    let invs: Vec<Invocation> = (0..2).map(|id| invocation(id, "add", false)).collect();
    let po = PairRelation::new(&invs, &[(0, 1)]);
    let empty = PairRelation::new(&invs, &[]);

    let top = Consistency::top();
    let vis_weak = top.weaken_relational_level_all(
        RelationKind::Visibility,
        RelationKind::ProgramOrder,
        &empty,
        &po,
    );
    let lin_weak = top.weaken_relational_level_all(
        RelationKind::Linearization,
        RelationKind::ProgramOrder,
        &empty,
        &po,
    );

    // Two incomparable weak points survive; adding top collapses both.
    let disjunction = Consistency::join(vec![vis_weak.clone(), lin_weak.clone()]);
    assert_eq!(disjunction.len(), 2);
    let members: Vec<_> = disjunction.iter().collect();
    assert_eq!(members[0].compare(members[1]), Comparison::Incomparable);

    let collapsed = Consistency::join(vec![vis_weak, top.clone(), lin_weak]);
    assert_eq!(collapsed.len(), 1);
    assert!(!collapsed.is_weak());
}
