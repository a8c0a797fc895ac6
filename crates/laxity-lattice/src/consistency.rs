//! Whole-spec consistency points over the attribute registry.

use std::collections::{BTreeMap, VecDeque};
use std::fmt;

use laxity_core::models::{AttributeKey, RelationKind};
use laxity_core::schema::Invocation;
use laxity_core::traits::IRelation;
use tracing::debug;

use crate::attribute::{attribute, registered, Attribute};
use crate::disjunction::ConsistencyDisjunction;
use crate::expression::Expression;
use crate::level::ConsistencyLevel;
use crate::order::{compare_all, Comparison};

/// A point in the product lattice: one level per registered attribute.
///
/// Immutable; every weakening entry point returns a fresh value. A mined
/// spec starts at [`Consistency::top`] (strongest, unweakened) and only
/// ever moves downward as violations surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Consistency {
    levels: BTreeMap<AttributeKey, ConsistencyLevel>,
}

impl Consistency {
    /// The strongest point: every attribute at top.
    pub fn top() -> Self {
        let levels = registered()
            .map(|(key, attr)| (key, ConsistencyLevel::top(attr.dimensions())))
            .collect();
        Self { levels }
    }

    /// The level held for an attribute.
    pub fn level(&self, key: AttributeKey) -> &ConsistencyLevel {
        &self.levels[&key]
    }

    /// Whether this point is at least as strong as `level` on `key`.
    pub fn includes(&self, key: AttributeKey, level: &ConsistencyLevel) -> bool {
        self.levels[&key].compare(level).is_ge()
    }

    /// Whether some attribute is weaker than top.
    pub fn is_weak(&self) -> bool {
        self.levels.values().any(|level| level.is_weak())
    }

    /// Whether some attribute has collapsed to bottom: no attribute value
    /// can satisfy both the implementation and the composition rule.
    /// A finding, not an error.
    pub fn has_bottom(&self) -> bool {
        self.levels.values().any(|level| level.is_bottom())
    }

    /// Order between two points over identical attribute sets, folded
    /// per-attribute in the fixed registry order.
    pub fn compare(&self, that: &Consistency) -> Comparison {
        assert_eq!(self.levels.len(), that.levels.len());
        let mut ls1 = Vec::with_capacity(self.levels.len());
        let mut ls2 = Vec::with_capacity(self.levels.len());
        for (key, level) in &self.levels {
            ls1.push(level);
            ls2.push(that.levels.get(key).expect("mismatched attribute sets"));
        }
        compare_all(&ls1, &ls2, |l1, l2| l1.compare(l2))
    }

    /// Weaken a simple attribute's level by the invocation's
    /// classification. Returns an unchanged point if the level already
    /// admits the invocation.
    pub fn weaken_simple_level(&self, key: AttributeKey, invocation: &Invocation) -> Consistency {
        assert!(
            matches!(attribute(key), Attribute::Simple(_)),
            "{key} is not a simple attribute"
        );
        let old_level = &self.levels[&key];
        let new_level = old_level.weaken(&[invocation]);
        if *old_level == new_level {
            return self.clone();
        }
        debug!(
            "weakening attribute {key} with {} invocation from {old_level} to {new_level}",
            Expression::classify(invocation)
        );
        let mut levels = self.levels.clone();
        levels.insert(key, new_level);
        Consistency { levels }
    }

    /// Weaken every relational attribute the pair (i1, i2) violates —
    /// the axiom's body holds but its head fails.
    pub fn weaken_relational_level(
        &self,
        rel_kind: RelationKind,
        base_kind: RelationKind,
        rel: &dyn IRelation,
        base: &dyn IRelation,
        i1: &Invocation,
        i2: &Invocation,
    ) -> Consistency {
        let mut levels = self.levels.clone();
        let mut changed = false;

        for (key, level) in &self.levels {
            let Attribute::Relational(attr) = attribute(*key) else {
                continue;
            };
            if attr.satisfies(rel_kind, base_kind, rel, base, i1, i2) {
                continue;
            }
            let new_level = level.weaken(&[i1, i2]);
            debug!(
                "weakening attribute {attr} for [{i1}/{}, {i2}/{}] from {level} to {new_level}",
                Expression::classify(i1),
                Expression::classify(i2)
            );
            if *level != new_level {
                levels.insert(*key, new_level);
                changed = true;
            }
        }

        if changed {
            Consistency { levels }
        } else {
            self.clone()
        }
    }

    /// Weaken every relational attribute by all pairs the execution fails
    /// to admit, folding its `unsat_pairs` through single-pair
    /// weakenings.
    pub fn weaken_relational_level_all(
        &self,
        rel_kind: RelationKind,
        base_kind: RelationKind,
        rel: &dyn IRelation,
        base: &dyn IRelation,
    ) -> Consistency {
        let mut levels = self.levels.clone();
        let mut changed = false;

        for (key, level) in &self.levels {
            let Attribute::Relational(attr) = attribute(*key) else {
                continue;
            };
            let mut new_level = level.clone();
            for (i1, i2) in attr.unsat_pairs(rel_kind, base_kind, rel, base) {
                new_level = new_level.weaken(&[&i1, &i2]);
            }
            if *level != new_level {
                levels.insert(*key, new_level);
                changed = true;
            }
        }

        if changed {
            Consistency { levels }
        } else {
            self.clone()
        }
    }

    /// Antichain-reduced join of several points.
    ///
    /// A candidate dominated by (or equal to) an accepted result is
    /// discarded; accepting a candidate evicts the results it strictly
    /// dominates.
    pub fn join(points: Vec<Consistency>) -> ConsistencyDisjunction {
        let mut results: Vec<Consistency> = Vec::new();
        let mut worklist: VecDeque<Consistency> = points.into();

        'candidates: while let Some(c) = worklist.pop_front() {
            for accepted in &results {
                if accepted.compare(&c).is_ge() {
                    continue 'candidates;
                }
            }

            results.retain(|accepted| c.compare(accepted) != Comparison::Greater);
            results.push(c);
        }

        ConsistencyDisjunction::new(results)
    }
}

impl fmt::Display for Consistency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let weaknesses: Vec<String> = self
            .levels
            .iter()
            .filter(|(_, level)| level.is_weak())
            .map(|(key, level)| format!("{}[{level}]", attribute(*key)))
            .collect();
        if weaknesses.is_empty() {
            write!(f, "fully atomic")
        } else {
            write!(f, "{}", weaknesses.join(":"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{invocations, PairRelation};
    use laxity_core::schema::Method;

    #[test]
    fn top_is_not_weak_and_prints_the_atomic_token() {
        let top = Consistency::top();
        assert!(!top.is_weak());
        assert!(!top.has_bottom());
        assert_eq!(top.to_string(), "fully atomic");
        assert_eq!(top.compare(&Consistency::top()), Comparison::Equal);
    }

    #[test]
    fn weakening_a_simple_level_replaces_only_that_entry() {
        let invocation = Invocation::new(0, Method::new("get"), vec![], true);
        let top = Consistency::top();
        let weakened = top.weaken_simple_level(AttributeKey::ConsistentReturns, &invocation);

        assert!(weakened.is_weak());
        assert_ne!(weakened, top);
        assert_eq!(weakened.compare(&top), Comparison::Lesser);
        for key in AttributeKey::ALL {
            if key != AttributeKey::ConsistentReturns {
                assert_eq!(weakened.level(key), top.level(key));
            }
        }
        assert_eq!(
            *weakened.level(AttributeKey::ConsistentReturns),
            ConsistencyLevel::bottom(1)
        );
    }

    #[test]
    fn weakening_with_an_admitted_invocation_is_identity() {
        let plain = Invocation::new(0, Method::new("get"), vec![], false);
        let invs = invocations(1);
        let top = Consistency::top();

        // An atomic-only simple level already admits a plain invocation.
        let weak = top.weaken_simple_level(AttributeKey::ConsistentReturns, &plain);
        assert_eq!(weak, weak.weaken_simple_level(AttributeKey::ConsistentReturns, &plain));

        // An execution satisfying every axiom weakens nothing.
        let empty = PairRelation::new(&invs, &[]);
        let unchanged = top.weaken_relational_level_all(
            RelationKind::Visibility,
            RelationKind::ProgramOrder,
            &empty,
            &empty,
        );
        assert_eq!(unchanged, top);
    }

    #[test]
    #[should_panic]
    fn weakening_a_relational_key_as_simple_panics() {
        let invocation = Invocation::new(0, Method::new("get"), vec![], false);
        Consistency::top().weaken_simple_level(AttributeKey::LinContainsPo, &invocation);
    }

    #[test]
    fn relational_weakening_touches_only_violated_attributes() {
        // base po: 0 -> 1; vis misses the pair, so every vis-over-po
        // simple-composition axiom is violated by (0, 1).
        let invs = invocations(2);
        let base = PairRelation::new(&invs, &[(0, 1)]);
        let rel = PairRelation::new(&invs, &[]);

        let top = Consistency::top();
        let weakened = top.weaken_relational_level(
            RelationKind::Visibility,
            RelationKind::ProgramOrder,
            &rel,
            &base,
            &invs[0],
            &invs[1],
        );

        assert!(weakened.is_weak());
        assert!(weakened
            .level(AttributeKey::VisContainsPo)
            .compare(top.level(AttributeKey::VisContainsPo))
            .is_le());
        assert_ne!(
            weakened.level(AttributeKey::VisContainsPo),
            top.level(AttributeKey::VisContainsPo)
        );
        // lin-over-po has mismatched kinds and is untouched.
        assert_eq!(
            weakened.level(AttributeKey::LinContainsPo),
            top.level(AttributeKey::LinContainsPo)
        );
        // vis-over-lin likewise.
        assert_eq!(
            weakened.level(AttributeKey::VisContainsLin),
            top.level(AttributeKey::VisContainsLin)
        );
    }

    #[test]
    fn weaken_all_folds_every_unsat_pair() {
        let invs = invocations(3);
        let base = PairRelation::new(&invs, &[(0, 1), (1, 2)]);
        let rel = PairRelation::new(&invs, &[]);

        let weakened = Consistency::top().weaken_relational_level_all(
            RelationKind::Visibility,
            RelationKind::ProgramOrder,
            &rel,
            &base,
        );
        let stepwise = Consistency::top()
            .weaken_relational_level(
                RelationKind::Visibility,
                RelationKind::ProgramOrder,
                &rel,
                &base,
                &invs[0],
                &invs[1],
            )
            .weaken_relational_level(
                RelationKind::Visibility,
                RelationKind::ProgramOrder,
                &rel,
                &base,
                &invs[1],
                &invs[2],
            );
        assert_eq!(weakened, stepwise);
    }

    #[test]
    fn join_reduces_to_an_antichain() {
        let invocation = Invocation::new(0, Method::new("get"), vec![], true);
        let top = Consistency::top();
        let weak = top.weaken_simple_level(AttributeKey::ConsistentReturns, &invocation);

        // top dominates weak, and duplicates collapse.
        let joined = Consistency::join(vec![weak.clone(), top.clone(), weak.clone()]);
        assert_eq!(joined.len(), 1);
        assert!(!joined.is_weak());

        let singleton = Consistency::join(vec![weak.clone()]);
        assert_eq!(singleton.len(), 1);
        assert!(singleton.is_weak());
        assert!(singleton.has_bottom());
    }

    #[test]
    fn display_lists_weak_attributes_with_their_levels() {
        let invocation = Invocation::new(0, Method::new("get"), vec![], true);
        let weakened =
            Consistency::top().weaken_simple_level(AttributeKey::ConsistentReturns, &invocation);
        assert_eq!(weakened.to_string(), "W(ret)[!]");
    }
}
