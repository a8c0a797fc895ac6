//! Per-attribute consistency levels: antichains of expression tuples.

use std::collections::VecDeque;
use std::fmt;

use laxity_core::schema::Invocation;
use tracing::trace;

use crate::expression::{fmt_tuple, Expression};
use crate::order::{compare_all, Comparison};

/// One attribute's lattice value: a non-empty antichain of expression
/// tuples of uniform length (the attribute's dimension).
///
/// Immutable; weakening returns a fresh level and is monotonically
/// non-increasing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsistencyLevel {
    dimension: usize,
    maximals: Vec<Vec<Expression>>,
}

impl ConsistencyLevel {
    /// Build a level from maximal tuples.
    ///
    /// Panics on an empty or jagged set — those are programming errors,
    /// not findings.
    pub fn new(maximals: Vec<Vec<Expression>>) -> Self {
        let dimension = maximals
            .first()
            .expect("a level needs at least one maximal tuple")
            .len();
        assert!(
            maximals.iter().all(|m| m.len() == dimension),
            "jagged maximal tuples"
        );
        Self { dimension, maximals }
    }

    /// Strongest level: a single all-wildcard tuple.
    pub fn top(dim: usize) -> Self {
        Self::new(vec![vec![Expression::Wildcard; dim]])
    }

    /// The level requiring atomicity in every slot.
    pub fn atomic(dim: usize) -> Self {
        Self::new(vec![vec![Expression::Atomic; dim]])
    }

    /// Weakest level: nothing satisfies it.
    pub fn bottom(dim: usize) -> Self {
        Self::new(vec![vec![Expression::Bottom; dim]])
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// The maximal tuples of the antichain.
    pub fn maximals(&self) -> &[Vec<Expression>] {
        &self.maximals
    }

    /// Whether some maximal is weaker than all-wildcard.
    pub fn is_weak(&self) -> bool {
        self.maximals.iter().any(|exprs| !Expression::is_top(exprs))
    }

    /// Whether some maximal contains bottom.
    pub fn is_bottom(&self) -> bool {
        self.maximals.iter().any(|exprs| Expression::is_bottom(exprs))
    }

    /// Weaken this level until it no longer forbids the observed
    /// invocations, one invocation per dimension.
    ///
    /// Bottom weakens to itself. Otherwise a worklist seeded with the
    /// current maximals is drained: an all-bottom tuple collapses the
    /// whole level to bottom; a tuple still at or above the invocations'
    /// classification is expanded one step and revisited; anything else
    /// is final and lands in the result antichain (dropped if dominated,
    /// evicting members it dominates).
    pub fn weaken(&self, invocations: &[&Invocation]) -> ConsistencyLevel {
        assert_eq!(invocations.len(), self.dimension);

        if self.is_bottom() {
            return self.clone();
        }

        let excluded: Vec<Expression> =
            invocations.iter().map(|i| Expression::classify(i)).collect();
        let mut worklist: VecDeque<Vec<Expression>> = self.maximals.iter().cloned().collect();
        let mut maximals: Vec<Vec<Expression>> = Vec::new();

        while let Some(elem) = worklist.pop_front() {
            if Expression::is_bottom(&elem) {
                return ConsistencyLevel::bottom(self.dimension);
            }

            let cmp = compare_all(&elem, &excluded, Expression::compare);
            if cmp.is_ge() {
                // Still forbids the observed case; relax it further.
                for ws in Expression::weaken(&elem).into_iter().rev() {
                    worklist.push_front(ws);
                }
            } else {
                let redundant = maximals
                    .iter()
                    .any(|maximal| compare_all(&elem, maximal, Expression::compare).is_le());

                if !redundant {
                    maximals.retain(|maximal| {
                        compare_all(&elem, maximal, Expression::compare) != Comparison::Greater
                    });
                    maximals.push(elem);
                }
            }
        }

        assert!(!maximals.is_empty());
        trace!(
            "weaken-level({}) = {}",
            fmt_tuple(&excluded),
            maximals.iter().map(|m| fmt_tuple(m)).collect::<Vec<_>>().join(" | ")
        );
        ConsistencyLevel::new(maximals)
    }

    /// Order between two levels of the same dimension.
    ///
    /// `self` is at least `that` when every maximal of `that` is
    /// dominated by some maximal of `self`; at most, symmetrically.
    pub fn compare(&self, that: &ConsistencyLevel) -> Comparison {
        assert_eq!(self.dimension, that.dimension);

        let mut neq = false;
        let gte = that.maximals.iter().all(|m2| {
            self.maximals.iter().any(|m1| {
                let cmp = compare_all(m1, m2, Expression::compare);
                neq = neq || cmp != Comparison::Equal;
                cmp.is_ge()
            })
        });

        if gte && neq {
            return Comparison::Greater;
        }

        let lte = that.maximals.iter().all(|m2| {
            self.maximals
                .iter()
                .any(|m1| compare_all(m1, m2, Expression::compare).is_le())
        });

        if lte && neq {
            return Comparison::Lesser;
        }

        if gte && lte {
            return Comparison::Equal;
        }

        Comparison::Incomparable
    }

    /// Whether the invocations satisfy this level.
    ///
    /// Defined for single-tuple levels only.
    pub fn satisfies(&self, invocations: &[&Invocation]) -> bool {
        assert_eq!(
            self.maximals.len(),
            1,
            "satisfies is defined for single-tuple levels"
        );
        let exprs = &self.maximals[0];
        assert_eq!(exprs.len(), invocations.len());
        exprs.iter().zip(invocations).all(|(e, i)| e.matches(i))
    }
}

impl fmt::Display for ConsistencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tuples: Vec<String> = self.maximals.iter().map(|m| fmt_tuple(m)).collect();
        write!(f, "{}", tuples.join("|"))
    }
}
