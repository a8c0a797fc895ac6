//! Expression atoms classifying one invocation slot.

use std::fmt;

use laxity_core::schema::Invocation;
use tracing::trace;

use crate::order::Comparison;

/// Atomic lattice value for one invocation slot of an axiom.
///
/// Per coordinate, `Wildcard` is top and `Bottom` is bottom; two distinct
/// `Named` methods, or `Named` against `Atomic`, are incomparable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    /// Matches every invocation.
    Wildcard,
    /// Matches invocations flagged atomic.
    Atomic,
    /// Matches no invocation.
    Bottom,
    /// Matches invocations of one named method.
    Named(String),
}

impl Expression {
    /// Order between two expressions of one coordinate.
    pub fn compare(e1: &Expression, e2: &Expression) -> Comparison {
        if e1 == e2 {
            return Comparison::Equal;
        }

        if matches!(e1, Expression::Wildcard) || matches!(e2, Expression::Bottom) {
            return Comparison::Greater;
        }

        if matches!(e1, Expression::Bottom) || matches!(e2, Expression::Wildcard) {
            return Comparison::Lesser;
        }

        Comparison::Incomparable
    }

    /// Whether this expression admits the invocation.
    pub fn matches(&self, invocation: &Invocation) -> bool {
        let result = match self {
            Expression::Wildcard => true,
            Expression::Bottom => false,
            Expression::Atomic => invocation.atomic,
            Expression::Named(name) => invocation.method.name == *name,
        };
        trace!("match({invocation}, {self}) = {result}");
        result
    }

    /// The strongest expression an invocation is known to satisfy.
    pub fn classify(invocation: &Invocation) -> Expression {
        if invocation.atomic {
            Expression::Atomic
        } else {
            Expression::Wildcard
        }
    }

    /// Whether a tuple is all-wildcard.
    pub fn is_top(exprs: &[Expression]) -> bool {
        exprs.iter().all(|e| matches!(e, Expression::Wildcard))
    }

    /// Whether a tuple contains bottom.
    pub fn is_bottom(exprs: &[Expression]) -> bool {
        exprs.iter().any(|e| matches!(e, Expression::Bottom))
    }

    /// One-step weakenings of a tuple, one candidate per coordinate.
    ///
    /// A coordinate that is not `Wildcard` cannot weaken further and
    /// yields an all-bottom candidate; a `Wildcard` coordinate yields the
    /// tuple with that coordinate set to `Atomic`. Candidates containing
    /// bottom are filtered out — unless the filter would empty the list,
    /// in which case the unfiltered candidates are returned verbatim so a
    /// caller's worklist can observe an all-bottom tuple and collapse the
    /// whole level.
    pub fn weaken(exprs: &[Expression]) -> Vec<Vec<Expression>> {
        let weakenings: Vec<Vec<Expression>> = exprs
            .iter()
            .enumerate()
            .map(|(j, e)| {
                if !matches!(e, Expression::Wildcard) {
                    vec![Expression::Bottom; exprs.len()]
                } else {
                    let mut ws = exprs.to_vec();
                    ws[j] = Expression::Atomic;
                    ws
                }
            })
            .collect();

        let filtered: Vec<Vec<Expression>> = weakenings
            .iter()
            .filter(|ws| !Expression::is_bottom(ws))
            .cloned()
            .collect();

        let result = if filtered.is_empty() {
            weakenings
        } else {
            filtered
        };
        trace!(
            "weaken({}) = {}",
            fmt_tuple(exprs),
            result.iter().map(|ws| fmt_tuple(ws)).collect::<Vec<_>>().join(" | ")
        );
        result
    }

    /// Greatest lower bound of a non-empty list.
    ///
    /// Folds a running minimum via `compare`; an incomparable pair
    /// collapses the running value to `Bottom` and the fold continues.
    pub fn meet(exprs: &[Expression]) -> Expression {
        let mut min = exprs.first().expect("meet of a non-empty list").clone();
        for expr in exprs {
            match Expression::compare(&min, expr) {
                Comparison::Equal | Comparison::Lesser => continue,
                Comparison::Greater => min = expr.clone(),
                Comparison::Incomparable => min = Expression::Bottom,
            }
        }
        min
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Wildcard => write!(f, "*"),
            Expression::Atomic => write!(f, "A"),
            Expression::Bottom => write!(f, "!"),
            Expression::Named(name) => write!(f, "{name}"),
        }
    }
}

/// Render a tuple as `e,e`.
pub(crate) fn fmt_tuple(exprs: &[Expression]) -> String {
    exprs.iter().map(ToString::to_string).collect::<Vec<_>>().join(",")
}
