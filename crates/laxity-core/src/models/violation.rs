use std::fmt;

use serde::{Deserialize, Serialize};

use super::attribute_key::AttributeKey;
use crate::schema::{Method, Program};

/// One observed outcome of a program: per-sequence results and how often
/// the tester saw it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outcome {
    pub results: Vec<serde_json::Value>,
    pub count: usize,
    /// Whether the spec admits this outcome.
    pub expected: bool,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let results: Vec<String> = self.results.iter().map(ToString::to_string).collect();
        write!(f, "[{}] count {}", results.join(","), self.count)
    }
}

/// A tester-shaped counter-example: a program together with the outcomes
/// the current spec does not admit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutcomeViolation {
    pub program: Program,
    pub outcomes: Vec<Outcome>,
}

impl fmt::Display for OutcomeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for outcome in &self.outcomes {
            write!(f, "\n{outcome}")?;
        }
        Ok(())
    }
}

/// Evidence that the mined spec is not tight: the implementation also
/// meets a stronger axiom for this method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaximalityViolation {
    pub method: Method,
    pub attribute: AttributeKey,
}

impl fmt::Display for MaximalityViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} admits stronger {}", self.method, self.attribute)
    }
}
