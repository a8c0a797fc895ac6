use std::fmt;

use serde::{Deserialize, Serialize};

use super::invocation::{Invocation, Method};

/// One session: invocations issued in order by a single client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequence {
    pub index: usize,
    pub invocations: Vec<Invocation>,
}

impl Sequence {
    pub fn new(index: usize, invocations: Vec<Invocation>) -> Self {
        Self { index, invocations }
    }
}

/// A candidate concurrent execution: sessions of invocations plus
/// inter-session ordering constraints. The unit of test input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub sequences: Vec<Sequence>,
    /// Pairs of sequence indices ordered across sessions.
    #[serde(default)]
    pub order: Vec<(usize, usize)>,
}

impl Program {
    pub fn new(sequences: Vec<Sequence>) -> Self {
        Self {
            sequences,
            order: Vec::new(),
        }
    }

    /// All invocations across sessions, in session order.
    pub fn invocations(&self) -> impl Iterator<Item = &Invocation> {
        self.sequences.iter().flat_map(|s| s.invocations.iter())
    }

    /// Whether some session invokes the given method.
    pub fn exercises(&self, method: &Method) -> bool {
        self.invocations().any(|i| i.method.name == method.name)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Only unordered programs have a flat text form.
        debug_assert!(self.order.is_empty());
        let sessions: Vec<String> = self
            .sequences
            .iter()
            .map(|s| {
                let invocations: Vec<String> =
                    s.invocations.iter().map(ToString::to_string).collect();
                format!("{{ {} }}", invocations.join("; "))
            })
            .collect();
        write!(f, "{}", sessions.join(" || "))
    }
}
