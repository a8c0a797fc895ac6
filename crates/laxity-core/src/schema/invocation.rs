use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A method of the specification under test.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// One operation call in an execution: method, arguments, atomicity.
///
/// Identity is the `id`, unique within one program; arguments are opaque
/// JSON values chosen by the program generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invocation {
    pub id: usize,
    pub method: Method,
    #[serde(default)]
    pub arguments: Vec<serde_json::Value>,
    #[serde(default)]
    pub atomic: bool,
}

impl Invocation {
    pub fn new(id: usize, method: Method, arguments: Vec<serde_json::Value>, atomic: bool) -> Self {
        Self {
            id,
            method,
            arguments,
            atomic,
        }
    }
}

impl PartialEq for Invocation {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Invocation {}

impl Hash for Invocation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let args: Vec<String> = self.arguments.iter().map(ToString::to_string).collect();
        write!(f, "{}({})", self.method.name, args.join(","))
    }
}
