use serde::{Deserialize, Serialize};

use super::invocation::Method;

/// The specification under test: a named API and its methods.
///
/// What the axioms of a spec require is carried by the consistency
/// lattice; strengtheners produce whole replacement `Spec` values rather
/// than mutating one in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spec {
    pub name: String,
    pub methods: Vec<Method>,
}

impl Spec {
    pub fn new(name: impl Into<String>, methods: Vec<Method>) -> Self {
        Self {
            name: name.into(),
            methods,
        }
    }
}
