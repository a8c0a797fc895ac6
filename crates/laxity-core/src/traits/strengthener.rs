use crate::models::AttributeKey;
use crate::schema::{Method, Spec};

/// A candidate stronger spec, together with the attribute that was
/// strengthened.
#[derive(Debug, Clone)]
pub struct Strengthening {
    pub spec: Spec,
    pub attribute: AttributeKey,
}

/// Proposes candidate strengthenings of a spec, one method at a time.
///
/// Proposals are tried strictly in iterator order. Implementors must not
/// borrow from `spec` or `method` beyond the call; clone what the
/// iterator needs.
pub trait ISpecStrengthener: Send + Sync {
    fn strengthenings<'a>(
        &'a self,
        spec: &Spec,
        method: &Method,
    ) -> Box<dyn Iterator<Item = Strengthening> + 'a>;
}
