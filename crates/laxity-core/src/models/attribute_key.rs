use std::fmt;

use serde::{Deserialize, Serialize};

/// An execution relation axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    ProgramOrder,
    Linearization,
    Visibility,
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            RelationKind::ProgramOrder => "po",
            RelationKind::Linearization => "lin",
            RelationKind::Visibility => "vis",
        };
        write!(f, "{token}")
    }
}

/// A non-relational consistency property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyKind {
    ConsistentReturns,
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            PropertyKind::ConsistentReturns => "ret",
        };
        write!(f, "{token}")
    }
}

/// Key of one of the nine registered consistency attributes.
///
/// Declaration order is the fixed attribute order used when comparing
/// whole-spec consistency points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKey {
    /// Linearization contains program order.
    LinContainsPo,
    /// Visibility contains program order.
    VisContainsPo,
    /// Visibility contains visibility left-composed with program order.
    VisContainsVisXPo,
    /// Visibility contains program order right-composed with visibility.
    VisContainsPoXVis,
    /// Visibility contains linearization.
    VisContainsLin,
    /// Visibility contains visibility left-composed with linearization.
    VisContainsVisXLin,
    /// Visibility contains linearization right-composed with visibility.
    VisContainsLinXVis,
    /// Visibility is transitive.
    VisIsTransitive,
    /// Returned values are consistent with some admitted linearization.
    ConsistentReturns,
}

impl AttributeKey {
    /// All registered attributes, in the fixed comparison order.
    pub const ALL: [AttributeKey; 9] = [
        AttributeKey::LinContainsPo,
        AttributeKey::VisContainsPo,
        AttributeKey::VisContainsVisXPo,
        AttributeKey::VisContainsPoXVis,
        AttributeKey::VisContainsLin,
        AttributeKey::VisContainsVisXLin,
        AttributeKey::VisContainsLinXVis,
        AttributeKey::VisIsTransitive,
        AttributeKey::ConsistentReturns,
    ];
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AttributeKey::LinContainsPo => "lin_contains_po",
            AttributeKey::VisContainsPo => "vis_contains_po",
            AttributeKey::VisContainsVisXPo => "vis_contains_vis_X_po",
            AttributeKey::VisContainsPoXVis => "vis_contains_po_X_vis",
            AttributeKey::VisContainsLin => "vis_contains_lin",
            AttributeKey::VisContainsVisXLin => "vis_contains_vis_X_lin",
            AttributeKey::VisContainsLinXVis => "vis_contains_lin_X_vis",
            AttributeKey::VisIsTransitive => "vis_is_transitive",
            AttributeKey::ConsistentReturns => "consistent_returns",
        };
        write!(f, "{name}")
    }
}
