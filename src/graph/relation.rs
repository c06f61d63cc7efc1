//! Directed, typed relations between nodes
//!
//! Relations carry no identity of their own: the same (source, target, kind)
//! triple may be stored more than once, producing parallel edges.

use super::types::{NodeId, RelationKind};
use serde::{Deserialize, Serialize};

/// A directed relation in the knowledge graph
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relation {
    /// Source node (relation goes FROM this node)
    pub source: NodeId,

    /// Target node (relation goes TO this node)
    pub target: NodeId,

    /// Kind of relation (e.g., "has-endpoint", "is-of-type")
    pub kind: RelationKind,
}

impl Relation {
    pub fn new(
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
        kind: impl Into<RelationKind>,
    ) -> Self {
        Relation {
            source: source.into(),
            target: target.into(),
            kind: kind.into(),
        }
    }

    /// Check if this relation goes FROM a specific node
    pub fn starts_from(&self, node: &str) -> bool {
        self.source.as_str() == node
    }

    /// Check if this relation goes TO a specific node
    pub fn ends_at(&self, node: &str) -> bool {
        self.target.as_str() == node
    }

    /// Check if this relation touches a node at either end
    pub fn touches(&self, node: &str) -> bool {
        self.starts_from(node) || self.ends_at(node)
    }

    pub fn is_kind(&self, kind: &str) -> bool {
        self.kind.as_str() == kind
    }

    /// Match on (source, target) and, when given, on kind
    pub fn matches(&self, source: &str, target: &str, kind: Option<&str>) -> bool {
        self.starts_from(source) && self.ends_at(target) && kind.map_or(true, |k| self.is_kind(k))
    }
}
