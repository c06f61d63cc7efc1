//! Core type definitions for the knowledge graph

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Unique identifier for a node (e.g., "ep_login")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        NodeId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        NodeId(s)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId(s.to_string())
    }
}

// Lets the node table be looked up with a plain &str.
impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Node kind (e.g., "Endpoint", "Vulnerability")
///
/// Kinds are open: any string is a valid kind, the constants in
/// [`crate::graph::kinds`] only name the ones the sample dataset uses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct NodeKind(String);

impl NodeKind {
    pub fn new(kind: impl Into<String>) -> Self {
        NodeKind(kind.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for NodeKind {
    fn from(s: String) -> Self {
        NodeKind(s)
    }
}

impl From<&str> for NodeKind {
    fn from(s: &str) -> Self {
        NodeKind(s.to_string())
    }
}

/// Relation kind (e.g., "located-at-endpoint", "generates-impact")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct RelationKind(String);

impl RelationKind {
    pub fn new(kind: impl Into<String>) -> Self {
        RelationKind(kind.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RelationKind {
    fn from(s: String) -> Self {
        RelationKind(s)
    }
}

impl From<&str> for RelationKind {
    fn from(s: &str) -> Self {
        RelationKind(s.to_string())
    }
}

/// Which end of a relation a one-hop scan resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Follow relations leaving the node; yields their targets
    Outgoing,
    /// Follow relations arriving at the node; yields their sources
    Incoming,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_node_id() {
        let id = NodeId::new("ep_login");
        assert_eq!(id.as_str(), "ep_login");
        assert_eq!(format!("{}", id), "ep_login");

        let id2: NodeId = "tool_burp".into();
        assert_eq!(id2.as_str(), "tool_burp");
    }

    #[test]
    fn test_node_id_borrow_lookup() {
        let mut map = HashMap::new();
        map.insert(NodeId::new("vul_1"), 1);
        assert_eq!(map.get("vul_1"), Some(&1));
        assert_eq!(map.get("vul_2"), None);
    }

    #[test]
    fn test_node_kind() {
        let kind = NodeKind::new("Endpoint");
        assert_eq!(kind.as_str(), "Endpoint");
        assert_eq!(format!("{}", kind), "Endpoint");

        // Unknown kinds are just data
        let custom: NodeKind = "CloudBucket".into();
        assert_eq!(custom.as_str(), "CloudBucket");
    }

    #[test]
    fn test_relation_kind() {
        let kind = RelationKind::new("generates-impact");
        assert_eq!(kind.as_str(), "generates-impact");
        assert_eq!(format!("{}", kind), "generates-impact");
    }

    #[test]
    fn test_id_ordering() {
        let a = NodeId::new("a");
        let b = NodeId::new("b");
        assert!(a < b);
    }
}
