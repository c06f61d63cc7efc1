//! In-memory knowledge graph storage
//!
//! Nodes live in an insertion-ordered hash table keyed by id; relations live
//! in a plain sequence. Every query is a scan computed on demand, so results
//! always come back in insertion order.
//!
//! The store has no interior locking. Mutation requires `&mut GraphStore`;
//! callers sharing a store across threads wrap it in a lock themselves.

use super::node::Node;
use super::property::PropertyValue;
use super::relation::Relation;
use super::types::{Direction, NodeId, RelationKind};
use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during graph mutation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Node {0} already exists")]
    DuplicateIdentifier(NodeId),

    #[error("Relation endpoint {0} is not a registered node")]
    UnknownEndpoint(NodeId),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Node and relation counts, grouped by kind in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GraphStatistics {
    pub node_count: usize,
    pub relation_count: usize,
    pub nodes_by_kind: IndexMap<String, usize>,
    pub relations_by_kind: IndexMap<String, usize>,
}

/// In-memory knowledge graph
///
/// - nodes: NodeId -> Node (hash lookup, iteration in insertion order)
/// - relations: ordered sequence, parallel relations allowed
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    nodes: IndexMap<NodeId, Node>,
    relations: Vec<Relation>,
}

impl GraphStore {
    /// Create a new empty graph store
    pub fn new() -> Self {
        GraphStore {
            nodes: IndexMap::new(),
            relations: Vec::new(),
        }
    }

    /// Insert a node; fails if its id is already taken
    pub fn add_node(&mut self, node: Node) -> GraphResult<()> {
        if self.nodes.contains_key(node.id().as_str()) {
            return Err(GraphError::DuplicateIdentifier(node.id().clone()));
        }

        debug!("Added node {} ({})", node.id(), node.kind());
        self.nodes.insert(node.id().clone(), node);
        Ok(())
    }

    /// Remove a node and every relation touching it
    ///
    /// Returns `None` without touching the store when the id is unknown.
    pub fn remove_node(&mut self, id: &str) -> Option<Node> {
        let node = self.nodes.shift_remove(id)?;

        let before = self.relations.len();
        self.relations.retain(|r| !r.touches(id));
        debug!(
            "Removed node {} and {} connected relations",
            id,
            before - self.relations.len()
        );

        Some(node)
    }

    /// Append a relation between two registered nodes
    ///
    /// Duplicates are accepted and stored as parallel relations.
    pub fn add_relation(
        &mut self,
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
        kind: impl Into<RelationKind>,
    ) -> GraphResult<()> {
        let source = source.into();
        let target = target.into();

        if !self.contains_node(source.as_str()) {
            return Err(GraphError::UnknownEndpoint(source));
        }
        if !self.contains_node(target.as_str()) {
            return Err(GraphError::UnknownEndpoint(target));
        }

        let relation = Relation {
            source,
            target,
            kind: kind.into(),
        };
        debug!(
            "Added relation {} -[{}]-> {}",
            relation.source, relation.kind, relation.target
        );
        self.relations.push(relation);
        Ok(())
    }

    /// Remove every relation from `source` to `target`, optionally only those
    /// of one kind. Returns how many were removed.
    pub fn remove_relation(&mut self, source: &str, target: &str, kind: Option<&str>) -> usize {
        let before = self.relations.len();
        self.relations.retain(|r| !r.matches(source, target, kind));
        let removed = before - self.relations.len();

        if removed > 0 {
            debug!("Removed {} relations {} -> {}", removed, source, target);
        }
        removed
    }

    /// Get a node by id
    pub fn get_node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Get a mutable node by id
    ///
    /// The id itself cannot be changed through the returned reference.
    pub fn get_node_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    /// Check if a node exists
    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// All nodes of a kind, in insertion order
    pub fn find_nodes_by_kind(&self, kind: &str) -> Vec<&Node> {
        self.nodes.values().filter(|n| n.is_kind(kind)).collect()
    }

    /// All nodes whose property `key` equals `value`; a missing key never matches
    pub fn find_nodes_by_property(&self, key: &str, value: &PropertyValue) -> Vec<&Node> {
        self.nodes
            .values()
            .filter(|n| n.get_property(key) == Some(value))
            .collect()
    }

    /// Targets of every outgoing relation, optionally filtered by relation kind
    pub fn neighbors(&self, id: &str, kind: Option<&str>) -> Vec<&Node> {
        self.relations
            .iter()
            .filter(|r| r.starts_from(id) && kind.map_or(true, |k| r.is_kind(k)))
            .filter_map(|r| self.nodes.get(r.target.as_str()))
            .collect()
    }

    /// Follow exactly one relation of `kind` in `direction` from `id`
    ///
    /// Relations whose far end no longer resolves to a node are skipped.
    pub fn one_hop(&self, id: &str, direction: Direction, kind: &str) -> Vec<&Node> {
        self.relations
            .iter()
            .filter(|r| r.is_kind(kind))
            .filter_map(|r| match direction {
                Direction::Outgoing if r.starts_from(id) => Some(&r.target),
                Direction::Incoming if r.ends_at(id) => Some(&r.source),
                _ => None,
            })
            .filter_map(|far| self.nodes.get(far.as_str()))
            .collect()
    }

    /// Relations leaving a node, in insertion order
    pub fn outgoing_relations(&self, id: &str) -> Vec<&Relation> {
        self.relations.iter().filter(|r| r.starts_from(id)).collect()
    }

    /// Relations arriving at a node, in insertion order
    pub fn incoming_relations(&self, id: &str) -> Vec<&Relation> {
        self.relations.iter().filter(|r| r.ends_at(id)).collect()
    }

    /// All relations of a kind, in insertion order
    pub fn relations_by_kind(&self, kind: &str) -> Vec<&Relation> {
        self.relations.iter().filter(|r| r.is_kind(kind)).collect()
    }

    /// All nodes, in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// All relations, in insertion order
    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn relation_count(&self) -> usize {
        self.relations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Count nodes and relations per kind
    pub fn statistics(&self) -> GraphStatistics {
        let mut stats = GraphStatistics {
            node_count: self.nodes.len(),
            relation_count: self.relations.len(),
            ..Default::default()
        };
        for node in self.nodes.values() {
            *stats
                .nodes_by_kind
                .entry(node.kind().as_str().to_string())
                .or_insert(0) += 1;
        }
        for relation in &self.relations {
            *stats
                .relations_by_kind
                .entry(relation.kind.as_str().to_string())
                .or_insert(0) += 1;
        }
        stats
    }

    /// Drop all nodes and relations
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.relations.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(nodes: &[&Node]) -> Vec<String> {
        nodes.iter().map(|n| n.id().to_string()).collect()
    }

    fn store_with(ids: &[(&str, &str)]) -> GraphStore {
        let mut store = GraphStore::new();
        for (id, kind) in ids {
            store.add_node(Node::new(*id, *kind, id.to_uppercase())).unwrap();
        }
        store
    }

    #[test]
    fn test_add_and_get_node() {
        let mut store = GraphStore::new();
        store.add_node(Node::new("ep_login", "Endpoint", "Login")).unwrap();

        assert_eq!(store.node_count(), 1);
        let node = store.get_node("ep_login").unwrap();
        assert_eq!(node.label(), "Login");
        assert!(store.get_node("missing").is_none());
    }

    #[test]
    fn test_duplicate_identifier_keeps_first() {
        let mut store = GraphStore::new();
        store.add_node(Node::new("n1", "Endpoint", "First")).unwrap();

        let result = store.add_node(Node::new("n1", "Vulnerability", "Second"));
        assert_eq!(result, Err(GraphError::DuplicateIdentifier(NodeId::new("n1"))));

        let node = store.get_node("n1").unwrap();
        assert_eq!(node.label(), "First");
        assert!(node.is_kind("Endpoint"));
        assert_eq!(store.node_count(), 1);
    }

    #[test]
    fn test_unknown_endpoint() {
        let mut store = store_with(&[("a", "X")]);
        store.add_relation("a", "a", "SELF").unwrap();

        let result = store.add_relation("ghost", "a", "K");
        assert_eq!(result, Err(GraphError::UnknownEndpoint(NodeId::new("ghost"))));

        let result = store.add_relation("a", "ghost", "K");
        assert_eq!(result, Err(GraphError::UnknownEndpoint(NodeId::new("ghost"))));

        assert_eq!(store.relation_count(), 1);
    }

    #[test]
    fn test_remove_node_cascades() {
        let mut store = store_with(&[("a", "X"), ("b", "X"), ("c", "X")]);
        store.add_relation("a", "b", "K").unwrap();
        store.add_relation("b", "c", "K").unwrap();
        store.add_relation("c", "a", "K").unwrap();
        store.add_relation("a", "c", "J").unwrap();

        let removed = store.remove_node("b").unwrap();
        assert_eq!(removed.id().as_str(), "b");
        assert_eq!(store.relation_count(), 2);
        assert!(store.relations().iter().all(|r| !r.touches("b")));

        // Second removal is a no-op
        assert!(store.remove_node("b").is_none());
        assert_eq!(store.relation_count(), 2);
        assert_eq!(store.node_count(), 2);
    }

    #[test]
    fn test_remove_node_keeps_insertion_order() {
        let mut store = store_with(&[("a", "X"), ("b", "X"), ("c", "X"), ("d", "X")]);
        store.remove_node("b");
        let order: Vec<&str> = store.nodes().map(|n| n.id().as_str()).collect();
        assert_eq!(order, vec!["a", "c", "d"]);
    }

    #[test]
    fn test_remove_relation_with_and_without_kind() {
        let mut store = store_with(&[("a", "X"), ("b", "X")]);
        store.add_relation("a", "b", "K").unwrap();
        store.add_relation("a", "b", "J").unwrap();
        store.add_relation("a", "b", "K").unwrap();
        store.add_relation("b", "a", "K").unwrap();

        assert_eq!(store.remove_relation("a", "b", Some("K")), 2);
        assert_eq!(store.relation_count(), 2);
        assert_eq!(store.relations()[0], Relation::new("a", "b", "J"));
        assert_eq!(store.relations()[1], Relation::new("b", "a", "K"));

        assert_eq!(store.remove_relation("a", "b", None), 1);
        assert_eq!(store.remove_relation("a", "b", None), 0);
        assert_eq!(store.relation_count(), 1);
    }

    #[test]
    fn test_parallel_relations() {
        let mut store = store_with(&[("a", "X"), ("b", "X")]);
        store.add_relation("a", "b", "K").unwrap();
        store.add_relation("a", "b", "K").unwrap();

        assert_eq!(ids(&store.neighbors("a", Some("K"))), vec!["b", "b"]);

        store.remove_relation("a", "b", Some("K"));
        assert!(store.neighbors("a", Some("K")).is_empty());
    }

    #[test]
    fn test_find_nodes_by_kind() {
        let store = store_with(&[("v1", "Vulnerability"), ("e1", "Endpoint"), ("v2", "Vulnerability")]);
        assert_eq!(ids(&store.find_nodes_by_kind("Vulnerability")), vec!["v1", "v2"]);
        assert!(store.find_nodes_by_kind("vulnerability").is_empty());
    }

    #[test]
    fn test_find_nodes_by_property() {
        let mut store = GraphStore::new();
        store
            .add_node(Node::new("e1", "Endpoint", "Login").with_property("path", "/login"))
            .unwrap();
        store
            .add_node(Node::new("e2", "Endpoint", "Cart").with_property("path", "/cart"))
            .unwrap();
        store.add_node(Node::new("p1", "Parameter", "id")).unwrap();

        let found = store.find_nodes_by_property("path", &"/cart".into());
        assert_eq!(ids(&found), vec!["e2"]);
        assert!(store.find_nodes_by_property("missing", &"/cart".into()).is_empty());
        assert!(store.find_nodes_by_property("path", &PropertyValue::Integer(1)).is_empty());
    }

    #[test]
    fn test_neighbors_filter() {
        let mut store = store_with(&[("a", "X"), ("b", "X"), ("c", "X")]);
        store.add_relation("a", "c", "K").unwrap();
        store.add_relation("a", "b", "J").unwrap();
        store.add_relation("b", "a", "K").unwrap();

        assert_eq!(ids(&store.neighbors("a", None)), vec!["c", "b"]);
        assert_eq!(ids(&store.neighbors("a", Some("J"))), vec!["b"]);
        assert!(store.neighbors("c", None).is_empty());
        assert!(store.neighbors("ghost", None).is_empty());
    }

    #[test]
    fn test_one_hop_directions() {
        let mut store = store_with(&[("v1", "V"), ("v2", "V"), ("e", "E")]);
        store.add_relation("v2", "e", "at").unwrap();
        store.add_relation("v1", "e", "at").unwrap();
        store.add_relation("v1", "e", "other").unwrap();

        assert_eq!(ids(&store.one_hop("e", Direction::Incoming, "at")), vec!["v2", "v1"]);
        assert_eq!(ids(&store.one_hop("v1", Direction::Outgoing, "at")), vec!["e"]);
        assert!(store.one_hop("e", Direction::Outgoing, "at").is_empty());
    }

    #[test]
    fn test_relation_views() {
        let mut store = store_with(&[("a", "X"), ("b", "X")]);
        store.add_relation("a", "b", "K").unwrap();
        store.add_relation("b", "a", "J").unwrap();

        assert_eq!(store.outgoing_relations("a").len(), 1);
        assert_eq!(store.incoming_relations("a").len(), 1);
        assert_eq!(store.relations_by_kind("J")[0].source.as_str(), "b");
    }

    #[test]
    fn test_statistics() {
        let mut store = store_with(&[("v1", "Vulnerability"), ("e1", "Endpoint"), ("v2", "Vulnerability")]);
        store.add_relation("v1", "e1", "at").unwrap();
        store.add_relation("v2", "e1", "at").unwrap();

        let stats = store.statistics();
        assert_eq!(stats.node_count, 3);
        assert_eq!(stats.relation_count, 2);
        assert_eq!(stats.nodes_by_kind.get("Vulnerability"), Some(&2));
        assert_eq!(stats.nodes_by_kind.keys().next().map(|k| k.as_str()), Some("Vulnerability"));
        assert_eq!(stats.relations_by_kind.get("at"), Some(&2));
    }

    #[test]
    fn test_clear() {
        let mut store = store_with(&[("a", "X"), ("b", "X")]);
        store.add_relation("a", "b", "K").unwrap();

        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.relation_count(), 0);
    }

    #[test]
    fn test_get_node_mut() {
        let mut store = store_with(&[("e1", "Endpoint")]);
        if let Some(node) = store.get_node_mut("e1") {
            node.set_property("path", "/login");
        }
        assert_eq!(
            store.get_node("e1").unwrap().get_property("path"),
            Some(&PropertyValue::from("/login"))
        );
    }
}
