//! Core knowledge graph implementation
//!
//! This module implements the graph data model with:
//! - Nodes with a unique id, an open kind tag, a label and scalar properties
//! - Directed relations with an open kind tag
//! - Parallel relations between the same nodes
//! - One-hop, kind-filtered traversals for the security domain

pub mod domain;
pub mod kinds;
pub mod node;
pub mod property;
pub mod relation;
pub mod store;
pub mod types;

// Re-export main types
pub use node::Node;
pub use property::{PropertyMap, PropertyValue};
pub use relation::Relation;
pub use store::{GraphError, GraphResult, GraphStatistics, GraphStore};
pub use types::{Direction, NodeId, NodeKind, RelationKind};
