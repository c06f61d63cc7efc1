//! Secgraph
//!
//! A small directed, labeled knowledge graph for cataloguing cybersecurity
//! findings: applications, endpoints, parameters, vulnerabilities and their
//! types, impacts, attacks and tools, joined by typed relations.
//!
//! # Layout
//!
//! - [`graph`]: the store, its data model and the one-hop domain queries
//! - [`export`]: one-way Graphviz DOT export
//! - [`sample`]: a demonstration dataset
//! - [`report`]: plain-text reports over the query API
//! - [`config`]: configuration for the binaries
//!
//! ## Example Usage
//!
//! ```rust
//! use secgraph::graph::{GraphStore, Node};
//! use secgraph::graph::kinds::relation;
//!
//! let mut store = GraphStore::new();
//! store.add_node(Node::new("ep_login", "Endpoint", "Login").with_property("path", "/login")).unwrap();
//! store.add_node(Node::new("vul_1", "Vulnerability", "SQLi in username")).unwrap();
//! store.add_relation("vul_1", "ep_login", relation::LOCATED_AT_ENDPOINT).unwrap();
//!
//! let found = store.vulnerabilities_of_endpoint("ep_login");
//! assert_eq!(found[0].label(), "SQLi in username");
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod export;
pub mod graph;
pub mod report;
pub mod sample;

// Re-export main types for convenience
pub use graph::{
    Direction, GraphError, GraphResult, GraphStatistics, GraphStore, Node, NodeId, NodeKind,
    PropertyMap, PropertyValue, Relation, RelationKind,
};

pub use export::{export_to_dot, render_dot, DotOptions, ExportError, ExportResult};

pub use config::{AppConfig, ConfigError};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.1.0");
    }
}
