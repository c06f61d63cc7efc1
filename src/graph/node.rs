//! Node implementation for the knowledge graph
//!
//! A node is an entity of the security domain: an application, an endpoint,
//! a parameter, a vulnerability, an impact, an attack or a tool.

use super::property::{PropertyMap, PropertyValue};
use super::types::{NodeId, NodeKind};
use serde::{Deserialize, Serialize};

/// A node in the knowledge graph
///
/// Nodes have:
/// - A unique ID, fixed at creation
/// - A kind (open string tag)
/// - A human-readable label
/// - Properties (key-value pairs, possibly empty)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    id: NodeId,
    kind: NodeKind,
    label: String,
    properties: PropertyMap,
}

impl Node {
    /// Create a new node without properties
    pub fn new(id: impl Into<NodeId>, kind: impl Into<NodeKind>, label: impl Into<String>) -> Self {
        Node {
            id: id.into(),
            kind: kind.into(),
            label: label.into(),
            properties: PropertyMap::new(),
        }
    }

    /// Create a new node with properties
    pub fn new_with_properties(
        id: impl Into<NodeId>,
        kind: impl Into<NodeKind>,
        label: impl Into<String>,
        properties: PropertyMap,
    ) -> Self {
        Node {
            id: id.into(),
            kind: kind.into(),
            label: label.into(),
            properties,
        }
    }

    /// Builder-style property setter
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    /// Check if node is of a specific kind
    pub fn is_kind(&self, kind: &str) -> bool {
        self.kind.as_str() == kind
    }

    /// Replace the display label
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Set a property value, returning the previous one
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Option<PropertyValue> {
        self.properties.insert(key.into(), value.into())
    }

    /// Get a property value
    pub fn get_property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    /// Remove a property
    pub fn remove_property(&mut self, key: &str) -> Option<PropertyValue> {
        self.properties.shift_remove(key)
    }

    /// Check if property exists
    pub fn has_property(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Get number of properties
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }
}
