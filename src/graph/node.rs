//! Render-ready graph node
//!
//! A `GraphNode` carries:
//! - A composite id (`"<type>-<idPropertyValue>"`)
//! - A normalized type
//! - All normalized properties of the raw record, flattened on output
//! - An optional fixed position assigned by layout

use super::property::PropertyMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Property keys owned by the node itself; pass-through properties with
/// these names are dropped so serialized nodes never carry duplicate keys
pub const RESERVED_KEYS: [&str; 4] = ["id", "type", "fx", "fy"];

/// A node in the render-ready snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Composite identifier, unique within one snapshot
    pub id: String,

    /// Normalized type (`root`, `word`, `form`, `name`, ...)
    #[serde(rename = "type")]
    pub node_type: String,

    /// Fixed x coordinate, set by layout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fx: Option<f64>,

    /// Fixed y coordinate, set by layout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fy: Option<f64>,

    /// Normalized pass-through properties
    #[serde(flatten)]
    pub properties: PropertyMap,
}

impl GraphNode {
    /// Create a node from its composite id, type and properties
    pub fn new(id: impl Into<String>, node_type: impl Into<String>, mut properties: PropertyMap) -> Self {
        let id: String = id.into();
        for key in RESERVED_KEYS {
            if let Some(value) = properties.shift_remove(key) {
                debug!("Dropping reserved property '{}' = {} on node {}", key, value, id);
            }
        }

        GraphNode {
            id,
            node_type: node_type.into(),
            fx: None,
            fy: None,
            properties,
        }
    }

    /// Check the node's normalized type
    pub fn is_type(&self, node_type: &str) -> bool {
        self.node_type == node_type
    }

    /// Get a property value
    pub fn get_property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// Fixed position, if layout assigned one
    pub fn position(&self) -> Option<(f64, f64)> {
        Some((self.fx?, self.fy?))
    }

    /// Pin the node at a fixed position
    pub fn set_position(&mut self, x: f64, y: f64) {
        self.fx = Some(x);
        self.fy = Some(y);
    }

    /// Drop any fixed position
    pub fn clear_position(&mut self) {
        self.fx = None;
        self.fy = None;
    }
}
