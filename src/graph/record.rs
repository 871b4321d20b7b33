//! Raw records handed in by the query engine
//!
//! These mirror the shapes the store driver returns for nodes and
//! relationships. Property values may still contain two-word integers;
//! normalization happens when a record is registered.

use super::property::PropertyMap;
use super::types::IdentityHandle;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A node record as returned by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawNodeRecord {
    /// Session-scoped identity handle
    pub identity: IdentityHandle,

    /// Store labels (e.g. "Root", "Word", "CorpusItem")
    #[serde(default)]
    pub labels: Vec<String>,

    /// Raw property mapping
    #[serde(default)]
    pub properties: PropertyMap,
}

impl RawNodeRecord {
    /// Create a node record with a single label
    pub fn new(identity: impl Into<IdentityHandle>, label: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            labels: vec![label.into()],
            properties: PropertyMap::new(),
        }
    }

    /// Builder-style property setter
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// First store label, if any
    pub fn label(&self) -> Option<&str> {
        self.labels.first().map(|l| l.as_str())
    }

    /// Parse a bound query value as a node record
    pub fn from_value(value: &Value) -> Option<Self> {
        Self::deserialize(value).ok()
    }
}

/// A relationship record as returned by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRelationshipRecord {
    /// Session-scoped identity handle of the relationship itself
    #[serde(default)]
    pub identity: Option<IdentityHandle>,

    /// Relationship type label
    #[serde(default, rename = "type")]
    pub rel_type: Option<String>,

    /// Identity handle of the start node
    #[serde(default)]
    pub start: Option<IdentityHandle>,

    /// Identity handle of the end node
    #[serde(default)]
    pub end: Option<IdentityHandle>,

    /// Raw property mapping
    #[serde(default)]
    pub properties: PropertyMap,
}

impl RawRelationshipRecord {
    /// Create a relationship record between two handles
    pub fn new(
        rel_type: impl Into<String>,
        start: impl Into<IdentityHandle>,
        end: impl Into<IdentityHandle>,
    ) -> Self {
        Self {
            identity: None,
            rel_type: Some(rel_type.into()),
            start: Some(start.into()),
            end: Some(end.into()),
            properties: PropertyMap::new(),
        }
    }

    /// Parse a bound query value as a relationship record
    pub fn from_value(value: &Value) -> Option<Self> {
        Self::deserialize(value).ok()
    }
}
