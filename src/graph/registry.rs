//! Node registration and identity tracking
//!
//! Turns raw node records into `GraphNode`s with composite ids and records
//! which identity handle produced which node, so relationship endpoints can
//! be resolved later in the same build pass.

use super::node::GraphNode;
use super::normalize::normalize_properties;
use super::projection::ProjectionConfig;
use super::property::{id_fragment, is_truthy, is_zero};
use super::record::RawNodeRecord;
use super::types::{normalize_type, IdentityHandle};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Identity handle -> composite id of the node built from it
///
/// Scoped to one build pass and dropped with it.
#[derive(Debug, Default)]
pub struct IdentityMap {
    entries: HashMap<IdentityHandle, String>,
}

impl IdentityMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a handle; returns the composite id it previously mapped to
    pub fn insert(&mut self, handle: IdentityHandle, node_id: String) -> Option<String> {
        self.entries.insert(handle, node_id)
    }

    /// Composite id of the node registered under a handle
    pub fn get(&self, handle: &IdentityHandle) -> Option<&str> {
        self.entries.get(handle).map(|s| s.as_str())
    }

    pub fn contains(&self, handle: &IdentityHandle) -> bool {
        self.entries.contains_key(handle)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Registration policy
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryOptions {
    /// Skip a record whose identity handle is already registered.
    /// Off by default: repeats append a duplicate node and remap the handle.
    pub strict_identity: bool,

    /// Accept numeric zero as an id-property value.
    /// Off by default: zero is treated like a missing id.
    pub accept_zero_id: bool,

    /// Language projection applied to node properties
    pub projection: Option<ProjectionConfig>,
}

/// What happened to one `add_node` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeOutcome {
    /// Node appended and handle recorded
    Added,
    /// No record was given
    Absent,
    /// Id property missing or falsy
    MissingId,
    /// No type label given and the record carries none
    MissingType,
    /// Handle already registered (strict mode only)
    Duplicate,
}

/// Builds graph nodes from raw node records
#[derive(Debug, Clone, Default)]
pub struct NodeRegistry {
    options: RegistryOptions,
}

impl NodeRegistry {
    /// Create a registry with the default policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with a custom policy
    pub fn with_options(options: RegistryOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RegistryOptions {
        &self.options
    }

    /// Register one raw node
    ///
    /// `type_label` overrides the record's own label; without it the first
    /// store label is used. The node is appended to `nodes` and its handle
    /// recorded in `identity_map`.
    pub fn add_node(
        &self,
        raw_node: Option<&RawNodeRecord>,
        id_property: &str,
        type_label: Option<&str>,
        nodes: &mut Vec<GraphNode>,
        identity_map: &mut IdentityMap,
    ) -> NodeOutcome {
        let Some(raw_node) = raw_node else {
            return NodeOutcome::Absent;
        };

        if self.options.strict_identity && identity_map.contains(&raw_node.identity) {
            debug!("Skipping node {}: identity already registered", raw_node.identity);
            return NodeOutcome::Duplicate;
        }

        let mut properties = raw_node.properties.clone();
        normalize_properties(&mut properties);
        if let Some(projection) = &self.options.projection {
            projection.project(&mut properties);
        }

        let id_value = match properties.get(id_property) {
            Some(v) if is_truthy(v) || (self.options.accept_zero_id && is_zero(v)) => id_fragment(v),
            _ => {
                debug!(
                    "Skipping node {}: id property '{}' missing or falsy",
                    raw_node.identity, id_property
                );
                return NodeOutcome::MissingId;
            }
        };

        let node_type = normalize_type(
            type_label
                .filter(|l| !l.is_empty())
                .or_else(|| raw_node.label())
                .unwrap_or_default(),
        );
        if node_type.is_empty() {
            debug!("Skipping node {}: no type label", raw_node.identity);
            return NodeOutcome::MissingType;
        }
        let composite_id = format!("{}-{}", node_type, id_value);

        identity_map.insert(raw_node.identity.clone(), composite_id.clone());
        nodes.push(GraphNode::new(composite_id, node_type, properties));
        NodeOutcome::Added
    }
}
