//! Visual encoding for the rendering surface
//!
//! Maps each node to a color (by type) and a radius (fixed per type, or a
//! log-scaled magnitude for words). The rendering surface reads these at
//! draw time; nothing here draws.

use crate::graph::property::as_magnitude;
use crate::graph::{GraphLink, GraphNode, GraphSnapshot, FORM_TYPE, NAME_TYPE, ROOT_TYPE, WORD_TYPE};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Color of root nodes
pub const ROOT_COLOR: &str = "green";
/// Color of word nodes
pub const WORD_COLOR: &str = "red";
/// Color of form nodes
pub const FORM_COLOR: &str = "blue";
/// Color of corpus-item nodes
pub const NAME_COLOR: &str = "gold";
/// Color of any other node type
pub const DEFAULT_COLOR: &str = "gray";

/// Color for a normalized node type
pub fn node_color(node_type: &str) -> &'static str {
    match node_type {
        ROOT_TYPE => ROOT_COLOR,
        WORD_TYPE => WORD_COLOR,
        FORM_TYPE => FORM_COLOR,
        NAME_TYPE => NAME_COLOR,
        _ => DEFAULT_COLOR,
    }
}

/// Clamped logarithmic scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LogScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Map a value into the range
    ///
    /// Values at or below the domain start (including non-positive values)
    /// map to the range start; values at or above the domain end map to the
    /// range end. A domain with no width maps everything to the range start.
    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if !(d1 > d0) || !(value > d0) {
            return r0;
        }
        if value >= d1 {
            return r1;
        }
        let t = (value.ln() - d0.ln()) / (d1.ln() - d0.ln());
        r0 + t * (r1 - r0)
    }
}

/// Render sizing parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Word property that drives the word radius
    pub magnitude_property: String,

    /// Radius of root nodes
    pub root_radius: f64,

    /// Radius of every type without its own rule
    pub default_radius: f64,

    /// Smallest word radius
    pub word_radius_min: f64,

    /// Largest word radius
    pub word_radius_max: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            magnitude_property: "frequency".to_string(),
            root_radius: 12.0,
            default_radius: 5.0,
            word_radius_min: 3.0,
            word_radius_max: 8.0,
        }
    }
}

/// Color and radius of one node
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VisualEncoding {
    pub color: &'static str,
    pub radius: f64,
}

/// Per-node draw attributes for a whole snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeVisual {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub color: &'static str,
    pub radius: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

/// Maps nodes to visual attributes
///
/// The word size scale depends on the largest magnitude among the word
/// nodes, so an adapter is built for one snapshot's node list.
#[derive(Debug, Clone)]
pub struct RenderAdapter {
    config: RenderConfig,
    word_scale: LogScale,
}

impl RenderAdapter {
    /// Create an adapter for a node list with the default sizing
    pub fn new(nodes: &[GraphNode]) -> Self {
        Self::with_config(nodes, RenderConfig::default())
    }

    /// Create an adapter for a node list with custom sizing
    pub fn with_config(nodes: &[GraphNode], config: RenderConfig) -> Self {
        let max_magnitude = nodes
            .iter()
            .filter(|n| n.is_type(WORD_TYPE))
            .filter_map(|n| n.get_property(&config.magnitude_property).and_then(as_magnitude))
            .fold(1.0_f64, f64::max);

        let word_scale = LogScale::new(
            (1.0, max_magnitude),
            (config.word_radius_min, config.word_radius_max),
        );
        Self { config, word_scale }
    }

    pub fn word_scale(&self) -> &LogScale {
        &self.word_scale
    }

    /// Radius of one node
    pub fn radius(&self, node: &GraphNode) -> f64 {
        match node.node_type.as_str() {
            ROOT_TYPE => self.config.root_radius,
            WORD_TYPE => {
                let magnitude = node
                    .get_property(&self.config.magnitude_property)
                    .and_then(as_magnitude)
                    .unwrap_or(0.0);
                self.word_scale.scale(magnitude)
            }
            _ => self.config.default_radius,
        }
    }

    /// Color and radius of one node
    pub fn encode(&self, node: &GraphNode) -> VisualEncoding {
        VisualEncoding {
            color: node_color(&node.node_type),
            radius: self.radius(node),
        }
    }

    /// Draw attributes for every node of a snapshot, in node order
    pub fn encode_snapshot(&self, snapshot: &GraphSnapshot) -> Vec<NodeVisual> {
        snapshot
            .nodes
            .iter()
            .map(|node| {
                let encoding = self.encode(node);
                NodeVisual {
                    id: node.id.clone(),
                    node_type: node.node_type.clone(),
                    color: encoding.color,
                    radius: encoding.radius,
                    x: node.fx,
                    y: node.fy,
                }
            })
            .collect()
    }
}

/// Resolve a link's endpoints to their nodes
pub fn resolve_link<'a>(
    link: &GraphLink,
    index: &HashMap<&str, &'a GraphNode>,
) -> Option<(&'a GraphNode, &'a GraphNode)> {
    let source = index.get(link.source.as_str())?;
    let target = index.get(link.target.as_str())?;
    Some((*source, *target))
}
