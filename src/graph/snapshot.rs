//! Graph snapshot: the unit of output from assembly and input to layout

use super::edge::GraphLink;
use super::node::GraphNode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Deduplicated, typed nodes plus the links between them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

impl GraphSnapshot {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of links
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.links.is_empty()
    }

    /// Find a node by composite id
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Index of nodes by composite id; on duplicate ids the first node wins
    pub fn node_index(&self) -> HashMap<&str, &GraphNode> {
        let mut index = HashMap::with_capacity(self.nodes.len());
        for node in &self.nodes {
            index.entry(node.id.as_str()).or_insert(node);
        }
        index
    }

    /// Nodes of the given normalized type, in list order
    pub fn nodes_of_type<'a>(&'a self, node_type: &'a str) -> impl Iterator<Item = &'a GraphNode> + 'a {
        self.nodes.iter().filter(move |n| n.is_type(node_type))
    }

    /// Check that every link references ids present in this snapshot
    pub fn links_resolve(&self) -> bool {
        let index = self.node_index();
        self.links
            .iter()
            .all(|l| index.contains_key(l.source.as_str()) && index.contains_key(l.target.as_str()))
    }
}
