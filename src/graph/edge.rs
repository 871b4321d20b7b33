//! Render-ready graph link
//!
//! Links reference nodes by composite id. Rendering surfaces sometimes
//! replace the endpoint ids with the node objects themselves, so endpoints
//! deserialize from either a bare id string or an `{ "id": .. }` wrapper.
//! They always serialize as bare strings.

use serde::{Deserialize, Deserializer, Serialize};

/// A directed link in the render-ready snapshot
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GraphLink {
    /// Composite id of the source node
    #[serde(deserialize_with = "endpoint_id")]
    pub source: String,

    /// Composite id of the target node
    #[serde(deserialize_with = "endpoint_id")]
    pub target: String,

    /// Relationship type (e.g., "HAS_WORD")
    #[serde(rename = "type")]
    pub link_type: String,
}

impl GraphLink {
    /// Create a new link
    pub fn new(source: impl Into<String>, target: impl Into<String>, link_type: impl Into<String>) -> Self {
        GraphLink {
            source: source.into(),
            target: target.into(),
            link_type: link_type.into(),
        }
    }
}

/// Endpoint as handed back by a rendering surface
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LinkEndpoint {
    /// Bare composite id
    Id(String),
    /// Node object (or any object) carrying an `id` field
    Wrapped { id: String },
}

impl LinkEndpoint {
    pub fn id(&self) -> &str {
        match self {
            LinkEndpoint::Id(id) => id,
            LinkEndpoint::Wrapped { id } => id,
        }
    }

    pub fn into_id(self) -> String {
        match self {
            LinkEndpoint::Id(id) | LinkEndpoint::Wrapped { id } => id,
        }
    }
}

fn endpoint_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    LinkEndpoint::deserialize(deserializer).map(LinkEndpoint::into_id)
}
