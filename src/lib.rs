//! Lexigraph
//!
//! Builds render-ready graph snapshots of an Arabic lexicon (roots, words,
//! word forms and corpus items) from property-graph query results, and lays
//! them out with a static radial scheme.
//!
//! # Pipeline
//!
//! - Raw records -> `GraphAssembler` (normalization, node registration,
//!   link resolution) -> `GraphSnapshot`
//! - `GraphSnapshot` -> `StaticRadialLayout` -> positioned snapshot
//! - positioned snapshot -> `RenderAdapter` -> color and radius per node
//!
//! Building, layout and rendering never fail. Incomplete records degrade to
//! fewer nodes or links; `BuildStats` reports what was dropped.
//!
//! ## Example Usage
//!
//! ```rust
//! use lexigraph::graph::{AssemblyPlan, GraphAssembler, RecordPage};
//! use lexigraph::layout::StaticRadialLayout;
//! use lexigraph::render::RenderAdapter;
//!
//! let page = RecordPage::from_json_str(r#"[{
//!     "root": {"identity": "n1", "labels": ["Root"], "properties": {"root_id": 5}},
//!     "word": {"identity": "n2", "labels": ["Word"], "properties": {"word_id": 10}},
//!     "rel": {"type": "HAS_WORD", "start": "n1", "end": "n2"}
//! }]"#).unwrap();
//!
//! let mut snapshot = GraphAssembler::new().build(&page, &AssemblyPlan::default());
//! assert_eq!(snapshot.node_count(), 2);
//! assert_eq!(snapshot.links[0].source, "root-5");
//!
//! StaticRadialLayout::new().layout(&mut snapshot.nodes, 800.0, 600.0);
//! assert_eq!(snapshot.nodes[0].position(), Some((400.0, 300.0)));
//!
//! let visuals = RenderAdapter::new(&snapshot.nodes).encode_snapshot(&snapshot);
//! assert_eq!(visuals[0].color, "green");
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod graph;
pub mod layout;
pub mod render;

// Re-export main types for convenience
pub use config::LexigraphConfig;
pub use error::{LexigraphError, LexigraphResult};
pub use graph::{
    AssemblyPlan, BuildStats, GraphAssembler, GraphLink, GraphNode, GraphSnapshot, IdentityHandle,
    PropertyMap, RawNodeRecord, RawRelationshipRecord, RecordPage, RegistryOptions,
};
pub use layout::{RadialLayoutConfig, StaticRadialLayout};
pub use render::{NodeVisual, RenderAdapter, RenderConfig, VisualEncoding};

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
