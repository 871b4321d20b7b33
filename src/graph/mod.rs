//! Graph construction pipeline
//!
//! This module turns raw query results into a render-ready snapshot:
//! - Normalization of two-word integers in record properties
//! - Node registration with composite ids and identity tracking
//! - Link construction through the identity map
//! - Page-level assembly into a `GraphSnapshot`

pub mod assembler;
pub mod edge;
pub mod link;
pub mod node;
pub mod normalize;
pub mod projection;
pub mod property;
pub mod record;
pub mod registry;
pub mod snapshot;
pub mod types;

// Re-export main types
pub use assembler::{AssemblyPlan, BuildStats, GraphAssembler, LinkBinding, NodeBinding, RecordPage, Row};
pub use edge::{GraphLink, LinkEndpoint};
pub use link::{LinkBuilder, LinkOutcome};
pub use node::GraphNode;
pub use normalize::{normalize, normalize_in_place, normalize_properties, two_word_to_i64};
pub use projection::ProjectionConfig;
pub use property::PropertyMap;
pub use record::{RawNodeRecord, RawRelationshipRecord};
pub use registry::{IdentityMap, NodeOutcome, NodeRegistry, RegistryOptions};
pub use snapshot::GraphSnapshot;
pub use types::{normalize_type, IdentityHandle, FORM_TYPE, NAME_TYPE, ROOT_TYPE, WORD_TYPE};
