//! Link construction from raw relationship records

use super::edge::GraphLink;
use super::record::RawRelationshipRecord;
use super::registry::IdentityMap;
use tracing::debug;

/// What happened to one `add_link` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkOutcome {
    /// Link appended
    Added,
    /// No record was given
    Absent,
    /// Start or end handle missing from the record
    MissingEndpoint,
    /// An endpoint was never registered in this build pass
    Dangling,
}

/// Builds graph links by resolving endpoints through an identity map
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkBuilder;

impl LinkBuilder {
    pub fn new() -> Self {
        LinkBuilder
    }

    /// Resolve one raw relationship and append the resulting link
    ///
    /// Relationships without a type take `default_type`. Links whose
    /// endpoints are not in `identity_map` are dropped.
    pub fn add_link(
        &self,
        raw_relationship: Option<&RawRelationshipRecord>,
        identity_map: &IdentityMap,
        links: &mut Vec<GraphLink>,
        default_type: &str,
    ) -> LinkOutcome {
        let Some(raw) = raw_relationship else {
            return LinkOutcome::Absent;
        };

        let relation_type = raw
            .rel_type
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(default_type);

        let (Some(start), Some(end)) = (&raw.start, &raw.end) else {
            debug!("Skipping {} relationship: endpoint handle missing", relation_type);
            return LinkOutcome::MissingEndpoint;
        };

        match (identity_map.get(start), identity_map.get(end)) {
            (Some(source), Some(target)) => {
                links.push(GraphLink::new(source, target, relation_type));
                LinkOutcome::Added
            }
            _ => {
                debug!(
                    "Dropping {} relationship {} -> {}: endpoint not registered",
                    relation_type, start, end
                );
                LinkOutcome::Dangling
            }
        }
    }
}
