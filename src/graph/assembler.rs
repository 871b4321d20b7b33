//! Graph assembly: one build pass from a page of query rows to a snapshot
//!
//! A page holds rows of named bindings, as the query engine returns them.
//! The assembly plan says which columns carry nodes (and under which id
//! property and type label) and which carry relationships. All nodes of the
//! page are registered before any relationship is resolved.

use super::edge::GraphLink;
use super::link::{LinkBuilder, LinkOutcome};
use super::node::GraphNode;
use super::record::{RawNodeRecord, RawRelationshipRecord};
use super::registry::{IdentityMap, NodeOutcome, NodeRegistry, RegistryOptions};
use super::snapshot::GraphSnapshot;
use crate::error::LexigraphResult;
use indexmap::IndexMap;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// One query-result row: column name -> bound value
pub type Row = IndexMap<String, Value>;

/// One batch of query-result rows
///
/// Deserializes from either `{ "rows": [..] }` or a bare row array, and
/// always serializes in the wrapped form.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecordPage {
    pub rows: Vec<Row>,
}

impl<'de> Deserialize<'de> for RecordPage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = match Value::deserialize(deserializer)? {
            rows @ Value::Array(_) => rows,
            Value::Object(mut map) => map.remove("rows").unwrap_or_else(|| Value::Array(Vec::new())),
            other => {
                return Err(de::Error::custom(format!(
                    "expected a row array or an object with rows, got {}",
                    other
                )))
            }
        };
        let rows: Vec<Row> = serde_json::from_value(rows).map_err(de::Error::custom)?;
        Ok(Self::new(rows))
    }
}

impl RecordPage {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Parse a page from JSON, either `{ "rows": [..] }` or a bare row array
    pub fn from_json_str(json: &str) -> LexigraphResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl From<Vec<Row>> for RecordPage {
    fn from(rows: Vec<Row>) -> Self {
        Self::new(rows)
    }
}

/// A column that carries node records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeBinding {
    /// Column name in the row
    pub column: String,

    /// Property holding the node's id value
    pub id_property: String,

    /// Type label to use instead of the record's own label
    #[serde(default)]
    pub type_label: Option<String>,
}

/// A column that carries relationship records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkBinding {
    /// Column name in the row
    pub column: String,

    /// Type used when the relationship has none
    #[serde(default = "default_link_type")]
    pub default_type: String,
}

fn default_link_type() -> String {
    "RELATED".to_string()
}

/// Which columns to read and how
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssemblyPlan {
    pub nodes: Vec<NodeBinding>,
    pub links: Vec<LinkBinding>,
}

impl Default for AssemblyPlan {
    /// Root/word/form/corpus-item columns as the lexicon queries return them
    fn default() -> Self {
        AssemblyPlan::new()
            .node("root", "root_id", Some("Root"))
            .node("word", "word_id", Some("Word"))
            .node("form", "form_id", Some("Form"))
            .node("item", "item_id", Some("CorpusItem"))
            .link("rel", "RELATED")
    }
}

impl AssemblyPlan {
    /// Create an empty plan
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            links: Vec::new(),
        }
    }

    /// Add a node column
    pub fn node(mut self, column: impl Into<String>, id_property: impl Into<String>, type_label: Option<&str>) -> Self {
        self.nodes.push(NodeBinding {
            column: column.into(),
            id_property: id_property.into(),
            type_label: type_label.map(str::to_string),
        });
        self
    }

    /// Add a relationship column
    pub fn link(mut self, column: impl Into<String>, default_type: impl Into<String>) -> Self {
        self.links.push(LinkBinding {
            column: column.into(),
            default_type: default_type.into(),
        });
        self
    }
}

/// Per-build counters; drops never become errors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildStats {
    pub rows: usize,
    pub nodes_added: usize,
    pub nodes_absent: usize,
    pub nodes_missing_id: usize,
    pub nodes_missing_type: usize,
    pub nodes_duplicate: usize,
    pub links_added: usize,
    pub links_absent: usize,
    pub links_missing_endpoint: usize,
    pub links_dangling: usize,
}

impl BuildStats {
    fn record_node(&mut self, outcome: NodeOutcome) {
        match outcome {
            NodeOutcome::Added => self.nodes_added += 1,
            NodeOutcome::Absent => self.nodes_absent += 1,
            NodeOutcome::MissingId => self.nodes_missing_id += 1,
            NodeOutcome::MissingType => self.nodes_missing_type += 1,
            NodeOutcome::Duplicate => self.nodes_duplicate += 1,
        }
    }

    fn record_link(&mut self, outcome: LinkOutcome) {
        match outcome {
            LinkOutcome::Added => self.links_added += 1,
            LinkOutcome::Absent => self.links_absent += 1,
            LinkOutcome::MissingEndpoint => self.links_missing_endpoint += 1,
            LinkOutcome::Dangling => self.links_dangling += 1,
        }
    }

    /// Records that were given but produced nothing
    pub fn dropped(&self) -> usize {
        self.nodes_missing_id + self.nodes_missing_type + self.nodes_duplicate + self.links_missing_endpoint + self.links_dangling
    }
}

/// Orchestrates one build pass
#[derive(Debug, Clone, Default)]
pub struct GraphAssembler {
    registry: NodeRegistry,
    links: LinkBuilder,
}

impl GraphAssembler {
    /// Create an assembler with the default registration policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an assembler with a custom registration policy
    pub fn with_options(options: RegistryOptions) -> Self {
        Self {
            registry: NodeRegistry::with_options(options),
            links: LinkBuilder::new(),
        }
    }

    /// Build a snapshot from one page
    pub fn build(&self, page: &RecordPage, plan: &AssemblyPlan) -> GraphSnapshot {
        self.build_with_stats(page, plan).0
    }

    /// Build a snapshot from one page and report what was dropped
    pub fn build_with_stats(&self, page: &RecordPage, plan: &AssemblyPlan) -> (GraphSnapshot, BuildStats) {
        let mut nodes: Vec<GraphNode> = Vec::new();
        let mut links: Vec<GraphLink> = Vec::new();
        let mut identity_map = IdentityMap::new();
        let mut stats = BuildStats {
            rows: page.len(),
            ..Default::default()
        };

        for row in &page.rows {
            for binding in &plan.nodes {
                for raw in bound_records(row, &binding.column, RawNodeRecord::from_value) {
                    let outcome = self.registry.add_node(
                        raw.as_ref(),
                        &binding.id_property,
                        binding.type_label.as_deref(),
                        &mut nodes,
                        &mut identity_map,
                    );
                    stats.record_node(outcome);
                }
            }
        }

        for row in &page.rows {
            for binding in &plan.links {
                for raw in bound_records(row, &binding.column, RawRelationshipRecord::from_value) {
                    let outcome = self
                        .links
                        .add_link(raw.as_ref(), &identity_map, &mut links, &binding.default_type);
                    stats.record_link(outcome);
                }
            }
        }

        debug!(
            "Assembled snapshot: {} nodes, {} links from {} rows ({} dropped)",
            nodes.len(),
            links.len(),
            stats.rows,
            stats.dropped()
        );

        (GraphSnapshot { nodes, links }, stats)
    }
}

/// Records bound to a column; arrays (collected lists) yield each element.
/// Missing, null or unparseable values yield a single `None`.
fn bound_records<T>(row: &Row, column: &str, parse: fn(&Value) -> Option<T>) -> Vec<Option<T>> {
    match row.get(column) {
        Some(Value::Array(items)) => items.iter().map(parse).collect(),
        Some(value) => vec![parse(value)],
        None => vec![None],
    }
}
