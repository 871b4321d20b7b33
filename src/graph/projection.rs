//! Per-language property projection
//!
//! Lexicon records carry glosses in several languages as sibling properties
//! (`english`, `urdu`, ...). The projection keeps glosses for enabled
//! languages only and leaves every other property alone. The language lists
//! are passed in as configuration rather than read from shared state.

use super::property::PropertyMap;
use serde::{Deserialize, Serialize};

/// Language projection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Every property name that holds a per-language gloss
    pub known_languages: Vec<String>,

    /// Languages whose glosses are kept
    pub enabled_languages: Vec<String>,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            known_languages: vec![
                "english".to_string(),
                "urdu".to_string(),
                "persian".to_string(),
                "turkish".to_string(),
                "malay".to_string(),
            ],
            enabled_languages: vec!["english".to_string()],
        }
    }
}

impl ProjectionConfig {
    /// Create a projection over the given language properties
    pub fn new<K, E, S>(known: K, enabled: E) -> Self
    where
        K: IntoIterator<Item = S>,
        E: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            known_languages: known.into_iter().map(Into::into).collect(),
            enabled_languages: enabled.into_iter().map(Into::into).collect(),
        }
    }

    /// Check whether a property survives projection
    pub fn keeps(&self, key: &str) -> bool {
        !self.known_languages.iter().any(|l| l == key)
            || self.enabled_languages.iter().any(|l| l == key)
    }

    /// Drop glosses of disabled languages; returns how many were dropped
    pub fn project(&self, properties: &mut PropertyMap) -> usize {
        let before = properties.len();
        properties.retain(|key, _| self.keeps(key));
        before - properties.len()
    }
}
