//! Core type definitions shared by the graph pipeline

use super::normalize::two_word_to_i64;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Normalized type of a lexical root
pub const ROOT_TYPE: &str = "root";
/// Normalized type of a word
pub const WORD_TYPE: &str = "word";
/// Normalized type of a word form
pub const FORM_TYPE: &str = "form";
/// Normalized type of a corpus item (stored under the `CorpusItem` label)
pub const NAME_TYPE: &str = "name";

/// Opaque, store-assigned reference to a node or relationship
///
/// Only stable within one query session. Distinct from any id property the
/// record carries. Accepts a string, an integer or a two-word integer on
/// input and always holds the canonical string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IdentityHandle(String);

impl IdentityHandle {
    pub fn new(handle: impl Into<String>) -> Self {
        IdentityHandle(handle.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IdentityHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for IdentityHandle {
    fn from(s: String) -> Self {
        IdentityHandle(s)
    }
}

impl From<&str> for IdentityHandle {
    fn from(s: &str) -> Self {
        IdentityHandle(s.to_string())
    }
}

impl From<i64> for IdentityHandle {
    fn from(i: i64) -> Self {
        IdentityHandle(i.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum HandleRepr {
    Text(String),
    Signed(i64),
    Unsigned(u64),
    TwoWord { low: i64, high: i64 },
}

impl<'de> Deserialize<'de> for IdentityHandle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match HandleRepr::deserialize(deserializer)? {
            HandleRepr::Text(s) => Ok(IdentityHandle(s)),
            HandleRepr::Signed(i) => Ok(IdentityHandle(i.to_string())),
            HandleRepr::Unsigned(u) => Ok(IdentityHandle(u.to_string())),
            HandleRepr::TwoWord { low, high } => two_word_to_i64(low, high)
                .map(IdentityHandle::from)
                .ok_or_else(|| {
                    serde::de::Error::custom(format!(
                        "identity words out of 32-bit range: low={}, high={}",
                        low, high
                    ))
                }),
        }
    }
}

impl Serialize for IdentityHandle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Normalize a raw store label into a node type
///
/// Lowercases the label and maps `corpusitem` to `name`. Pure and idempotent.
pub fn normalize_type(label: &str) -> String {
    let lowered = label.to_lowercase();
    if lowered == "corpusitem" {
        NAME_TYPE.to_string()
    } else {
        lowered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_type() {
        assert_eq!(normalize_type("Root"), "root");
        assert_eq!(normalize_type("WORD"), "word");
        assert_eq!(normalize_type("Form"), "form");
        assert_eq!(normalize_type("CorpusItem"), "name");
        assert_eq!(normalize_type("Verse"), "verse");
    }

    #[test]
    fn test_normalize_type_idempotent() {
        for label in ["Root", "CorpusItem", "name", "Word", "Mixed_Case"] {
            let once = normalize_type(label);
            assert_eq!(normalize_type(&once), once);
        }
    }

    #[test]
    fn test_identity_handle_from_json() {
        let h: IdentityHandle = serde_json::from_str("\"n1\"").unwrap();
        assert_eq!(h.as_str(), "n1");

        let h: IdentityHandle = serde_json::from_str("42").unwrap();
        assert_eq!(h, IdentityHandle::from(42i64));

        let h: IdentityHandle = serde_json::from_str(r#"{"low": 7, "high": 0}"#).unwrap();
        assert_eq!(h.as_str(), "7");
    }

    #[test]
    fn test_identity_handle_serializes_as_string() {
        let h = IdentityHandle::new("4:abc:12");
        assert_eq!(serde_json::to_string(&h).unwrap(), "\"4:abc:12\"");
        assert_eq!(format!("{}", h), "4:abc:12");
    }
}
