//! Normalization of store-native scalar encodings
//!
//! The store splits 64-bit integers into two 32-bit words,
//! `{ "low": .., "high": .. }`. Normalization walks a JSON value and replaces
//! every such object with the reconstructed integer. Everything else is left
//! in place, so running it twice is the same as running it once.

use super::property::PropertyMap;
use serde_json::{Map, Value};

/// Reconstruct a 64-bit integer from its two 32-bit words
///
/// `high` carries the signed upper half and `low` the lower 32 bits, as the
/// store encodes them. Either word may arrive in signed or unsigned 32-bit
/// form. Returns `None` when a word does not fit in 32 bits.
pub fn two_word_to_i64(low: i64, high: i64) -> Option<i64> {
    let low = word_bits(low)?;
    let high = word_bits(high)?;
    Some((((high as u64) << 32) | low as u64) as i64)
}

fn word_bits(word: i64) -> Option<u32> {
    if (i32::MIN as i64..=u32::MAX as i64).contains(&word) {
        Some(word as u32)
    } else {
        None
    }
}

fn as_two_word(map: &Map<String, Value>) -> Option<i64> {
    let low = map.get("low")?.as_i64()?;
    let high = map.get("high")?.as_i64()?;
    two_word_to_i64(low, high)
}

/// Normalize a value, returning the normalized copy
pub fn normalize(mut value: Value) -> Value {
    normalize_in_place(&mut value);
    value
}

/// Normalize a value in place, recursing through objects and arrays
///
/// Children are normalized before their parent is checked, so an object
/// whose words only become integers after normalization is still collapsed
/// in the same pass.
pub fn normalize_in_place(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for child in map.values_mut() {
                normalize_in_place(child);
            }
        }
        Value::Array(items) => {
            for item in items.iter_mut() {
                normalize_in_place(item);
            }
            return;
        }
        _ => return,
    }

    let replacement = match value {
        Value::Object(map) => as_two_word(map),
        _ => None,
    };
    if let Some(int) = replacement {
        *value = Value::from(int);
    }
}

/// Normalize every value of a property map
pub fn normalize_properties(properties: &mut PropertyMap) {
    for value in properties.values_mut() {
        normalize_in_place(value);
    }
}
