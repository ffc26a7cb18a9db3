use itertools::Itertools;
use serde_json::{Map, Value};

use crate::key_order::KeyOrder;

#[derive(Debug)]
pub struct Reordered {
    pub document: Map<String, Value>,
    /// Keys not in the key order, in the order they were appended.
    pub unknown_keys: Vec<String>,
}

/// Reorder the top-level keys of `document`: keys found in `order` come first, in
/// `order`'s sequence, followed by every other key sorted by code point. Values are
/// moved, never modified.
pub fn reorder(mut document: Map<String, Value>, order: &KeyOrder) -> Reordered {
    let mut sorted = Map::with_capacity(document.len());
    for key in order.iter() {
        if let Some(value) = document.remove(key) {
            sorted.insert(key.to_string(), value);
        }
    }

    // Only unknown keys remain.
    let mut unknown_keys = Vec::with_capacity(document.len());
    for (key, value) in document.into_iter().sorted_by(|(a, _), (b, _)| a.cmp(b)) {
        debug_assert!(!order.contains(&key));
        unknown_keys.push(key.clone());
        sorted.insert(key, value);
    }

    Reordered {
        document: sorted,
        unknown_keys,
    }
}
