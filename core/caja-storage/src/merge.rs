//! Identity-based array merge.
//!
//! Reconciles two candidate copies of the same collection (canonical and
//! legacy) into a deduplicated union. First-seen wins, so after a partial
//! migration the canonical copy of a record shadows the legacy one. This is
//! deliberately an order-preserving union, not a per-record
//! last-write-wins: duplicate ids are collapsed without comparing
//! timestamps.

use serde_json::Value;
use std::collections::HashSet;

/// Merges two candidate collections.
///
/// Returns `None` when neither input is an array (the caller falls back to
/// preferring the primary candidate). A non-array input on one side is
/// treated as an empty array. The result holds all of `primary` in order,
/// then the elements of `secondary` whose identity was not yet seen, in
/// order.
pub fn merge(primary: &Value, secondary: &Value) -> Option<Vec<Value>> {
    if !primary.is_array() && !secondary.is_array() {
        return None;
    }

    let primary_items = primary.as_array().map(Vec::as_slice).unwrap_or(&[]);
    let secondary_items = secondary.as_array().map(Vec::as_slice).unwrap_or(&[]);

    let mut seen = HashSet::new();
    let mut result = Vec::with_capacity(primary_items.len() + secondary_items.len());

    for item in primary_items.iter().chain(secondary_items) {
        if seen.insert(identity(item)) {
            result.push(item.clone());
        }
    }

    Some(result)
}

/// Derives a merge identity for one element: the `id` member when the
/// element is an object carrying one, otherwise the element's full
/// serialized form.
///
/// String ids are rendered raw and every other id value through its JSON
/// serialization, so a numeric `2` and a string `"2"` share an identity —
/// the behavior the historical data was written under.
fn identity(item: &Value) -> String {
    if let Value::Object(map) = item {
        if let Some(id) = map.get("id") {
            let rendered = match id {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            return format!("id:{rendered}");
        }
    }
    item.to_string()
}
