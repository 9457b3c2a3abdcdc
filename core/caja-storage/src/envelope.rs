//! Envelope codec.
//!
//! Canonical entries are stored as `{"data": <value>, "timestamp":
//! "<RFC 3339 UTC>", "version": "1.0"}`. Legacy entries are the bare JSON
//! value with no wrapper; `decode` tells the two apart by the presence of a
//! `data` member.

use serde_json::{json, Value};
use tracing::warn;

/// Current envelope schema version. Advisory for now (only one version
/// exists) but written on every encode so future versions can branch.
pub const ENVELOPE_VERSION: &str = "1.0";

/// A decoded stored value.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    /// The payload: the envelope's `data` member, or the whole parsed value
    /// for a legacy entry.
    pub data: Value,
    /// Whether the raw string was in envelope form.
    pub is_structured: bool,
}

/// Serializes a value into envelope form with a fresh write timestamp.
pub fn encode(value: &Value) -> String {
    json!({
        "data": value,
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": ENVELOPE_VERSION,
    })
    .to_string()
}

/// Classifies a raw stored string.
///
/// - `None` / empty → no stored value (`None`)
/// - malformed JSON → logged, treated as not present (`None`)
/// - JSON object with a `data` member → structured envelope
/// - anything else → legacy bare value
pub fn decode(raw: Option<&str>) -> Option<Decoded> {
    let raw = raw?;
    if raw.is_empty() {
        return None;
    }

    match serde_json::from_str::<Value>(raw) {
        Ok(parsed) => {
            if let Value::Object(map) = &parsed {
                if let Some(data) = map.get("data") {
                    return Some(Decoded {
                        data: data.clone(),
                        is_structured: true,
                    });
                }
            }
            Some(Decoded {
                data: parsed,
                is_structured: false,
            })
        }
        Err(err) => {
            warn!(%err, "malformed stored value; treating as absent");
            None
        }
    }
}
