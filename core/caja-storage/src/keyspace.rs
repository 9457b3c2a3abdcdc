//! Physical key naming.
//!
//! A logical key maps to exactly one canonical (prefixed) physical key and
//! at most one legacy (unprefixed) physical key. The prefix is the
//! historical one; changing it would orphan previously persisted data.

/// Namespace prefix for canonical physical keys.
pub const STORAGE_PREFIX: &str = "sales_system_";

/// Returns the canonical physical key for a logical key. Idempotent: an
/// already-prefixed key is returned unchanged.
pub fn canonical_key(logical: &str) -> String {
    if logical.starts_with(STORAGE_PREFIX) {
        logical.to_string()
    } else {
        format!("{STORAGE_PREFIX}{logical}")
    }
}

/// Returns the legacy physical key, or `None` when the logical key was
/// supplied already-prefixed (no legacy counterpart is meaningful).
pub fn legacy_key(logical: &str) -> Option<&str> {
    if logical.starts_with(STORAGE_PREFIX) {
        None
    } else {
        Some(logical)
    }
}
