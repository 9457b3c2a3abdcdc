//! Reconciling store accessor.
//!
//! Per logical key the store runs a one-shot resolution: read the canonical
//! and legacy physical keys, decode both, merge when both hold data, write
//! the canonical envelope back when anything needs normalizing, and delete
//! the legacy entry. The resolved value is memoized, so repeated consumers
//! of the same key never re-run the migration within one store lifetime.
//! Subsequent writes go through [`Store::set`], which writes the canonical
//! key only.

use crate::envelope::{decode, encode};
use crate::keyspace::{canonical_key, legacy_key};
use crate::merge::merge;
use crate::port::StoragePort;
use crate::safe::SafeStorage;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::{debug, warn};

/// Reconciling accessor over a [`SafeStorage`].
pub struct Store<P: StoragePort> {
    storage: SafeStorage<P>,
    resolved: Mutex<HashMap<String, Value>>,
}

impl<P: StoragePort> Store<P> {
    pub fn new(port: P) -> Self {
        Self {
            storage: SafeStorage::new(port),
            resolved: Mutex::new(HashMap::new()),
        }
    }

    /// The underlying safe storage, for values that bypass the envelope
    /// (e.g. plain marker keys).
    pub fn storage(&self) -> &SafeStorage<P> {
        &self.storage
    }

    /// Resolves the current value of a logical key, migrating legacy
    /// entries on first access.
    ///
    /// `default` only seeds the case where nothing is stored; once a key is
    /// resolved, re-invoking with a different default returns the memoized
    /// value unchanged.
    pub fn resolve(&self, key: &str, default: Value) -> Value {
        if let Some(value) = self.resolved.lock().unwrap().get(key) {
            return value.clone();
        }

        let canonical = canonical_key(key);
        let legacy = legacy_key(key);

        let canonical_stored = decode(self.storage.get(&canonical).as_deref());
        let legacy_stored = legacy.and_then(|lk| decode(self.storage.get(lk).as_deref()));

        let (value, should_persist) = match (canonical_stored, legacy_stored) {
            (Some(canonical_entry), Some(legacy_entry)) => {
                let merged = merge(&canonical_entry.data, &legacy_entry.data)
                    .map(Value::Array)
                    .unwrap_or(canonical_entry.data);
                (merged, true)
            }
            // Re-persist only when the entry predates the envelope format.
            (Some(canonical_entry), None) => {
                let persist = !canonical_entry.is_structured;
                (canonical_entry.data, persist)
            }
            (None, Some(legacy_entry)) => {
                debug!(key, "migrating legacy entry to canonical key");
                (legacy_entry.data, true)
            }
            (None, None) => (default, false),
        };

        if should_persist {
            // Delete the legacy entry only once the canonical write landed.
            if self.storage.set(&canonical, &encode(&value)) {
                if let Some(lk) = legacy {
                    self.storage.remove(lk);
                }
            }
        }

        self.resolved
            .lock()
            .unwrap()
            .insert(key.to_string(), value.clone());
        value
    }

    /// Replaces the value of a logical key, writing the canonical envelope.
    ///
    /// The memoized value updates even when the physical write fails, so
    /// the running session stays consistent; the returned bool reports
    /// whether the value will survive a restart.
    pub fn set(&self, key: &str, value: Value) -> bool {
        let canonical = canonical_key(key);
        let wrote = self.storage.set(&canonical, &encode(&value));
        if wrote {
            if let Some(lk) = legacy_key(key) {
                self.storage.remove(lk);
            }
        } else {
            warn!(key, "write failed; value kept in memory for this session only");
        }
        self.resolved.lock().unwrap().insert(key.to_string(), value);
        wrote
    }

    /// Removes the canonical entry for a logical key and forgets its
    /// memoized value, so the next [`Store::resolve`] starts from scratch.
    pub fn erase(&self, key: &str) -> bool {
        self.resolved.lock().unwrap().remove(key);
        self.storage.remove(&canonical_key(key))
    }
}
