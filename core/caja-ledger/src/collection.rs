//! Typed collection handle.

use caja_storage::{StoragePort, Store};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::marker::PhantomData;
use tracing::{error, warn};

/// One typed collection bound to a logical key.
///
/// Collections are replaced wholesale: add/edit/delete flows compute the new
/// full list and call [`Collection::save`]; there is no partial write.
pub struct Collection<'a, T, P: StoragePort> {
    store: &'a Store<P>,
    key: &'static str,
    _record: PhantomData<fn() -> T>,
}

impl<'a, T, P> Collection<'a, T, P>
where
    T: Serialize + DeserializeOwned,
    P: StoragePort,
{
    pub(crate) fn new(store: &'a Store<P>, key: &'static str) -> Self {
        Self {
            store,
            key,
            _record: PhantomData,
        }
    }

    /// The logical key this collection lives under.
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Loads the collection, running legacy migration on first access.
    ///
    /// Elements that parse as JSON but fail the typed decode are dropped
    /// with a logged diagnostic rather than silently trusted.
    pub fn load(&self) -> Vec<T> {
        let resolved = self.store.resolve(self.key, Value::Array(Vec::new()));
        let Value::Array(items) = resolved else {
            warn!(key = self.key, "stored value is not a collection; treating as empty");
            return Vec::new();
        };

        items
            .into_iter()
            .filter_map(|item| match serde_json::from_value(item) {
                Ok(record) => Some(record),
                Err(err) => {
                    warn!(key = self.key, %err, "dropping record that failed the typed decode");
                    None
                }
            })
            .collect()
    }

    /// Replaces the whole collection. Returns whether the value was
    /// persisted; the in-memory value updates either way.
    pub fn save(&self, records: &[T]) -> bool {
        match serde_json::to_value(records) {
            Ok(value) => self.store.set(self.key, value),
            Err(err) => {
                error!(key = self.key, %err, "collection failed to serialize");
                false
            }
        }
    }
}
