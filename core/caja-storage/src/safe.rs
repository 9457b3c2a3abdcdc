//! Defensive wrapper over a storage port.
//!
//! Every port error is logged and converted to an absent/failed result, so
//! nothing above this layer ever has to handle a storage fault. Callers can
//! therefore not distinguish "empty" from "storage unavailable" except via
//! the diagnostic log; that trade-off keeps the application interactive
//! when persistence is gone.

use crate::port::StoragePort;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{error, warn};

/// Never-failing facade over a [`StoragePort`].
pub struct SafeStorage<P: StoragePort> {
    port: P,
}

impl<P: StoragePort> SafeStorage<P> {
    pub fn new(port: P) -> Self {
        Self { port }
    }

    /// The wrapped port.
    pub fn port(&self) -> &P {
        &self.port
    }

    /// Reads a raw value; absent and failed reads both yield `None`.
    pub fn get(&self, key: &str) -> Option<String> {
        match self.port.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                warn!(key, %err, "storage read failed");
                None
            }
        }
    }

    /// Writes a raw value, reporting success.
    pub fn set(&self, key: &str, value: &str) -> bool {
        match self.port.set_item(key, value) {
            Ok(()) => true,
            Err(err) => {
                error!(key, %err, "storage write failed");
                false
            }
        }
    }

    /// Removes a value, reporting success.
    pub fn remove(&self, key: &str) -> bool {
        match self.port.remove_item(key) {
            Ok(()) => true,
            Err(err) => {
                error!(key, %err, "storage remove failed");
                false
            }
        }
    }

    /// Reads and deserializes a JSON value, falling back on absence, read
    /// failure, or a parse failure.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        let Some(raw) = self.get(key) else {
            return fallback;
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                warn!(key, %err, "stored JSON failed to parse");
                fallback
            }
        }
    }

    /// Serializes and writes a JSON value, reporting success.
    pub fn set_json<T: Serialize>(&self, key: &str, value: &T) -> bool {
        match serde_json::to_string(value) {
            Ok(raw) => self.set(key, &raw),
            Err(err) => {
                error!(key, %err, "value failed to serialize");
                false
            }
        }
    }
}
