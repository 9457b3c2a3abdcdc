//! Ledger facade over one storage port.

use crate::collection::Collection;
use caja_storage::{canonical_key, StoragePort, Store};
use caja_types::{keys, Client, Expense, Sale};
use chrono::{DateTime, Utc};
use tracing::warn;

/// All ledger collections over a single storage port.
pub struct Ledger<P: StoragePort> {
    store: Store<P>,
}

impl<P: StoragePort> Ledger<P> {
    pub fn new(port: P) -> Self {
        Self {
            store: Store::new(port),
        }
    }

    /// The underlying reconciling store.
    pub fn store(&self) -> &Store<P> {
        &self.store
    }

    pub fn clients(&self) -> Collection<'_, Client, P> {
        Collection::new(&self.store, keys::CLIENTS)
    }

    pub fn sales(&self) -> Collection<'_, Sale, P> {
        Collection::new(&self.store, keys::SALES)
    }

    pub fn expenses(&self) -> Collection<'_, Expense, P> {
        Collection::new(&self.store, keys::EXPENSES)
    }

    /// Removes the canonical entry for every known logical key. Attempts
    /// all keys even when one removal fails.
    pub fn erase_all(&self) -> bool {
        let mut ok = true;
        for key in keys::LOGICAL_KEYS {
            ok &= self.store.erase(key);
        }
        ok
    }

    /// When the last backup was taken, if a marker is stored and parses.
    ///
    /// The marker is a raw RFC 3339 string written by [`Ledger::mark_backup_now`],
    /// not an enveloped value; that is the format the historical data used.
    pub fn last_backup(&self) -> Option<DateTime<Utc>> {
        let raw = self.store.storage().get(&canonical_key(keys::LAST_BACKUP))?;
        match DateTime::parse_from_rfc3339(&raw) {
            Ok(ts) => Some(ts.with_timezone(&Utc)),
            Err(err) => {
                warn!(%err, "last-backup marker failed to parse; treating as no backup");
                None
            }
        }
    }

    /// Records that a backup was just taken.
    pub fn mark_backup_now(&self) -> bool {
        self.store
            .storage()
            .set(&canonical_key(keys::LAST_BACKUP), &Utc::now().to_rfc3339())
    }

    /// Whether a backup is due: none recorded yet, or the last one is seven
    /// or more days old.
    pub fn backup_due(&self, now: DateTime<Utc>) -> bool {
        match self.last_backup() {
            None => true,
            Some(last) => (now - last).num_days() >= 7,
        }
    }
}
