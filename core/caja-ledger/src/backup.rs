//! Full-snapshot backup format.
//!
//! The snapshot JSON is interchangeable with the exports the original
//! system produced: same field names, same `version` and `system` literals.
//! Rendering to a file and the download/upload flow are the UI's concern;
//! this module owns the format and the restore semantics.

use crate::ledger::Ledger;
use caja_storage::StoragePort;
use caja_types::{Client, Expense, Sale};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Snapshot schema version.
pub const SNAPSHOT_VERSION: &str = "1.0";

/// `system` marker identifying a caja snapshot.
pub const SNAPSHOT_SYSTEM: &str = "Sales Management System";

/// A complete export of every collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupSnapshot {
    pub clients: Vec<Client>,
    pub sales: Vec<Sale>,
    /// Older snapshots may lack this entirely; restoring one yields an
    /// empty expense list.
    #[serde(default)]
    pub expenses: Vec<Expense>,
    pub backup_date: String,
    pub version: String,
    pub system: String,
}

impl BackupSnapshot {
    /// Parses a snapshot, logging and returning `None` on malformed input.
    pub fn from_json(raw: &str) -> Option<Self> {
        match serde_json::from_str(raw) {
            Ok(snapshot) => Some(snapshot),
            Err(err) => {
                warn!(%err, "backup snapshot failed to parse");
                None
            }
        }
    }

    /// Pretty-printed JSON, as the export file is written.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl<P: StoragePort> Ledger<P> {
    /// Builds a snapshot of the current collections.
    pub fn export_snapshot(&self) -> BackupSnapshot {
        BackupSnapshot {
            clients: self.clients().load(),
            sales: self.sales().load(),
            expenses: self.expenses().load(),
            backup_date: chrono::Utc::now().to_rfc3339(),
            version: SNAPSHOT_VERSION.to_string(),
            system: SNAPSHOT_SYSTEM.to_string(),
        }
    }

    /// Replaces every collection with the snapshot's contents. Attempts all
    /// collections even when one write fails; returns whether all
    /// persisted.
    pub fn restore_snapshot(&self, snapshot: &BackupSnapshot) -> bool {
        let mut ok = self.clients().save(&snapshot.clients);
        ok &= self.sales().save(&snapshot.sales);
        ok &= self.expenses().save(&snapshot.expenses);
        ok
    }
}
