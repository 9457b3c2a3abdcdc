//! Typed data layer of the caja ledger.
//!
//! Sits on `caja-storage` and gives each collection an explicit schema:
//! decoded JSON is validated into [`caja_types`] records at the edge instead
//! of being trusted as-is, and records that fail the typed decode are logged
//! and dropped. Also owns the full-snapshot backup format and the erase-all
//! operation.

mod backup;
mod collection;
mod ledger;

pub use backup::{BackupSnapshot, SNAPSHOT_SYSTEM, SNAPSHOT_VERSION};
pub use collection::Collection;
pub use ledger::Ledger;
