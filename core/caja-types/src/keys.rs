//! Logical collection keys.
//!
//! A logical key names one collection independently of how it is stored;
//! the storage layer maps it to a namespaced physical key (and, during
//! migration, to its historical unprefixed counterpart).

/// Client collection.
pub const CLIENTS: &str = "clients";

/// Sale collection.
pub const SALES: &str = "sales";

/// Expense collection.
pub const EXPENSES: &str = "expenses";

/// Last-backup marker. Stored as a raw RFC 3339 string, not an envelope.
pub const LAST_BACKUP: &str = "last_backup";

/// Every logical key the ledger owns; the erase-all operation removes the
/// canonical entry for each of these.
pub const LOGICAL_KEYS: [&str; 4] = [CLIENTS, SALES, EXPENSES, LAST_BACKUP];
