//! Persistent key-value storage for the caja ledger.
//!
//! Collections are stored as JSON strings under namespaced keys, wrapped in
//! a versioned envelope (`{data, timestamp, version}`). Earlier releases
//! stored bare JSON under unprefixed keys; the first access to a logical key
//! reconciles the two, merging by record identity when both copies exist,
//! and deletes the legacy entry.
//!
//! # Architecture
//!
//! - [`StoragePort`] is the injected storage primitive ([`MemoryStorage`]
//!   for tests, [`FileStorage`] for durable use)
//! - [`SafeStorage`] guards every port call; no storage error escapes it
//! - [`Store`] runs the one-shot migration per logical key and exposes the
//!   resolved value plus a canonical-only setter
//!
//! Single active writer assumed: all operations are synchronous and there is
//! no cross-key transaction.

mod envelope;
mod error;
mod keyspace;
mod merge;
mod port;
mod safe;
mod store;

pub use envelope::{decode, encode, Decoded, ENVELOPE_VERSION};
pub use error::{StorageError, StorageResult};
pub use keyspace::{canonical_key, legacy_key, STORAGE_PREFIX};
pub use merge::merge;
pub use port::{FileStorage, MemoryStorage, StoragePort};
pub use safe::SafeStorage;
pub use store::Store;
