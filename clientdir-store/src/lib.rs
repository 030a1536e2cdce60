//! SQLite-backed persistence for client records.
//!
//! The registry service talks to storage only through the [`ClientStore`]
//! trait; [`SqliteClientStore`] is the durable implementation. Its
//! case-insensitive unique index on `shared_key` is the backstop for the
//! service-level check-then-write uniqueness check: a race that slips
//! past the pre-check surfaces as [`StorageError::SharedKeyTaken`], never
//! as a leaked database error.

mod error;
mod sqlite;
mod store;

pub use error::{StorageError, StorageResult};
pub use sqlite::SqliteClientStore;
pub use store::ClientStore;
