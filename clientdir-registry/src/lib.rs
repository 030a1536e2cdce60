//! Registry service for the client directory.
//!
//! [`ClientRegistry`] owns the three operations an embedding shell
//! exposes — create, filtered listing, update — and orchestrates
//! validation, shared-key derivation, uniqueness checks and persistence
//! through the [`ClientStore`](clientdir_store::ClientStore) trait.
//!
//! The shared key is a human-friendly handle derived from the client's
//! name (first initial + last name, lower-cased) and unique across all
//! clients. On create it is always derived; on update a caller-supplied
//! key is trusted verbatim. That asymmetry is deliberate, long-observed
//! behavior that downstream callers depend on.

mod error;
mod query;
mod registry;
mod shared_key;

pub use error::{RegistryError, RegistryResult};
pub use query::{ListQuery, build_filter};
pub use registry::ClientRegistry;
pub use shared_key::derive_shared_key;
