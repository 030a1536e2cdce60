//! Error taxonomy for registry operations.

use clientdir_model::ClientId;
use clientdir_store::StorageError;
use thiserror::Error;

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors surfaced by the registry service.
///
/// The rendered text of the validation, duplicate-key, conflict and
/// not-found variants is part of the external contract; existing callers
/// match on it verbatim. None of these are retried: every rejected
/// precondition halts the operation before any durable change.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// One or more structural field checks failed. Raised before any
    /// store access.
    #[error("{}", .0.join("; "))]
    Validation(Vec<String>),

    /// Create-time shared-key collision.
    #[error("Ya existe un cliente con la sharedKey: {0}")]
    DuplicateKey(String),

    /// Update-time shared-key collision with a different record.
    #[error("SharedKey '{0}' is already in use.")]
    Conflict(String),

    /// No client with the given id.
    #[error("Client with ID {0} not found.")]
    NotFound(ClientId),

    /// A list filter date was not a valid `yyyy-MM-dd` value.
    #[error("invalid date filter: {0}")]
    InvalidDateFormat(String),

    /// Failure from the storage collaborator.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
