//! Error types for the storage layer.

use clientdir_model::ClientId;
use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur in storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Database error from SQLite.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Unique-constraint backstop: another row already holds this shared key.
    #[error("shared key already stored: {0}")]
    SharedKeyTaken(String),

    /// No row with the given id.
    #[error("client not found: {0}")]
    NotFound(ClientId),
}
