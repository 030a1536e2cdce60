use clientdir_model::{Client, ClientDraft, ClientFilter, ClientId};

use crate::error::StorageResult;

/// Narrow storage interface the registry service calls through.
///
/// Implementations must enforce case-insensitive uniqueness of the
/// shared key as an atomic backstop: an insert or update that would
/// duplicate a key held by another row fails with
/// [`StorageError::SharedKeyTaken`](crate::StorageError::SharedKeyTaken)
/// even when the service's own pre-check raced and passed.
pub trait ClientStore: Send + Sync {
    /// All clients satisfying `filter`, in insertion (id) order.
    fn find_all(&self, filter: &ClientFilter) -> StorageResult<Vec<Client>>;

    /// The client with the given id, if any.
    fn find_by_id(&self, id: ClientId) -> StorageResult<Option<Client>>;

    /// Exact shared-key match, case-insensitive.
    fn find_by_shared_key(&self, key: &str) -> StorageResult<Option<Client>>;

    /// Persists a new record; the store assigns the id.
    fn insert(
        &self,
        draft: &ClientDraft,
        date_added: &str,
        shared_key: &str,
    ) -> StorageResult<Client>;

    /// Rewrites `name`, `phone`, `email` and `shared_key` of the row with
    /// `client.id`. The id and `date_added` columns are never touched.
    fn update(&self, client: &Client) -> StorageResult<Client>;
}
