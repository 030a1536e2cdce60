use chrono::Local;
use clientdir_model::{
    Client, ClientDraft, ClientId, ClientPatch, DATE_ADDED_FORMAT, validate_draft,
};
use clientdir_store::{ClientStore, StorageError};
use tracing::info;

use crate::error::{RegistryError, RegistryResult};
use crate::query::{ListQuery, build_filter};
use crate::shared_key::derive_shared_key;

/// Orchestrates validation, shared-key derivation, uniqueness checks and
/// persistence for the client directory.
///
/// Uniqueness is check-then-write: the service pre-checks the shared key
/// and relies on the store's unique index as the atomic backstop for
/// races. A backstop rejection is translated into the same error the
/// pre-check would have produced, so callers see one taxonomy either way.
pub struct ClientRegistry<S: ClientStore> {
    store: S,
}

impl<S: ClientStore> ClientRegistry<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Lists clients matching the supplied criteria, in creation order.
    ///
    /// No criteria means every client. A malformed date bound fails the
    /// whole call with [`RegistryError::InvalidDateFormat`].
    pub fn list(&self, query: &ListQuery) -> RegistryResult<Vec<Client>> {
        let filter = build_filter(query)?;
        Ok(self.store.find_all(&filter)?)
    }

    /// Creates a client.
    ///
    /// Validates the draft, derives the shared key from the name, checks
    /// key uniqueness and persists with today's date. Validation happens
    /// before any store access; a failed create leaves no durable change.
    pub fn create(&self, draft: &ClientDraft) -> RegistryResult<Client> {
        validate_draft(draft).map_err(RegistryError::Validation)?;
        let shared_key = derive_shared_key(&draft.name)?;

        if self.store.find_by_shared_key(&shared_key)?.is_some() {
            return Err(RegistryError::DuplicateKey(shared_key));
        }

        let date_added = Local::now().format(DATE_ADDED_FORMAT).to_string();
        info!(shared_key = %shared_key, date_added = %date_added, "creating client");

        match self.store.insert(draft, &date_added, &shared_key) {
            Ok(client) => Ok(client),
            // A concurrent create won the race past our pre-check.
            Err(StorageError::SharedKeyTaken(key)) => Err(RegistryError::DuplicateKey(key)),
            Err(e) => Err(e.into()),
        }
    }

    /// Updates a client's mutable fields.
    ///
    /// A caller-supplied shared key is trusted verbatim and never
    /// re-derived from the patched name; a missing key keeps the stored
    /// one. The id and `date_added` are never touched.
    pub fn update(&self, id: ClientId, patch: &ClientPatch) -> RegistryResult<Client> {
        let Some(mut existing) = self.store.find_by_id(id)? else {
            return Err(RegistryError::NotFound(id));
        };

        let shared_key = match &patch.shared_key {
            Some(key) => key.clone(),
            None => existing.shared_key.clone(),
        };
        if let Some(holder) = self.store.find_by_shared_key(&shared_key)? {
            if holder.id != id {
                return Err(RegistryError::Conflict(shared_key));
            }
        }

        existing.name = patch.name.clone();
        existing.email = patch.email.clone();
        existing.phone = patch.phone.clone();
        existing.shared_key = shared_key;

        match self.store.update(&existing) {
            Ok(client) => {
                info!(id = %client.id, shared_key = %client.shared_key, "client updated");
                Ok(client)
            }
            Err(StorageError::SharedKeyTaken(key)) => Err(RegistryError::Conflict(key)),
            Err(StorageError::NotFound(id)) => Err(RegistryError::NotFound(id)),
            Err(e) => Err(e.into()),
        }
    }
}
