//! Durable client store backed by SQLite.

use std::path::Path;
use std::sync::{Arc, Mutex};

use clientdir_model::{Client, ClientDraft, ClientFilter, ClientId};
use rusqlite::{Connection, OptionalExtension, params};
use tracing::debug;

use crate::error::{StorageError, StorageResult};
use crate::store::ClientStore;

const CLIENT_COLUMNS: &str = "id, name, phone, email, date_added, shared_key";

/// Client store backed by a single SQLite database.
///
/// `shared_key` is declared `UNIQUE COLLATE NOCASE`, so equality lookups
/// fold case and the unique index rejects a second row with the same key
/// in any casing. That index is what closes the check-then-write race
/// between concurrent creates.
pub struct SqliteClientStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteClientStore {
    /// Opens (or creates) a client store at the given path.
    pub fn open(path: &Path) -> StorageResult<Self> {
        Self::from_connection(Connection::open(path)?)
    }

    /// Opens an in-memory store (for testing).
    pub fn open_in_memory() -> StorageResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> StorageResult<Self> {
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> StorageResult<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS clients (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                phone TEXT NOT NULL,
                email TEXT NOT NULL,
                date_added TEXT NOT NULL,
                shared_key TEXT NOT NULL UNIQUE COLLATE NOCASE
            );
            ",
        )?;
        Ok(())
    }
}

fn row_to_client(row: &rusqlite::Row<'_>) -> rusqlite::Result<Client> {
    Ok(Client {
        id: ClientId::new(row.get(0)?),
        name: row.get(1)?,
        phone: row.get(2)?,
        email: row.get(3)?,
        date_added: row.get(4)?,
        shared_key: row.get(5)?,
    })
}

/// Maps a unique-index violation to [`StorageError::SharedKeyTaken`],
/// keeping everything else a plain database error.
fn map_constraint(err: rusqlite::Error, key: &str) -> StorageError {
    match &err {
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            StorageError::SharedKeyTaken(key.to_string())
        }
        _ => StorageError::Database(err),
    }
}

impl ClientStore for SqliteClientStore {
    fn find_all(&self, filter: &ClientFilter) -> StorageResult<Vec<Client>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(&format!(
            "SELECT {CLIENT_COLUMNS} FROM clients ORDER BY id"
        ))?;
        let rows = stmt.query_map([], row_to_client)?;

        let mut clients = Vec::new();
        for row in rows {
            let client = row?;
            if filter.matches(&client) {
                clients.push(client);
            }
        }
        Ok(clients)
    }

    fn find_by_id(&self, id: ClientId) -> StorageResult<Option<Client>> {
        let conn = self.conn.lock().unwrap();
        let client = conn
            .query_row(
                &format!("SELECT {CLIENT_COLUMNS} FROM clients WHERE id = ?1"),
                params![id.as_i64()],
                row_to_client,
            )
            .optional()?;
        Ok(client)
    }

    fn find_by_shared_key(&self, key: &str) -> StorageResult<Option<Client>> {
        let conn = self.conn.lock().unwrap();
        // NOCASE collation on the column makes `=` case-insensitive.
        let client = conn
            .query_row(
                &format!("SELECT {CLIENT_COLUMNS} FROM clients WHERE shared_key = ?1"),
                params![key],
                row_to_client,
            )
            .optional()?;
        Ok(client)
    }

    fn insert(
        &self,
        draft: &ClientDraft,
        date_added: &str,
        shared_key: &str,
    ) -> StorageResult<Client> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO clients (name, phone, email, date_added, shared_key)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![draft.name, draft.phone, draft.email, date_added, shared_key],
        )
        .map_err(|e| map_constraint(e, shared_key))?;

        let id = conn.last_insert_rowid();
        debug!(id, shared_key, "client row inserted");
        Ok(Client {
            id: ClientId::new(id),
            name: draft.name.clone(),
            phone: draft.phone.clone(),
            email: draft.email.clone(),
            date_added: date_added.to_string(),
            shared_key: shared_key.to_string(),
        })
    }

    fn update(&self, client: &Client) -> StorageResult<Client> {
        let conn = self.conn.lock().unwrap();
        let changed = conn
            .execute(
                "UPDATE clients SET name = ?1, phone = ?2, email = ?3, shared_key = ?4
                 WHERE id = ?5",
                params![
                    client.name,
                    client.phone,
                    client.email,
                    client.shared_key,
                    client.id.as_i64(),
                ],
            )
            .map_err(|e| map_constraint(e, &client.shared_key))?;

        if changed == 0 {
            return Err(StorageError::NotFound(client.id));
        }
        debug!(id = client.id.as_i64(), "client row updated");
        Ok(client.clone())
    }
}
