use serde::{Deserialize, Serialize};

/// Create payload: the caller-supplied fields of a new client.
///
/// The registry assigns `id`, `date_added` and `shared_key` itself; they
/// are never accepted from the caller at creation time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// Update payload for an existing client.
///
/// Unlike creation, the shared key here is trusted verbatim when
/// supplied; it is never re-derived from the patched name. A missing
/// key keeps the record's current one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientPatch {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub shared_key: Option<String>,
}
