use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Storage format of [`Client::date_added`] (`dd/MM/yyyy`).
pub const DATE_ADDED_FORMAT: &str = "%d/%m/%Y";

/// Identifier of a client record, assigned by the store on first insert
/// and never reassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(i64);

impl ClientId {
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the underlying row id.
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ClientId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

/// A client record as persisted by the store.
///
/// `date_added` is set exactly once at creation and `shared_key` is
/// unique across all clients (case-insensitively). The serialized shape
/// uses camelCase field names (`dateAdded`, `sharedKey`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub date_added: String,
    pub shared_key: String,
}

impl Client {
    /// Reinterprets the stored `dd/MM/yyyy` string as a calendar date.
    ///
    /// Returns `None` when the stored value does not parse.
    #[must_use]
    pub fn date_added_parsed(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date_added, DATE_ADDED_FORMAT).ok()
    }
}
