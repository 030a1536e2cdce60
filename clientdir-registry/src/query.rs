//! Turns raw optional list criteria into a [`ClientFilter`].

use chrono::NaiveDate;
use clientdir_model::{ClientFilter, Matcher};

use crate::error::{RegistryError, RegistryResult};

/// Raw optional list criteria, as the embedding shell receives them.
///
/// An absent field and an empty string are treated identically: neither
/// constrains the result. Date bounds are inclusive and arrive in ISO
/// `yyyy-MM-dd` form, while the stored `date_added` is `dd/MM/yyyy`; the
/// filter compares both as calendar dates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub shared_key: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

fn supplied(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn parse_iso_date(value: &str) -> RegistryResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| RegistryError::InvalidDateFormat(value.to_string()))
}

/// Builds the AND-combined filter for a list call.
///
/// A malformed date bound fails the whole call with
/// [`RegistryError::InvalidDateFormat`]; it is never silently dropped.
/// With nothing supplied the result is the empty filter, which matches
/// every client.
pub fn build_filter(query: &ListQuery) -> RegistryResult<ClientFilter> {
    let mut matchers = Vec::new();

    if let Some(key) = supplied(&query.shared_key) {
        matchers.push(Matcher::SharedKeyEquals(key.to_string()));
    }
    if let Some(name) = supplied(&query.name) {
        matchers.push(Matcher::NameContains(name.to_string()));
    }
    if let Some(phone) = supplied(&query.phone) {
        matchers.push(Matcher::PhoneContains(phone.to_string()));
    }
    if let Some(email) = supplied(&query.email) {
        matchers.push(Matcher::EmailContains(email.to_string()));
    }
    if let Some(start) = supplied(&query.start_date) {
        matchers.push(Matcher::AddedOnOrAfter(parse_iso_date(start)?));
    }
    if let Some(end) = supplied(&query.end_date) {
        matchers.push(Matcher::AddedOnOrBefore(parse_iso_date(end)?));
    }

    Ok(ClientFilter::from(matchers))
}
