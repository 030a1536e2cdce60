//! Predicate combinator for filtered listing.
//!
//! Each [`Matcher`] is a plain data record testing one field; a
//! [`ClientFilter`] combines matchers by logical AND. Evaluation needs
//! no live store, so the matchers are unit-testable in isolation.

use chrono::NaiveDate;

use crate::client::Client;

/// A single field-level criterion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher {
    /// Exact shared-key match, case-insensitive.
    SharedKeyEquals(String),
    /// Case-insensitive substring match on the name.
    NameContains(String),
    /// Case-sensitive substring match on the raw stored phone string.
    PhoneContains(String),
    /// Case-insensitive substring match on the email.
    EmailContains(String),
    /// `date_added`, read as a calendar date, is on or after the bound.
    AddedOnOrAfter(NaiveDate),
    /// `date_added`, read as a calendar date, is on or before the bound.
    AddedOnOrBefore(NaiveDate),
}

impl Matcher {
    /// Tests this criterion against a single client.
    ///
    /// A stored `date_added` that does not parse as `dd/MM/yyyy` fails
    /// both date criteria.
    #[must_use]
    pub fn matches(&self, client: &Client) -> bool {
        match self {
            Self::SharedKeyEquals(key) => {
                client.shared_key.to_lowercase() == key.to_lowercase()
            }
            Self::NameContains(needle) => contains_ci(&client.name, needle),
            Self::PhoneContains(needle) => client.phone.contains(needle.as_str()),
            Self::EmailContains(needle) => contains_ci(&client.email, needle),
            Self::AddedOnOrAfter(start) => {
                client.date_added_parsed().is_some_and(|d| d >= *start)
            }
            Self::AddedOnOrBefore(end) => {
                client.date_added_parsed().is_some_and(|d| d <= *end)
            }
        }
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// AND-combination of field matchers.
///
/// The empty filter matches every client, which makes unfiltered listing
/// a degenerate case of filtered listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientFilter {
    matchers: Vec<Matcher>,
}

impl ClientFilter {
    /// The empty filter (matches everything).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one more criterion.
    pub fn push(&mut self, matcher: Matcher) {
        self.matchers.push(matcher);
    }

    /// True when no criteria are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// The criteria in the order they were added.
    #[must_use]
    pub fn matchers(&self) -> &[Matcher] {
        &self.matchers
    }

    /// True iff every criterion matches the client.
    #[must_use]
    pub fn matches(&self, client: &Client) -> bool {
        self.matchers.iter().all(|m| m.matches(client))
    }
}

impl From<Vec<Matcher>> for ClientFilter {
    fn from(matchers: Vec<Matcher>) -> Self {
        Self { matchers }
    }
}
