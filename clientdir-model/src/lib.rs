//! Canonical data model for the client directory.
//!
//! Defines the types the storage and registry layers agree on:
//! - [`Client`] — the persisted record (id, name, phone, email, date added, shared key)
//! - [`ClientDraft`] / [`ClientPatch`] — the create and update payloads
//! - [`validate_draft`] — structural field validation with the exact
//!   caller-facing messages
//! - [`Matcher`] / [`ClientFilter`] — the AND-combined predicate used by
//!   filtered listing
//!
//! Everything in this crate is pure: no I/O, no clocks, no store access.

mod client;
mod filter;
mod payload;
mod validate;

pub use client::{Client, ClientId, DATE_ADDED_FORMAT};
pub use filter::{ClientFilter, Matcher};
pub use payload::{ClientDraft, ClientPatch};
pub use validate::{
    MSG_EMAIL_INVALID, MSG_EMAIL_REQUIRED, MSG_NAME_REQUIRED, MSG_NAME_TWO_TOKENS,
    MSG_PHONE_REQUIRED, validate_draft,
};
