//! Structural validation of create payloads.
//!
//! Message strings are part of the external contract; existing callers
//! match on them verbatim.

use std::sync::OnceLock;

use regex_lite::Regex;

use crate::payload::ClientDraft;

pub const MSG_NAME_REQUIRED: &str = "El nombre es obligatorio";
pub const MSG_NAME_TWO_TOKENS: &str = "El nombre debe contener al menos nombre y apellido";
pub const MSG_PHONE_REQUIRED: &str = "El teléfono es obligatorio";
pub const MSG_EMAIL_REQUIRED: &str = "El email es obligatorio";
pub const MSG_EMAIL_INVALID: &str = "Formato de email inválido";

fn name_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\S+\s+\S+").expect("valid name pattern"))
}

fn email_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"))
}

/// Checks the structural field rules for a create payload.
///
/// All violations are collected in one pass rather than stopping at the
/// first, so the caller sees every bad field at once. Runs before any
/// store access.
pub fn validate_draft(draft: &ClientDraft) -> Result<(), Vec<String>> {
    let mut violations = Vec::new();

    if draft.name.trim().is_empty() {
        violations.push(MSG_NAME_REQUIRED.to_string());
    } else if !name_pattern().is_match(&draft.name) {
        violations.push(MSG_NAME_TWO_TOKENS.to_string());
    }

    if draft.phone.trim().is_empty() {
        violations.push(MSG_PHONE_REQUIRED.to_string());
    }

    if draft.email.trim().is_empty() {
        violations.push(MSG_EMAIL_REQUIRED.to_string());
    } else if !email_pattern().is_match(&draft.email) {
        violations.push(MSG_EMAIL_INVALID.to_string());
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}
