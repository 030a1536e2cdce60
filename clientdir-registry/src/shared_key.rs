use clientdir_model::MSG_NAME_TWO_TOKENS;

use crate::error::{RegistryError, RegistryResult};

/// Derives the shared key for a client name.
///
/// The key is the first character of the first whitespace-separated
/// token concatenated with the entire last token, lower-cased; middle
/// tokens are ignored ("Jane Smith" and "Jane Q. Smith" both derive
/// "jsmith"). Names with fewer than two tokens are rejected.
///
/// Pure and deterministic.
pub fn derive_shared_key(name: &str) -> RegistryResult<String> {
    let tokens: Vec<&str> = name.split_whitespace().collect();
    if tokens.len() < 2 {
        return Err(RegistryError::Validation(vec![
            MSG_NAME_TWO_TOKENS.to_string(),
        ]));
    }

    let first = tokens[0];
    let last = tokens[tokens.len() - 1];
    let key: String = first.chars().take(1).chain(last.chars()).collect();
    Ok(key.to_lowercase())
}
