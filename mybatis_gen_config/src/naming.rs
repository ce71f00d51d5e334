//! Identifier casing for generated artifact names.

use crate::error::ConfigGenError;
use heck::ToUpperCamelCase;

/// Returns true if `identifier` is a non-empty `[a-z0-9_]` token holding at
/// least one word character.
fn is_lower_underscore(identifier: &str) -> bool {
    identifier
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        && identifier.chars().any(|c| c != '_')
}

/// Convert a lower-case, underscore-delimited identifier to `UpperCamel`.
/// Words are split on `_`, each word is capitalized, and the words are joined
/// with no separator. Runs of `_` collapse.
/// Examples: `"user_account"` -> `"UserAccount"`, `"order_item2"` -> `"OrderItem2"`
///
/// # Errors
///
/// Returns `ConfigGenError::InvalidIdentifier` if the input is empty, holds a
/// character outside `[a-z0-9_]`, or consists of underscores only.
pub fn to_upper_camel(identifier: &str) -> Result<String, ConfigGenError> {
    if !is_lower_underscore(identifier) {
        return Err(ConfigGenError::InvalidIdentifier(identifier.to_string()));
    }
    Ok(identifier.to_upper_camel_case())
}
