//! Settings source text → generic settings tree.

use crate::error::ConfigGenError;
use serde_json::Value;

/// Parse a YAML settings document (JSON is accepted too, being valid YAML)
/// into a generic tree of mappings, lists and scalars.
///
/// # Errors
///
/// Returns `ConfigGenError::YamlError` if the text is not valid YAML or uses
/// non-string mapping keys.
pub fn load_settings_tree(source: &str) -> Result<Value, ConfigGenError> {
    let tree: Value = serde_yaml::from_str(source)?;
    Ok(tree)
}
