//! Typed settings resolved from the generic settings tree.
//!
//! Resolution is the single validating step of the pipeline: every required
//! field is checked and every optional field receives its default here, so
//! the compiler works on plain typed values only. A YAML `null` counts as
//! absent.

use crate::connection::ConnectionSpec;
use crate::error::ConfigGenError;
use crate::field_path;
use crate::plugins::PluginSet;
use serde::Serialize;
use serde_json::{Map, Value};

/// Key under which the original settings file layout nests everything.
const WRAPPER_KEY: &str = "mybatisGenerator";

/// Target packages of the generated artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageMapping {
    pub model_package: String,
    pub mapper_package: String,
    pub xml_mapper_package: String,
    /// When true, XML mappers are written next to the Java sources.
    pub colocate_java_and_xml: bool,
}

/// Fully resolved settings for one compilation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub target_runtime: String,
    pub plugins: PluginSet,
    pub datasource: ConnectionSpec,
    /// `java8` in the settings file: map date columns to `java.time` types.
    pub use_jsr310_types: bool,
    pub target_package: PackageMapping,
    pub mapper_suffix: String,
    pub disable_example: bool,
    pub tables: Vec<String>,
}

impl Settings {
    /// Resolve typed settings from a loaded settings tree.
    ///
    /// If the tree's top level holds a `mybatisGenerator` mapping, that
    /// mapping is used as the settings root.
    ///
    /// # Errors
    ///
    /// Returns the first problem found: `MissingRequiredField` or
    /// `InvalidFieldType` with the offending field path, or `EmptyTableList`.
    pub fn from_tree(tree: &Value) -> Result<Self, ConfigGenError> {
        let Value::Object(top) = tree else {
            return Err(invalid("", "a mapping"));
        };
        let (root, base): (&Map<String, Value>, &str) = match top.get(WRAPPER_KEY) {
            Some(Value::Object(inner)) => (inner, WRAPPER_KEY),
            Some(Value::Null) | None => (top, ""),
            Some(_) => return Err(invalid(WRAPPER_KEY, "a mapping")),
        };

        let target_runtime: String = required_string(root, base, "targetRuntime")?;
        let plugins: PluginSet = resolve_plugins(root, base)?;
        let datasource: ConnectionSpec = resolve_datasource(root, base)?;
        let use_jsr310_types: bool = optional_bool(root, base, "java8")?;
        let target_package: PackageMapping = resolve_target_package(root, base)?;
        let mapper_suffix: String = required_string(root, base, "mapperSuffixName")?;
        let disable_example: bool = optional_bool(root, base, "disableExample")?;
        let tables: Vec<String> = resolve_tables(root, base)?;

        tracing::debug!(
            target_runtime = %target_runtime,
            db_type = %datasource.db_type,
            tables = tables.len(),
            "resolved settings"
        );

        Ok(Self {
            target_runtime,
            plugins,
            datasource,
            use_jsr310_types,
            target_package,
            mapper_suffix,
            disable_example,
            tables,
        })
    }
}

fn missing(path: &str) -> ConfigGenError {
    ConfigGenError::MissingRequiredField {
        path: path.to_string(),
    }
}

fn invalid(path: &str, expected: &'static str) -> ConfigGenError {
    ConfigGenError::InvalidFieldType {
        path: path.to_string(),
        expected,
    }
}

/// Look up `key`, treating `null` the same as an absent key.
fn lookup<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    map.get(key).filter(|v| !v.is_null())
}

fn required_string(
    map: &Map<String, Value>,
    base: &str,
    key: &str,
) -> Result<String, ConfigGenError> {
    let path: String = field_path::key(base, key);
    match lookup(map, key) {
        None => Err(missing(&path)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(invalid(&path, "a string")),
    }
}

/// A string, or a number taken in its textual form (numeric passwords).
fn required_text(
    map: &Map<String, Value>,
    base: &str,
    key: &str,
) -> Result<String, ConfigGenError> {
    let path: String = field_path::key(base, key);
    match lookup(map, key) {
        None => Err(missing(&path)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(_) => Err(invalid(&path, "a string or a number")),
    }
}

fn required_bool(map: &Map<String, Value>, base: &str, key: &str) -> Result<bool, ConfigGenError> {
    let path: String = field_path::key(base, key);
    match lookup(map, key) {
        None => Err(missing(&path)),
        Some(Value::Bool(b)) => Ok(*b),
        Some(_) => Err(invalid(&path, "a boolean")),
    }
}

/// Optional boolean; absent means `false`.
fn optional_bool(map: &Map<String, Value>, base: &str, key: &str) -> Result<bool, ConfigGenError> {
    match lookup(map, key) {
        None => Ok(false),
        Some(Value::Bool(b)) => Ok(*b),
        Some(_) => Err(invalid(&field_path::key(base, key), "a boolean")),
    }
}

fn required_mapping<'a>(
    map: &'a Map<String, Value>,
    base: &str,
    key: &str,
) -> Result<&'a Map<String, Value>, ConfigGenError> {
    let path: String = field_path::key(base, key);
    match lookup(map, key) {
        None => Err(missing(&path)),
        Some(Value::Object(inner)) => Ok(inner),
        Some(_) => Err(invalid(&path, "a mapping")),
    }
}

fn resolve_plugins(root: &Map<String, Value>, base: &str) -> Result<PluginSet, ConfigGenError> {
    let path: String = field_path::key(base, "plugins");
    let plugins: &Map<String, Value> = match lookup(root, "plugins") {
        None => return Ok(PluginSet::default()),
        Some(Value::Object(inner)) => inner,
        Some(_) => return Err(invalid(&path, "a mapping")),
    };
    let lombok_key: &str = if lookup(plugins, "lombok").is_some() {
        "lombok"
    } else {
        "lombokEquivalent"
    };
    Ok(PluginSet {
        comment: optional_bool(plugins, &path, "comment")?,
        lombok: optional_bool(plugins, &path, lombok_key)?,
        swagger: optional_bool(plugins, &path, "swagger")?,
        serializable: optional_bool(plugins, &path, "serializable")?,
        mapper_annotation: optional_bool(plugins, &path, "mapperAnnotation")?,
    })
}

fn resolve_datasource(
    root: &Map<String, Value>,
    base: &str,
) -> Result<ConnectionSpec, ConfigGenError> {
    let datasource: &Map<String, Value> = required_mapping(root, base, "datasource")?;
    let path: String = field_path::key(base, "datasource");
    Ok(ConnectionSpec {
        db_type: required_string(datasource, &path, "type")?,
        address: required_string(datasource, &path, "address")?,
        schema: required_string(datasource, &path, "db")?,
        username: required_text(datasource, &path, "username")?,
        password: required_text(datasource, &path, "password")?,
    })
}

fn resolve_target_package(
    root: &Map<String, Value>,
    base: &str,
) -> Result<PackageMapping, ConfigGenError> {
    let target_package: &Map<String, Value> = required_mapping(root, base, "targetPackage")?;
    let path: String = field_path::key(base, "targetPackage");
    Ok(PackageMapping {
        model_package: required_string(target_package, &path, "model")?,
        mapper_package: required_string(target_package, &path, "mapper")?,
        xml_mapper_package: required_string(target_package, &path, "xmlmapper")?,
        colocate_java_and_xml: required_bool(target_package, &path, "javaXmlFilesSamePackage")?,
    })
}

fn resolve_tables(root: &Map<String, Value>, base: &str) -> Result<Vec<String>, ConfigGenError> {
    let path: String = field_path::key(base, "tables");
    let items: &Vec<Value> = match lookup(root, "tables") {
        None => return Err(missing(&path)),
        Some(Value::Array(items)) => items,
        Some(_) => return Err(invalid(&path, "a list of table names")),
    };
    if items.is_empty() {
        return Err(ConfigGenError::EmptyTableList);
    }
    items
        .iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::String(name) => Ok(name.clone()),
            _ => Err(invalid(&field_path::index(&path, i), "a string")),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal_tree() -> Value {
        json!({
            "targetRuntime": "MyBatis3",
            "datasource": {
                "type": "mysql",
                "address": "localhost:3306",
                "db": "shop",
                "username": "root",
                "password": "secret"
            },
            "targetPackage": {
                "model": "com.example.model",
                "mapper": "com.example.mapper",
                "xmlmapper": "mapper",
                "javaXmlFilesSamePackage": false
            },
            "mapperSuffixName": "Mapper",
            "tables": ["order_item"]
        })
    }

    fn remove(tree: &mut Value, section: Option<&str>, key: &str) {
        let target: &mut Value = match section {
            Some(s) => &mut tree[s],
            None => tree,
        };
        if let Value::Object(map) = target {
            map.remove(key);
        }
    }

    fn assert_missing(result: Result<Settings, ConfigGenError>, expected_path: &str) {
        match result {
            Err(ConfigGenError::MissingRequiredField { path }) => assert_eq!(expected_path, path),
            other => panic!("expected MissingRequiredField({expected_path}), got {other:?}"),
        }
    }

    #[test]
    fn minimal_tree_resolves_with_defaults() {
        let settings: Settings = Settings::from_tree(&minimal_tree()).expect("valid settings");
        assert_eq!("MyBatis3", settings.target_runtime);
        assert_eq!(PluginSet::default(), settings.plugins);
        assert!(!settings.use_jsr310_types);
        assert!(!settings.disable_example);
        assert_eq!(vec!["order_item".to_string()], settings.tables);
        assert_eq!("shop", settings.datasource.schema);
        assert!(!settings.target_package.colocate_java_and_xml);
    }

    #[test]
    fn wrapped_tree_is_unwrapped() {
        let wrapped: Value = json!({ "mybatisGenerator": minimal_tree() });
        let settings: Settings = Settings::from_tree(&wrapped).expect("valid settings");
        assert_eq!(
            Settings::from_tree(&minimal_tree()).expect("valid settings"),
            settings
        );
    }

    #[test]
    fn wrapped_tree_errors_carry_wrapper_prefix() {
        let mut inner: Value = minimal_tree();
        remove(&mut inner, Some("targetPackage"), "model");
        let wrapped: Value = json!({ "mybatisGenerator": inner });
        assert_missing(
            Settings::from_tree(&wrapped),
            "mybatisGenerator.targetPackage.model",
        );
    }

    #[test]
    fn missing_target_runtime() {
        let mut tree: Value = minimal_tree();
        remove(&mut tree, None, "targetRuntime");
        assert_missing(Settings::from_tree(&tree), "targetRuntime");
    }

    #[test]
    fn missing_model_package() {
        let mut tree: Value = minimal_tree();
        remove(&mut tree, Some("targetPackage"), "model");
        assert_missing(Settings::from_tree(&tree), "targetPackage.model");
    }

    #[test]
    fn missing_same_package_flag_is_required() {
        let mut tree: Value = minimal_tree();
        remove(&mut tree, Some("targetPackage"), "javaXmlFilesSamePackage");
        assert_missing(
            Settings::from_tree(&tree),
            "targetPackage.javaXmlFilesSamePackage",
        );
    }

    #[test]
    fn null_counts_as_missing() {
        let mut tree: Value = minimal_tree();
        tree["datasource"]["address"] = Value::Null;
        assert_missing(Settings::from_tree(&tree), "datasource.address");
    }

    #[test]
    fn missing_datasource_section() {
        let mut tree: Value = minimal_tree();
        remove(&mut tree, None, "datasource");
        assert_missing(Settings::from_tree(&tree), "datasource");
    }

    #[test]
    fn wrong_flag_type_is_reported_with_path() {
        let mut tree: Value = minimal_tree();
        tree["plugins"] = json!({ "swagger": "yes" });
        let err = Settings::from_tree(&tree).unwrap_err();
        assert!(matches!(
            err,
            ConfigGenError::InvalidFieldType { ref path, expected: "a boolean" } if path == "plugins.swagger"
        ));
    }

    #[test]
    fn plugins_section_must_be_mapping() {
        let mut tree: Value = minimal_tree();
        tree["plugins"] = json!(["swagger"]);
        let err = Settings::from_tree(&tree).unwrap_err();
        assert!(matches!(
            err,
            ConfigGenError::InvalidFieldType { ref path, .. } if path == "plugins"
        ));
    }

    #[test]
    fn lombok_flag_accepts_both_spellings() {
        let mut tree: Value = minimal_tree();
        tree["plugins"] = json!({ "lombok": true });
        assert!(Settings::from_tree(&tree).expect("valid").plugins.lombok);

        tree["plugins"] = json!({ "lombokEquivalent": true });
        assert!(Settings::from_tree(&tree).expect("valid").plugins.lombok);
    }

    #[test]
    fn numeric_password_uses_text_form() {
        let mut tree: Value = minimal_tree();
        tree["datasource"]["password"] = json!(123_456);
        let settings: Settings = Settings::from_tree(&tree).expect("valid settings");
        assert_eq!("123456", settings.datasource.password);
    }

    #[test]
    fn empty_table_list() {
        let mut tree: Value = minimal_tree();
        tree["tables"] = json!([]);
        assert!(matches!(
            Settings::from_tree(&tree),
            Err(ConfigGenError::EmptyTableList)
        ));
    }

    #[test]
    fn non_string_table_entry_names_its_index() {
        let mut tree: Value = minimal_tree();
        tree["tables"] = json!(["order_item", 42]);
        let err = Settings::from_tree(&tree).unwrap_err();
        assert!(matches!(
            err,
            ConfigGenError::InvalidFieldType { ref path, expected: "a string" } if path == "tables[1]"
        ));
    }

    #[test]
    fn root_must_be_mapping() {
        let err = Settings::from_tree(&json!(["not", "a", "mapping"])).unwrap_err();
        assert_eq!("settings document must be a mapping", err.to_string());
    }

    #[test]
    fn java8_flag_is_read() {
        let mut tree: Value = minimal_tree();
        tree["java8"] = json!(true);
        assert!(Settings::from_tree(&tree).expect("valid").use_jsr310_types);
    }
}
