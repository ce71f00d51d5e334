use crate::connection::VENDOR_TEMPLATES;
use std::error;
use std::fmt;

/// Error type for settings resolution, compilation and rendering.
///
/// Every variant is terminal for the current compilation: no partial
/// document is produced once one of these is returned.
#[derive(Debug)]
pub enum ConfigGenError {
    /// A required settings field is absent (or `null`).
    MissingRequiredField { path: String },

    /// A settings field is present but has the wrong shape.
    InvalidFieldType {
        path: String,
        expected: &'static str,
    },

    /// `datasource.type` names no known vendor template.
    UnsupportedDatabaseType(String),

    /// An identifier is not a lower-case, underscore-delimited token.
    InvalidIdentifier(String),

    /// `tables` is present but holds no table names.
    EmptyTableList,

    /// I/O error (e.g., reading the settings file, writing the output file).
    IoError(std::io::Error),

    /// YAML (or JSON) parsing error in the settings source.
    YamlError(serde_yaml::Error),

    /// JSON serialization error (resolved settings output).
    JsonError(serde_json::Error),

    /// XML writer error while rendering the document.
    XmlError(quick_xml::Error),
}

impl error::Error for ConfigGenError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::IoError(io_error) => Some(io_error),
            Self::YamlError(yaml_error) => Some(yaml_error),
            Self::JsonError(json_error) => Some(json_error),
            Self::XmlError(xml_error) => Some(xml_error),
            _ => None,
        }
    }
}

impl fmt::Display for ConfigGenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRequiredField { path } => {
                write!(f, "missing required field `{path}`")
            }
            Self::InvalidFieldType { path, expected } if path.is_empty() => {
                write!(f, "settings document must be {expected}")
            }
            Self::InvalidFieldType { path, expected } => {
                write!(f, "field `{path}` must be {expected}")
            }
            Self::UnsupportedDatabaseType(value) => {
                let supported: Vec<&str> = VENDOR_TEMPLATES.iter().map(|t| t.db_type).collect();
                write!(
                    f,
                    "unsupported database type \"{value}\" (expected one of: {})",
                    supported.join(", ")
                )
            }
            Self::InvalidIdentifier(value) => write!(
                f,
                "invalid identifier \"{value}\" (expected lower-case words separated by `_`)"
            ),
            Self::EmptyTableList => write!(f, "field `tables` must list at least one table"),
            Self::IoError(io_error) => fmt::Display::fmt(io_error, f),
            Self::YamlError(yaml_error) => fmt::Display::fmt(yaml_error, f),
            Self::JsonError(json_error) => fmt::Display::fmt(json_error, f),
            Self::XmlError(xml_error) => fmt::Display::fmt(xml_error, f),
        }
    }
}

impl From<std::io::Error> for ConfigGenError {
    fn from(io_error: std::io::Error) -> Self {
        Self::IoError(io_error)
    }
}

impl From<serde_yaml::Error> for ConfigGenError {
    fn from(yaml_error: serde_yaml::Error) -> Self {
        Self::YamlError(yaml_error)
    }
}

impl From<serde_json::Error> for ConfigGenError {
    fn from(json_error: serde_json::Error) -> Self {
        Self::JsonError(json_error)
    }
}

impl From<quick_xml::Error> for ConfigGenError {
    fn from(xml_error: quick_xml::Error) -> Self {
        Self::XmlError(xml_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_names_path() {
        let err = ConfigGenError::MissingRequiredField {
            path: "targetPackage.model".to_string(),
        };
        let expected: &str = "missing required field `targetPackage.model`";
        assert_eq!(expected, err.to_string());
    }

    #[test]
    fn invalid_type_names_path_and_expectation() {
        let err = ConfigGenError::InvalidFieldType {
            path: "plugins.swagger".to_string(),
            expected: "a boolean",
        };
        let expected: &str = "field `plugins.swagger` must be a boolean";
        assert_eq!(expected, err.to_string());
    }

    #[test]
    fn unsupported_database_lists_known_vendors() {
        let err = ConfigGenError::UnsupportedDatabaseType("db2".to_string());
        let expected: &str =
            "unsupported database type \"db2\" (expected one of: mysql, sqlserver, oracle)";
        assert_eq!(expected, err.to_string());
    }

    #[test]
    fn io_error_is_exposed_as_source() {
        let err: ConfigGenError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(error::Error::source(&err).is_some());
        assert_eq!("gone", err.to_string());
    }
}
