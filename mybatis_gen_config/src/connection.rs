//! Per-vendor JDBC driver and URL templates.

use crate::error::ConfigGenError;
use serde::Serialize;

/// Database connection as written in the `datasource` settings section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionSpec {
    /// Vendor tag, e.g. `mysql`. Checked against [`VENDOR_TEMPLATES`] by [`resolve`].
    pub db_type: String,
    /// Host, optionally with port.
    pub address: String,
    /// Database (schema, service or SID) name.
    pub schema: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}

/// Driver class and connection URL for one datasource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionProfile {
    pub driver_class: String,
    pub connection_url: String,
}

/// One vendor entry: `url = url_prefix + address + url_infix + schema`.
#[derive(Debug)]
pub struct VendorTemplate {
    pub db_type: &'static str,
    pub driver_class: &'static str,
    pub url_prefix: &'static str,
    pub url_infix: &'static str,
}

impl VendorTemplate {
    fn connection_url(&self, address: &str, schema: &str) -> String {
        format!("{}{address}{}{schema}", self.url_prefix, self.url_infix)
    }
}

/// Supported vendors, keyed by `db_type`.
pub const VENDOR_TEMPLATES: &[VendorTemplate] = &[
    VendorTemplate {
        db_type: "mysql",
        driver_class: "com.mysql.cj.jdbc.Driver",
        url_prefix: "jdbc:mysql://",
        url_infix: "/",
    },
    VendorTemplate {
        db_type: "sqlserver",
        driver_class: "com.microsoft.sqlserver.jdbc.SQLServerDriver",
        url_prefix: "jdbc:sqlserver://",
        url_infix: ";DatabaseName=",
    },
    VendorTemplate {
        db_type: "oracle",
        driver_class: "oracle.jdbc.driver.OracleDriver",
        url_prefix: "jdbc:oracle:thin:@",
        url_infix: ":",
    },
];

/// Resolve the driver class and connection URL for a datasource.
///
/// # Errors
///
/// Returns `ConfigGenError::UnsupportedDatabaseType` if `spec.db_type` matches
/// no entry of [`VENDOR_TEMPLATES`].
pub fn resolve(spec: &ConnectionSpec) -> Result<ConnectionProfile, ConfigGenError> {
    let template: &VendorTemplate = VENDOR_TEMPLATES
        .iter()
        .find(|t| t.db_type == spec.db_type)
        .ok_or_else(|| ConfigGenError::UnsupportedDatabaseType(spec.db_type.clone()))?;
    Ok(ConnectionProfile {
        driver_class: template.driver_class.to_string(),
        connection_url: template.connection_url(&spec.address, &spec.schema),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(db_type: &str) -> ConnectionSpec {
        ConnectionSpec {
            db_type: db_type.to_string(),
            address: "db.internal:1521".to_string(),
            schema: "orders".to_string(),
            username: "app".to_string(),
            password: "pw".to_string(),
        }
    }

    #[test]
    fn resolve_mysql() {
        let actual: ConnectionProfile = resolve(&spec("mysql")).expect("mysql is supported");
        let expected = ConnectionProfile {
            driver_class: "com.mysql.cj.jdbc.Driver".to_string(),
            connection_url: "jdbc:mysql://db.internal:1521/orders".to_string(),
        };
        assert_eq!(expected, actual);
    }

    #[test]
    fn resolve_sqlserver() {
        let actual: ConnectionProfile =
            resolve(&spec("sqlserver")).expect("sqlserver is supported");
        let expected = ConnectionProfile {
            driver_class: "com.microsoft.sqlserver.jdbc.SQLServerDriver".to_string(),
            connection_url: "jdbc:sqlserver://db.internal:1521;DatabaseName=orders".to_string(),
        };
        assert_eq!(expected, actual);
    }

    #[test]
    fn resolve_oracle() {
        let actual: ConnectionProfile = resolve(&spec("oracle")).expect("oracle is supported");
        let expected = ConnectionProfile {
            driver_class: "oracle.jdbc.driver.OracleDriver".to_string(),
            connection_url: "jdbc:oracle:thin:@db.internal:1521:orders".to_string(),
        };
        assert_eq!(expected, actual);
    }

    #[test]
    fn every_template_embeds_address_and_schema() {
        for template in VENDOR_TEMPLATES {
            let profile: ConnectionProfile =
                resolve(&spec(template.db_type)).expect("listed vendor resolves");
            let address_at: usize = profile
                .connection_url
                .find("db.internal:1521")
                .expect("address present");
            let schema_at: usize = profile.connection_url.rfind("orders").expect("schema present");
            assert!(address_at < schema_at, "{}", template.db_type);
        }
    }

    #[test]
    fn resolve_unknown_vendor_fails() {
        let err = resolve(&spec("postgres")).unwrap_err();
        assert!(matches!(err, ConfigGenError::UnsupportedDatabaseType(ref v) if v == "postgres"));
    }

    #[test]
    fn resolve_is_case_sensitive() {
        assert!(resolve(&spec("MySQL")).is_err());
    }
}
