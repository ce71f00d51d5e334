//! Settings → generator document.
//!
//! Each section of the `context` element is produced by its own pure
//! function; [`compile_settings`] only composes them in schema order:
//! plugins, `commentGenerator`, `jdbcConnection`, `javaTypeResolver`,
//! `sqlMapGenerator`, `javaClientGenerator`, `javaModelGenerator`, tables.

use crate::connection::{self, ConnectionProfile, ConnectionSpec};
use crate::document::{DocType, Element, GeneratorDocument, ROOT_ELEMENT, property};
use crate::error::ConfigGenError;
use crate::naming::to_upper_camel;
use crate::plugins::{self, PluginSet};
use crate::settings::{PackageMapping, Settings};
use serde_json::Value;

/// `id` attribute of the generated `context` element.
pub const CONTEXT_ID: &str = "simple";

/// Project root for Java sources.
pub const JAVA_PROJECT: &str = "src/main/java";

/// Project root for resources.
pub const RESOURCES_PROJECT: &str = "src/main/resources";

/// Table attributes turning off the `*ByExample` statements.
const DISABLED_EXAMPLE_ATTRIBUTES: [&str; 5] = [
    "enableCountByExample",
    "enableUpdateByExample",
    "enableDeleteByExample",
    "enableSelectByExample",
    "selectByExampleQueryId",
];

/// Compile a loaded settings tree into a generator document.
///
/// # Errors
///
/// Returns the first settings problem (see [`Settings::from_tree`]),
/// `UnsupportedDatabaseType` for an unknown `datasource.type`, or
/// `InvalidIdentifier` for a table name or mapper suffix that cannot be
/// converted to a mapper name. No document is returned on error.
pub fn compile(tree: &Value) -> Result<GeneratorDocument, ConfigGenError> {
    let settings: Settings = Settings::from_tree(tree)?;
    compile_settings(&settings)
}

/// Compile already resolved settings into a generator document.
///
/// # Errors
///
/// Returns `UnsupportedDatabaseType`, `InvalidIdentifier` or `EmptyTableList`.
pub fn compile_settings(settings: &Settings) -> Result<GeneratorDocument, ConfigGenError> {
    let connection: Element = jdbc_connection(&settings.datasource)?;
    let tables: Vec<Element> = table_elements(
        &settings.tables,
        &settings.mapper_suffix,
        settings.disable_example,
    )?;
    let package: &PackageMapping = &settings.target_package;

    let context: Element = Element::new("context")
        .with_attribute("id", CONTEXT_ID)
        .with_attribute("targetRuntime", settings.target_runtime.as_str())
        .with_children(plugin_elements(&settings.plugins))
        .with_child(comment_generator())
        .with_child(connection)
        .with_child(java_type_resolver(settings.use_jsr310_types))
        .with_child(sql_map_generator(package))
        .with_child(java_client_generator(package))
        .with_child(java_model_generator(package))
        .with_children(tables);

    tracing::debug!(
        children = context.children.len(),
        target_runtime = %settings.target_runtime,
        "compiled generator context"
    );

    Ok(GeneratorDocument {
        doctype: DocType::mybatis_generator(),
        root: Element::new(ROOT_ELEMENT).with_child(context),
    })
}

fn plugin_elements(flags: &PluginSet) -> Vec<Element> {
    plugins::assemble(flags)
        .iter()
        .map(plugins::PluginDirective::to_element)
        .collect()
}

/// Generated code carries no MBG comments or timestamps.
fn comment_generator() -> Element {
    Element::new("commentGenerator")
        .with_child(property("suppressAllComments", "true"))
        .with_child(property("suppressDate", "true"))
}

fn jdbc_connection(spec: &ConnectionSpec) -> Result<Element, ConfigGenError> {
    let profile: ConnectionProfile = connection::resolve(spec)?;
    Ok(Element::new("jdbcConnection")
        .with_attribute("driverClass", profile.driver_class)
        .with_attribute("connectionURL", profile.connection_url)
        .with_attribute("userId", spec.username.as_str())
        .with_attribute("password", spec.password.as_str())
        .with_child(property("nullCatalogMeansCurrent", "true")))
}

fn java_type_resolver(use_jsr310_types: bool) -> Element {
    Element::new("javaTypeResolver")
        .with_child(property("forceBigDecimals", "false"))
        .with_child(property("useJSR310Types", &use_jsr310_types.to_string()))
}

fn sql_map_generator(package: &PackageMapping) -> Element {
    let target_project: &str = if package.colocate_java_and_xml {
        JAVA_PROJECT
    } else {
        RESOURCES_PROJECT
    };
    Element::new("sqlMapGenerator")
        .with_attribute("targetPackage", package.mapper_package.as_str())
        .with_attribute("targetProject", target_project)
}

fn java_client_generator(package: &PackageMapping) -> Element {
    Element::new("javaClientGenerator")
        .with_attribute("type", "XMLMAPPER")
        .with_attribute("targetPackage", package.xml_mapper_package.as_str())
        .with_attribute("targetProject", RESOURCES_PROJECT)
}

fn java_model_generator(package: &PackageMapping) -> Element {
    Element::new("javaModelGenerator")
        .with_attribute("targetPackage", package.model_package.as_str())
        .with_attribute("targetProject", JAVA_PROJECT)
}

/// `UpperCamel(table) + UpperCamel(suffix)`. The suffix is lower-cased first so
/// the usual `Mapper` / `DAO` spellings are accepted.
fn mapper_name(table_name: &str, mapper_suffix: &str) -> Result<String, ConfigGenError> {
    let table: String = to_upper_camel(table_name)?;
    let suffix: String = to_upper_camel(&mapper_suffix.to_ascii_lowercase())?;
    Ok(format!("{table}{suffix}"))
}

fn table_element(
    table_name: &str,
    mapper_suffix: &str,
    disable_example: bool,
) -> Result<Element, ConfigGenError> {
    let element: Element = Element::new("table")
        .with_attribute("tableName", table_name)
        .with_attribute("mapperName", mapper_name(table_name, mapper_suffix)?);
    if !disable_example {
        return Ok(element);
    }
    Ok(DISABLED_EXAMPLE_ATTRIBUTES
        .iter()
        .fold(element, |table, name| table.with_attribute(*name, "false")))
}

fn table_elements(
    tables: &[String],
    mapper_suffix: &str,
    disable_example: bool,
) -> Result<Vec<Element>, ConfigGenError> {
    if tables.is_empty() {
        return Err(ConfigGenError::EmptyTableList);
    }
    tables
        .iter()
        .map(|table_name| table_element(table_name, mapper_suffix, disable_example))
        .collect()
}
