//! Compile a YAML settings file into a `MyBatis` Generator XML configuration.
//!
//! The pipeline is: settings text → settings tree ([`load_settings_tree`]) →
//! typed [`Settings`] → [`GeneratorDocument`] ([`compile`]) → XML
//! ([`render_to_writer`]).

mod compiler;
mod connection;
mod document;
mod error;
mod field_path;
mod loader;
mod naming;
mod plugins;
mod render;
mod settings;

pub use compiler::{compile, compile_settings};
pub use connection::{ConnectionProfile, ConnectionSpec, VENDOR_TEMPLATES, VendorTemplate, resolve};
pub use document::{DocType, Element, GeneratorDocument, property};
pub use error::ConfigGenError;
pub use loader::load_settings_tree;
pub use naming::to_upper_camel;
pub use plugins::{PluginDirective, PluginSet, assemble};
pub use render::render_to_writer;
pub use settings::{PackageMapping, Settings};

use std::io::Write;
use std::path::Path;

/// Compile a settings document (YAML text) and write the XML configuration to `writer`.
///
/// The writer can be any type implementing `Write`, such as `File`, `Vec<u8>`, or
/// `Cursor<Vec<u8>>`, enabling easy unit testing without file system interaction.
/// Nothing is written unless compilation succeeds.
///
/// # Errors
///
/// Returns `ConfigGenError` if the settings are not valid YAML, a required
/// field is missing or mistyped, the database type or an identifier is not
/// supported, or writing to the writer fails.
pub fn generate_to_writer<W: Write>(
    settings_source: &str,
    writer: &mut W,
) -> Result<(), ConfigGenError> {
    let tree: serde_json::Value = load_settings_tree(settings_source)?;
    let document: GeneratorDocument = compile(&tree)?;
    render_to_writer(&document, writer)
}

/// Compile a settings file and write the XML configuration to an output file.
///
/// The output file is only created once compilation has succeeded.
///
/// # Errors
///
/// Returns `ConfigGenError` if reading the input file fails, compilation
/// fails, or writing the output file fails.
pub fn generate_from_file(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
) -> Result<(), ConfigGenError> {
    let settings_source: String = std::fs::read_to_string(input_path)?;
    let mut rendered: Vec<u8> = Vec::new();
    generate_to_writer(&settings_source, &mut rendered)?;
    std::fs::write(output_path, rendered)?;
    Ok(())
}
