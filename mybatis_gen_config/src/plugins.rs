//! Plugin directives contributed by the `plugins` feature flags.

use crate::document::{Element, property};
use serde::Serialize;

/// Plugin that makes regenerated XML mappers overwrite instead of merge.
/// Always emitted, ahead of every optional plugin.
pub const UNMERGEABLE_XML_MAPPERS_PLUGIN: &str =
    "org.mybatis.generator.plugins.UnmergeableXmlMappersPlugin";
pub const SWAGGER_PLUGIN: &str = "Swagger2Plugin";
pub const LOMBOK_PLUGIN: &str = "LombokPlugin";
pub const COMMENT_PLUGIN: &str = "CommentPlugin";
pub const SERIALIZABLE_PLUGIN: &str = "org.mybatis.generator.plugins.SerializablePlugin";
pub const MAPPER_ANNOTATION_PLUGIN: &str = "org.mybatis.generator.plugins.MapperAnnotationPlugin";

/// Feature flags from the `plugins` settings section. Absent flags are `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
#[expect(clippy::struct_excessive_bools)]
pub struct PluginSet {
    /// Copy database column comments onto model fields.
    pub comment: bool,
    /// Lombok annotations on models (`lombok` or `lombokEquivalent`).
    pub lombok: bool,
    /// Swagger 2 `@ApiModel` / `@ApiModelProperty` annotations on models.
    pub swagger: bool,
    pub serializable: bool,
    /// `@Mapper` on generated mapper interfaces.
    pub mapper_annotation: bool,
}

/// One `<plugin>` element: a plugin type and its name/value properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginDirective {
    pub plugin_type: &'static str,
    pub properties: Vec<(&'static str, &'static str)>,
}

impl PluginDirective {
    fn bare(plugin_type: &'static str) -> Self {
        Self {
            plugin_type,
            properties: Vec::new(),
        }
    }

    fn with_properties(
        plugin_type: &'static str,
        properties: &[(&'static str, &'static str)],
    ) -> Self {
        Self {
            plugin_type,
            properties: properties.to_vec(),
        }
    }

    /// `<plugin type="…">` with one `<property>` child per property.
    #[must_use]
    pub fn to_element(&self) -> Element {
        Element::new("plugin")
            .with_attribute("type", self.plugin_type)
            .with_children(
                self.properties
                    .iter()
                    .map(|(name, value)| property(name, value)),
            )
    }
}

/// Build the ordered plugin list for a flag set.
///
/// The mandatory unmergeable-mappers plugin comes first, then, each only when
/// its flag is set: swagger, lombok, comment, serializable, mapper annotation.
#[must_use]
pub fn assemble(flags: &PluginSet) -> Vec<PluginDirective> {
    let optional: [(bool, PluginDirective); 5] = [
        (
            flags.swagger,
            PluginDirective::with_properties(
                SWAGGER_PLUGIN,
                &[
                    ("apiModelAnnotationPackage", "io.swagger.annotations.ApiModel"),
                    (
                        "apiModelPropertyAnnotationPackage",
                        "io.swagger.annotations.ApiModelProperty",
                    ),
                ],
            ),
        ),
        (
            flags.lombok,
            PluginDirective::with_properties(LOMBOK_PLUGIN, &[("hasLombok", "true")]),
        ),
        (
            flags.comment,
            PluginDirective::with_properties(COMMENT_PLUGIN, &[("hasComment", "true")]),
        ),
        (
            flags.serializable,
            PluginDirective::bare(SERIALIZABLE_PLUGIN),
        ),
        (
            flags.mapper_annotation,
            PluginDirective::bare(MAPPER_ANNOTATION_PLUGIN),
        ),
    ];

    std::iter::once(PluginDirective::bare(UNMERGEABLE_XML_MAPPERS_PLUGIN))
        .chain(
            optional
                .into_iter()
                .filter_map(|(enabled, directive)| enabled.then_some(directive)),
        )
        .collect()
}
