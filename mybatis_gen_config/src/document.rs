//! The generator document: an ordered element tree plus the DOCTYPE metadata
//! the renderer needs to declare it.

/// Root element name of a `MyBatis` Generator configuration.
pub const ROOT_ELEMENT: &str = "generatorConfiguration";

/// Public identifier of the `MyBatis` Generator configuration DTD.
pub const DTD_PUBLIC_ID: &str = "-//mybatis.org//DTD MyBatis Generator Configuration 1.0//EN";

/// System identifier of the `MyBatis` Generator configuration DTD.
pub const DTD_SYSTEM_ID: &str = "http://mybatis.org/dtd/mybatis-generator-config_1_0.dtd";

/// Document type declaration: `<!DOCTYPE root PUBLIC "public_id" "system_id">`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocType {
    pub root_name: String,
    pub public_id: String,
    pub system_id: String,
}

impl DocType {
    /// The `MyBatis` Generator configuration 1.0 DOCTYPE.
    #[must_use]
    pub fn mybatis_generator() -> Self {
        Self {
            root_name: ROOT_ELEMENT.to_string(),
            public_id: DTD_PUBLIC_ID.to_string(),
            system_id: DTD_SYSTEM_ID.to_string(),
        }
    }
}

/// An XML element with ordered attributes and ordered children.
///
/// Built by value: each `with_*` call consumes the element and returns it
/// extended, so finished sub-trees are composed rather than mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Element>,
}

impl Element {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Append an attribute. Attribute order is preserved in the output.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    /// Value of the first attribute called `name`.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Children called `name`, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |child| child.name == name)
    }
}

/// `<property name="…" value="…"/>`, the name/value pair used throughout the
/// generator configuration schema.
#[must_use]
pub fn property(name: &str, value: &str) -> Element {
    Element::new("property")
        .with_attribute("name", name)
        .with_attribute("value", value)
}

/// A complete generator configuration, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorDocument {
    pub doctype: DocType,
    pub root: Element,
}

impl GeneratorDocument {
    /// The single `context` element under the root, if present.
    #[must_use]
    pub fn context(&self) -> Option<&Element> {
        self.root.children_named("context").next()
    }
}
