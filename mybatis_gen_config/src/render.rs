//! XML rendering of a [`GeneratorDocument`].
//!
//! Output: XML declaration, DOCTYPE, then the element tree indented by four
//! spaces. Childless elements are self-closing and attribute values are
//! escaped by `quick-xml`.

use crate::document::{DocType, Element, GeneratorDocument};
use crate::error::ConfigGenError;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::Write;

const INDENT_WIDTH: usize = 4;

fn doctype_content(doctype: &DocType) -> String {
    format!(
        "{} PUBLIC \"{}\" \"{}\"",
        doctype.root_name, doctype.public_id, doctype.system_id
    )
}

fn write_element<W: Write>(xml: &mut Writer<W>, element: &Element) -> Result<(), ConfigGenError> {
    let mut start: BytesStart<'_> = BytesStart::new(element.name.as_str());
    for (name, value) in &element.attributes {
        start.push_attribute((name.as_str(), value.as_str()));
    }
    if element.children.is_empty() {
        xml.write_event(Event::Empty(start))?;
        return Ok(());
    }
    xml.write_event(Event::Start(start))?;
    for child in &element.children {
        write_element(xml, child)?;
    }
    xml.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;
    Ok(())
}

/// Render `document` as indented XML to `writer`.
///
/// # Errors
///
/// Returns `ConfigGenError` if writing to `writer` fails.
pub fn render_to_writer<W: Write>(
    document: &GeneratorDocument,
    writer: &mut W,
) -> Result<(), ConfigGenError> {
    let mut xml: Writer<&mut W> = Writer::new_with_indent(writer, b' ', INDENT_WIDTH);
    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    xml.write_event(Event::DocType(BytesText::from_escaped(doctype_content(
        &document.doctype,
    ))))?;
    write_element(&mut xml, &document.root)?;
    xml.into_inner().write_all(b"\n")?;
    Ok(())
}
