//! Hand-written XML encoding for the annotated entities.
//!
//! Every entity maps to one element whose children are its fields, written in a fixed
//! order. Decoding looks children up by name and runs the same validation as the entity's
//! constructor, so a document that decodes is always a valid entity.
//!
//! | Entity           | Root element     | Children                                          |
//! |------------------|------------------|---------------------------------------------------|
//! | [`ProductStory`] | `<productStory>` | `id, title, description, createDate, estimated,`  |
//! |                  |                  | `priority, requester, requirementKind`            |
//! | [`Team`]         | `<team>`         | `name`, `<members>` wrapping `<person>` elements  |
//! | [`Person`]       | `<person>`       | `firstName, lastName, email`                      |
//!
//! [`ProductStory`]: crate::models::ProductStory
//! [`Team`]: crate::models::Team
//! [`Person`]: crate::models::Person

mod element;
mod person;
mod story;
mod team;

use std::io::{Read, Write};

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use thiserror::Error;

use crate::error::CoreError;
use crate::validation::check_object_not_null;

pub use element::Element;

/// Errors produced while encoding or decoding XML documents.
#[derive(Debug, Error)]
pub enum XmlError {
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed document: {0}")]
    Malformed(String),

    #[error(transparent)]
    Invalid(#[from] CoreError),
}

/// An entity with an XML element representation.
pub trait XmlEntity: Sized {
    /// Name of the element representing the entity.
    const ELEMENT: &'static str;

    /// Writes the child elements, in wire order.
    fn write_fields<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), XmlError>;

    /// Builds the entity from an element already known to be named [`Self::ELEMENT`].
    fn read_fields(element: &Element) -> Result<Self, XmlError>;

    fn write_element<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), XmlError> {
        writer.write_event(Event::Start(BytesStart::new(Self::ELEMENT)))?;
        self.write_fields(writer)?;
        writer.write_event(Event::End(BytesEnd::new(Self::ELEMENT)))?;
        Ok(())
    }

    fn read_element(element: &Element) -> Result<Self, XmlError> {
        if element.name != Self::ELEMENT {
            return Err(XmlError::Malformed(format!(
                "expected <{}>, found <{}>",
                Self::ELEMENT,
                element.name
            )));
        }
        Self::read_fields(element)
    }

    /// Writes a complete, indented document including the XML declaration.
    fn write_to<W: Write>(&self, out: W) -> Result<(), XmlError> {
        let mut writer = Writer::new_with_indent(out, b' ', 4);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
        self.write_element(&mut writer)
    }

    fn to_xml(&self) -> Result<String, XmlError> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;
        String::from_utf8(buf).map_err(|e| XmlError::Malformed(e.to_string()))
    }

    fn from_xml(xml: &str) -> Result<Self, XmlError> {
        let root = Element::parse(xml)?;
        let entity = Self::read_element(&root);
        if let Err(e) = &entity {
            tracing::debug!(element = Self::ELEMENT, error = %e, "rejected xml document");
        }
        entity
    }

    fn read_from<R: Read>(mut input: R) -> Result<Self, XmlError> {
        let mut xml = String::new();
        input.read_to_string(&mut xml)?;
        Self::from_xml(&xml)
    }
}

/// Writes `<name>value</name>`, or `<name/>` for an empty value.
pub(crate) fn write_leaf<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    value: &str,
) -> Result<(), XmlError> {
    if value.is_empty() {
        writer.write_event(Event::Empty(BytesStart::new(name)))?;
        return Ok(());
    }
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(value)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Text of a required child element. A missing child is an invalid (null) argument.
pub(crate) fn required_text<'a>(element: &'a Element, name: &str) -> Result<&'a str, XmlError> {
    let text = check_object_not_null(
        element.child_text(name),
        &format!("{} has to be not null!", name),
    )?;
    Ok(text)
}

/// Parses the text of a required child element with `parse`.
pub(crate) fn required_value<T, F>(element: &Element, name: &str, parse: F) -> Result<T, XmlError>
where
    F: FnOnce(&str) -> Option<T>,
{
    let text = required_text(element, name)?;
    parse(text.trim()).ok_or_else(|| {
        XmlError::Malformed(format!("<{}> has an unreadable value '{}'", name, text))
    })
}
