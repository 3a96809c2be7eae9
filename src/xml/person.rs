use std::io::Write;

use quick_xml::Writer;

use super::{required_text, write_leaf, Element, XmlEntity, XmlError};
use crate::models::{Participant, Person};

impl XmlEntity for Person {
    const ELEMENT: &'static str = "person";

    fn write_fields<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), XmlError> {
        write_leaf(writer, "firstName", self.first_name())?;
        write_leaf(writer, "lastName", self.last_name())?;
        write_leaf(writer, "email", self.email())?;
        Ok(())
    }

    fn read_fields(element: &Element) -> Result<Self, XmlError> {
        let person = Person::new(
            required_text(element, "firstName")?,
            required_text(element, "lastName")?,
            required_text(element, "email")?,
        )?;
        Ok(person)
    }
}
