use std::io::Write;

use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;

use super::{required_text, write_leaf, Element, XmlEntity, XmlError};
use crate::models::{Person, Team};

const MEMBERS: &str = "members";

impl XmlEntity for Team {
    const ELEMENT: &'static str = "team";

    fn write_fields<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), XmlError> {
        write_leaf(writer, "name", self.name())?;

        let members = self.members();
        if members.is_empty() {
            writer.write_event(Event::Empty(BytesStart::new(MEMBERS)))?;
            return Ok(());
        }

        writer.write_event(Event::Start(BytesStart::new(MEMBERS)))?;
        for member in &members {
            member.write_element(writer)?;
        }
        writer.write_event(Event::End(BytesEnd::new(MEMBERS)))?;
        Ok(())
    }

    fn read_fields(element: &Element) -> Result<Self, XmlError> {
        let mut team = Team::new(required_text(element, "name")?)?;

        // A missing wrapper means no members.
        if let Some(wrapper) = element.child(MEMBERS) {
            for child in &wrapper.children {
                team.add_member(Person::read_element(child)?);
            }
        }
        Ok(team)
    }
}
