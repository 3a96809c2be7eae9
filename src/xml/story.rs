use std::io::Write;

use chrono::{DateTime, SecondsFormat, Utc};
use quick_xml::Writer;

use super::{required_text, required_value, write_leaf, Element, XmlEntity, XmlError};
use crate::models::{Effort, Priority, ProductStory, Requirement, RequirementKind, StoryInput};

impl XmlEntity for ProductStory {
    const ELEMENT: &'static str = "productStory";

    fn write_fields<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), XmlError> {
        write_leaf(writer, "id", &self.id().to_string())?;
        write_leaf(writer, "title", self.title())?;
        write_leaf(writer, "description", self.description())?;
        write_leaf(
            writer,
            "createDate",
            &self.create_date().to_rfc3339_opts(SecondsFormat::AutoSi, true),
        )?;
        write_leaf(writer, "estimated", &self.estimated().to_string())?;
        write_leaf(writer, "priority", self.priority().as_str())?;
        write_leaf(writer, "requester", self.requester())?;
        write_leaf(writer, "requirementKind", self.requirement_kind().as_str())?;
        Ok(())
    }

    fn read_fields(element: &Element) -> Result<Self, XmlError> {
        let input = StoryInput {
            id: required_value(element, "id", |s| s.parse().ok())?,
            title: required_text(element, "title")?.to_string(),
            description: required_text(element, "description")?.to_string(),
            estimated: required_value(element, "estimated", |s| s.parse().ok())?,
            priority: required_value(element, "priority", Priority::from_str)?,
            requester: required_text(element, "requester")?.to_string(),
            requirement_kind: required_value(element, "requirementKind", RequirementKind::from_str)?,
        };
        let create_date = required_value(element, "createDate", |s| {
            DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|d| d.with_timezone(&Utc))
        })?;

        Ok(ProductStory::with_create_date(input, create_date)?)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::CoreError;

    const DOCUMENT: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<productStory>
    <id>42</id>
    <title>Login</title>
    <description/>
    <createDate>2011-05-01T12:00:00.250+02:00</createDate>
    <estimated>3.5</estimated>
    <priority>BLOCKER</priority>
    <requester>alice</requester>
    <requirementKind>BUG</requirementKind>
</productStory>"#;

    #[test]
    fn decodes_existing_document() {
        let story = ProductStory::from_xml(DOCUMENT).unwrap();
        assert_eq!(story.id(), 42);
        assert_eq!(story.description(), "");
        assert_eq!(story.priority(), Priority::Blocker);
        assert_eq!(story.requirement_kind(), RequirementKind::Bug);
        assert_eq!(
            story.create_date(),
            Utc.with_ymd_and_hms(2011, 5, 1, 10, 0, 0).unwrap()
                + chrono::Duration::milliseconds(250)
        );
    }

    #[test]
    fn missing_field_is_an_invalid_argument() {
        let xml = DOCUMENT.replace("<requester>alice</requester>", "");
        let err = ProductStory::from_xml(&xml).unwrap_err();
        assert!(matches!(
            err,
            XmlError::Invalid(CoreError::InvalidArgument(ref m)) if m == "requester has to be not null!"
        ));
    }

    #[test]
    fn negative_id_is_an_invalid_argument() {
        let xml = DOCUMENT.replace("<id>42</id>", "<id>-3</id>");
        assert!(matches!(
            ProductStory::from_xml(&xml),
            Err(XmlError::Invalid(CoreError::InvalidArgument(_)))
        ));
    }

    #[test]
    fn unknown_priority_is_malformed() {
        let xml = DOCUMENT.replace("BLOCKER", "CRITICAL");
        assert!(matches!(
            ProductStory::from_xml(&xml),
            Err(XmlError::Malformed(_))
        ));
    }

    #[test]
    fn wrong_root_is_malformed() {
        let err = ProductStory::from_xml("<team><name>x</name></team>").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Malformed document: expected <productStory>, found <team>"
        );
    }
}
