use chrono::{TimeZone, Utc};
use jgility_core::models::*;
use jgility_core::xml::{XmlEntity, XmlError};
use jgility_core::CoreError;
use speculate2::speculate;

fn story() -> ProductStory {
    let input = StoryInput {
        id: 7,
        title: "Export <backlog> & print".to_string(),
        description: "  ".to_string(),
        estimated: 2.25,
        priority: Priority::Major,
        requester: "alice".to_string(),
        requirement_kind: RequirementKind::Feature,
    };
    let created = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap()
        + chrono::Duration::nanoseconds(123_456_789);
    ProductStory::with_create_date(input, created).expect("Failed to create story")
}

fn person(first: &str, last: &str) -> Person {
    Person::new(first, last, format!("{}@example.org", first.to_lowercase()))
        .expect("Failed to create person")
}

speculate! {
    describe "product story" {
        it "writes fields in wire order" {
            let xml = story().to_xml().expect("Failed to encode");

            let order = [
                "<id>", "<title>", "<description>", "<createDate>", "<estimated>",
                "<priority>", "<requester>", "<requirementKind>",
            ];
            let positions: Vec<usize> = order
                .iter()
                .map(|tag| xml.find(tag).unwrap_or_else(|| panic!("{} missing in {}", tag, xml)))
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));

            assert!(xml.starts_with("<?xml"));
            assert!(xml.contains("<productStory>"));
            assert!(xml.contains("<priority>MAJOR</priority>"));
            assert!(xml.contains("<requirementKind>FEATURE</requirementKind>"));
            assert!(xml.contains("Export &lt;backlog&gt; &amp; print"));
        }

        it "decodes to an equal story" {
            let original = story();
            let xml = original.to_xml().expect("Failed to encode");
            let decoded = ProductStory::from_xml(&xml).expect("Failed to decode");

            assert_eq!(decoded, original);
            assert_eq!(decoded.description(), "  ");
            assert_eq!(decoded.create_date(), original.create_date());
        }

        it "reads from any reader" {
            let original = story();
            let mut buf = Vec::new();
            original.write_to(&mut buf).expect("Failed to write");

            let decoded = ProductStory::read_from(buf.as_slice()).expect("Failed to read");
            assert_eq!(decoded, original);
        }

        it "rejects a blank title" {
            let xml = story().to_xml().unwrap().replace("Export &lt;backlog&gt; &amp; print", " ");
            assert!(matches!(
                ProductStory::from_xml(&xml),
                Err(XmlError::Invalid(CoreError::InvalidArgument(_)))
            ));
        }

        it "rejects an unreadable estimate" {
            let xml = story().to_xml().unwrap().replace("<estimated>2.25</estimated>", "<estimated>lots</estimated>");
            assert!(matches!(ProductStory::from_xml(&xml), Err(XmlError::Malformed(_))));
        }
    }

    describe "team" {
        before {
            let mut team = Team::new("Avengers").expect("Failed to create team");
        }

        it "wraps members" {
            team.add_member(person("Ada", "Lovelace"));
            team.add_member(person("Alan", "Turing"));

            let xml = team.to_xml().expect("Failed to encode");
            assert!(xml.contains("<name>Avengers</name>"));
            assert!(xml.contains("<members>"));
            assert_eq!(xml.matches("<person>").count(), 2);
            assert!(xml.contains("<firstName>Ada</firstName>"));

            let decoded = Team::from_xml(&xml).expect("Failed to decode");
            assert_eq!(decoded, team);
        }

        it "writes an empty wrapper without members" {
            let xml = team.to_xml().expect("Failed to encode");
            assert!(xml.contains("<members/>"));
            assert_eq!(Team::from_xml(&xml).unwrap(), team);
        }

        it "treats a missing wrapper as no members" {
            let decoded = Team::from_xml("<team><name>Avengers</name></team>").unwrap();
            assert_eq!(decoded, team);
        }

        it "rejects a missing name" {
            let err = Team::from_xml("<team><members/></team>").unwrap_err();
            assert_eq!(err.to_string(), "Invalid argument: name has to be not null!");
        }

        it "rejects unknown member elements" {
            let xml = "<team><name>A</name><members><robot/></members></team>";
            assert!(matches!(Team::from_xml(xml), Err(XmlError::Malformed(_))));
        }

        it "rejects an invalid member" {
            let xml = "<team><name>A</name><members><person><firstName>Ada</firstName>\
                       <lastName></lastName><email>a@example.org</email></person></members></team>";
            assert!(matches!(
                Team::from_xml(xml),
                Err(XmlError::Invalid(CoreError::InvalidArgument(_)))
            ));
        }
    }

    describe "person" {
        it "round trips through its own element" {
            let ada = person("Ada", "Lovelace");
            let xml = ada.to_xml().expect("Failed to encode");
            assert!(xml.contains("<person>"));
            assert_eq!(Person::from_xml(&xml).unwrap(), ada);
        }
    }
}
