use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::validation::check_string_not_blank;

/// Identity of someone taking part in a project or team.
pub trait Participant {
    fn first_name(&self) -> &str;
    fn last_name(&self) -> &str;
    fn email(&self) -> &str;

    fn full_name(&self) -> String {
        format!("{} {}", self.first_name(), self.last_name())
    }
}

/// A project participant.
///
/// Persons are plain values: teams and projects hold their own copies and never manage a
/// person's lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "PersonRecord")]
pub struct Person {
    first_name: String,
    last_name: String,
    email: String,
}

impl Person {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self> {
        let first_name = first_name.into();
        let last_name = last_name.into();
        let email = email.into();
        check_string_not_blank(&first_name, "first name has to be not blank!")?;
        check_string_not_blank(&last_name, "last name has to be not blank!")?;
        check_string_not_blank(&email, "e-mail has to be not blank!")?;
        Ok(Self {
            first_name,
            last_name,
            email,
        })
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) -> Result<()> {
        let first_name = first_name.into();
        check_string_not_blank(&first_name, "first name has to be not blank!")?;
        self.first_name = first_name;
        Ok(())
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) -> Result<()> {
        let last_name = last_name.into();
        check_string_not_blank(&last_name, "last name has to be not blank!")?;
        self.last_name = last_name;
        Ok(())
    }

    pub fn set_email(&mut self, email: impl Into<String>) -> Result<()> {
        let email = email.into();
        check_string_not_blank(&email, "e-mail has to be not blank!")?;
        self.email = email;
        Ok(())
    }
}

impl Participant for Person {
    fn first_name(&self) -> &str {
        &self.first_name
    }

    fn last_name(&self) -> &str {
        &self.last_name
    }

    fn email(&self) -> &str {
        &self.email
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Person[firstName={},lastName={},email={}]",
            self.first_name, self.last_name, self.email
        )
    }
}

/// Unvalidated wire shape of a [`Person`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersonRecord {
    first_name: String,
    last_name: String,
    email: String,
}

impl TryFrom<PersonRecord> for Person {
    type Error = CoreError;

    fn try_from(record: PersonRecord) -> Result<Self> {
        Person::new(record.first_name, record.last_name, record.email)
    }
}
