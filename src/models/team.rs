use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::change::{ChangeSupport, ListenerId, PropertyChange};
use super::person::Person;
use crate::config::DEFAULT_NAME;
use crate::error::{CoreError, Result};
use crate::validation::check_string_not_blank;

/// A named group of people working together.
///
/// Members keep insertion order and may contain the same person more than once. Every
/// effective change to the name or the member list is reported to subscribed listeners;
/// member changes carry a snapshot of the list before and after the mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "TeamRecord")]
pub struct Team {
    name: String,
    members: Vec<Person>,
    #[serde(skip)]
    changes: ChangeSupport,
}

impl Team {
    pub const NAME_PROPERTY: &'static str = "name";
    pub const MEMBERS_PROPERTY: &'static str = "members";

    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        check_string_not_blank(&name, "an empty team name is not allowed")?;
        Ok(Self {
            name,
            members: Vec::new(),
            changes: ChangeSupport::default(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        check_string_not_blank(&name, "an empty team name is not allowed")?;

        let former = std::mem::replace(&mut self.name, name);
        self.changes
            .fire(Self::NAME_PROPERTY, former.into(), self.name.clone().into());
        Ok(())
    }

    /// Returns a copy of the member list; changing it does not affect the team.
    pub fn members(&self) -> Vec<Person> {
        self.members.clone()
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn add_member(&mut self, person: Person) {
        let former = self.members.clone();
        self.members.push(person);
        self.fire_members(former);
    }

    /// Removes the first member equal to `person`. Returns `false` if no such member exists.
    pub fn remove_member(&mut self, person: &Person) -> bool {
        let Some(index) = self.members.iter().position(|m| m == person) else {
            return false;
        };
        let former = self.members.clone();
        self.members.remove(index);
        self.fire_members(former);
        true
    }

    pub fn clear_members(&mut self) {
        let former = std::mem::take(&mut self.members);
        self.fire_members(former);
    }

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&PropertyChange) + Send + 'static,
    {
        self.changes.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.changes.unsubscribe(id)
    }

    fn fire_members(&mut self, former: Vec<Person>) {
        self.changes
            .fire(Self::MEMBERS_PROPERTY, former.into(), self.members.clone().into());
    }
}

impl Default for Team {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            members: Vec::new(),
            changes: ChangeSupport::default(),
        }
    }
}

impl PartialEq for Team {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.members == other.members
    }
}

impl Eq for Team {}

impl Hash for Team {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.members.hash(state);
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Team[name={},members=[", self.name)?;
        for (i, member) in self.members.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", member)?;
        }
        f.write_str("]]")
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TeamRecord {
    name: String,
    #[serde(default)]
    members: Vec<Person>,
}

impl TryFrom<TeamRecord> for Team {
    type Error = CoreError;

    fn try_from(record: TeamRecord) -> Result<Self> {
        let mut team = Team::new(record.name)?;
        team.members = record.members;
        Ok(team)
    }
}
