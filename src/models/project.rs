use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::person::Person;
use super::plan::Plan;
use crate::config::{DEFAULT_DESCRIPTION, DEFAULT_NAME};
use crate::error::{CoreError, Result};
use crate::validation::check_string_not_blank;

/// A project with its participants and the plans it is organized into.
///
/// Members and plans have set semantics: inserting an element that is already present is a
/// no-op. Both collections are returned in their natural order. Projects do not publish
/// change notifications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ProjectRecord")]
pub struct Project {
    name: String,
    description: String,
    members: BTreeSet<Person>,
    project_plan: BTreeSet<Plan>,
}

impl Project {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Result<Self> {
        let name = name.into();
        check_string_not_blank(&name, "an empty name for projects is not allowed")?;
        Ok(Self {
            name,
            description: description.into(),
            members: BTreeSet::new(),
            project_plan: BTreeSet::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        check_string_not_blank(&name, "an empty name for projects is not allowed")?;
        self.name = name;
        Ok(())
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    // ============================================================
    // Members
    // ============================================================

    pub fn members(&self) -> Vec<Person> {
        self.members.iter().cloned().collect()
    }

    /// Adds every person in `members` to the existing ones. Nothing is replaced.
    pub fn set_members(&mut self, members: Vec<Person>) -> Result<()> {
        if members.is_empty() {
            return Err(CoreError::invalid(
                "an empty list of persons is not allowed to add",
            ));
        }
        self.members.extend(members);
        Ok(())
    }

    /// Returns `false` if the person was already a member.
    pub fn add_member(&mut self, member: Person) -> bool {
        self.members.insert(member)
    }

    pub fn remove_member(&mut self, member: &Person) -> bool {
        self.members.remove(member)
    }

    pub fn clear_members(&mut self) {
        self.members.clear();
    }

    // ============================================================
    // Project plan
    // ============================================================

    pub fn project_plan(&self) -> Vec<Plan> {
        self.project_plan.iter().cloned().collect()
    }

    /// Adds every plan in `plans` to the existing ones. Nothing is replaced.
    pub fn set_project_plan(&mut self, plans: Vec<Plan>) -> Result<()> {
        if plans.is_empty() {
            return Err(CoreError::invalid("an empty list of plans is not allowed"));
        }
        self.project_plan.extend(plans);
        Ok(())
    }

    /// Returns `false` if the plan was already part of the project.
    pub fn add_project_plan(&mut self, plan: Plan) -> bool {
        self.project_plan.insert(plan)
    }

    pub fn remove_project_plan(&mut self, plan: &Plan) -> bool {
        self.project_plan.remove(plan)
    }

    pub fn clear_project_plan(&mut self) {
        self.project_plan.clear();
    }
}

impl Default for Project {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            members: BTreeSet::new(),
            project_plan: BTreeSet::new(),
        }
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let members: Vec<String> = self.members.iter().map(ToString::to_string).collect();
        let plans: Vec<String> = self.project_plan.iter().map(ToString::to_string).collect();
        write!(
            f,
            "Project[name={},description={},members=[{}],projectPlan=[{}]]",
            self.name,
            self.description,
            members.join(", "),
            plans.join(", ")
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectRecord {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    members: Vec<Person>,
    #[serde(default)]
    project_plan: Vec<Plan>,
}

impl TryFrom<ProjectRecord> for Project {
    type Error = CoreError;

    fn try_from(record: ProjectRecord) -> Result<Self> {
        let mut project = Project::new(record.name, record.description)?;
        project.members.extend(record.members);
        project.project_plan.extend(record.project_plan);
        Ok(project)
    }
}
