use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::change::{ChangeSupport, ListenerId, PropertyChange};
use super::priority::{Priority, RequirementKind};
use crate::config::{DEFAULT_DESCRIPTION, DEFAULT_NAME, DEFAULT_REQUESTER};
use crate::error::{CoreError, Result};
use crate::validation::check_string_not_blank;

/// The fields every requirement carries.
pub trait Requirement {
    fn id(&self) -> i64;
    /// Assigns the identifier. Only possible while it is still `0`.
    fn set_id(&mut self, id: i64) -> Result<()>;
    fn title(&self) -> &str;
    fn set_title(&mut self, title: &str) -> Result<()>;
    fn description(&self) -> &str;
    fn set_description(&mut self, description: &str) -> Result<()>;
    fn create_date(&self) -> DateTime<Utc>;
    fn priority(&self) -> Priority;
    fn set_priority(&mut self, priority: Priority) -> Result<()>;
    fn requester(&self) -> &str;
    fn set_requester(&mut self, requester: &str) -> Result<()>;
    fn requirement_kind(&self) -> RequirementKind;
    fn set_requirement_kind(&mut self, kind: RequirementKind) -> Result<()>;
}

/// Estimated and actually spent effort.
pub trait Effort {
    fn estimated(&self) -> f32;
    fn set_estimated(&mut self, estimated: f32) -> Result<()>;
    fn effective(&self) -> f32;
}

/// Input for creating a product story.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryInput {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub estimated: f32,
    pub priority: Priority,
    pub requester: String,
    pub requirement_kind: RequirementKind,
}

/// A coarse-grained requirement on the product backlog.
///
/// # Identifier
/// The id starts at `0` and may be assigned exactly once. After a non-zero id has been set,
/// every further [`Requirement::set_id`] call fails, even with the same value.
///
/// # Notifications
/// Each effective setter call is reported to listeners registered with
/// [`ProductStory::subscribe`], named by the `*_PROPERTY` constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StoryRecord")]
pub struct ProductStory {
    id: i64,
    title: String,
    description: String,
    create_date: DateTime<Utc>,
    estimated: f32,
    priority: Priority,
    requester: String,
    requirement_kind: RequirementKind,
    #[serde(skip)]
    changes: ChangeSupport,
}

impl ProductStory {
    pub const ID_PROPERTY: &'static str = "id";
    pub const TITLE_PROPERTY: &'static str = "title";
    pub const DESCRIPTION_PROPERTY: &'static str = "description";
    pub const PRIORITY_PROPERTY: &'static str = "priority";
    pub const REQUESTER_PROPERTY: &'static str = "requester";
    pub const REQUIREMENT_KIND_PROPERTY: &'static str = "requirementKind";
    pub const ESTIMATED_PROPERTY: &'static str = "estimated";

    pub fn new(
        id: i64,
        title: &str,
        description: &str,
        estimated: f32,
        priority: Priority,
        requester: &str,
        requirement_kind: RequirementKind,
    ) -> Result<Self> {
        Self::create(StoryInput {
            id,
            title: title.to_string(),
            description: description.to_string(),
            estimated,
            priority,
            requester: requester.to_string(),
            requirement_kind,
        })
    }

    /// Creates a story stamped with the current time.
    pub fn create(input: StoryInput) -> Result<Self> {
        Self::with_create_date(input, Utc::now())
    }

    /// Creates a story with an explicit creation timestamp, e.g. when restoring a stored one.
    pub fn with_create_date(input: StoryInput, create_date: DateTime<Utc>) -> Result<Self> {
        if input.id < 0 {
            return Err(CoreError::invalid("negative id is not allowed"));
        }
        check_string_not_blank(&input.title, "title has to be not blank!")?;
        check_estimated(input.estimated)?;
        check_string_not_blank(&input.requester, "requester has to be not blank!")?;

        Ok(Self {
            id: input.id,
            title: input.title,
            description: input.description,
            create_date,
            estimated: normalize(input.estimated),
            priority: input.priority,
            requester: input.requester,
            requirement_kind: input.requirement_kind,
            changes: ChangeSupport::default(),
        })
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
}

fn check_estimated(estimated: f32) -> Result<()> {
    // NaN fails the comparison as well
    if 0.0 <= estimated {
        Ok(())
    } else {
        Err(CoreError::invalid("negative estimate is not allowed!"))
    }
}

// -0.0 is stored as 0.0
fn normalize(estimated: f32) -> f32 {
    if estimated == 0.0 {
        0.0
    } else {
        estimated
    }
}

impl Requirement for ProductStory {
    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) -> Result<()> {
        if self.id != 0 {
            return Err(CoreError::invalid(
                "change of an initialized requirement id is not allowed",
            ));
        }
        if id < 0 {
            return Err(CoreError::invalid("negative id is not allowed"));
        }

        let former = self.id;
        self.id = id;
        if id != 0 {
            tracing::debug!(id, "requirement id frozen");
        }
        self.changes.fire(Self::ID_PROPERTY, former.into(), id.into());
        Ok(())
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn set_title(&mut self, title: &str) -> Result<()> {
        check_string_not_blank(title, "title has to be not blank!")?;

        let former = std::mem::replace(&mut self.title, title.to_string());
        self.changes.fire(Self::TITLE_PROPERTY, former.into(), title.into());
        Ok(())
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn set_description(&mut self, description: &str) -> Result<()> {
        let former = std::mem::replace(&mut self.description, description.to_string());
        self.changes
            .fire(Self::DESCRIPTION_PROPERTY, former.into(), description.into());
        Ok(())
    }

    fn create_date(&self) -> DateTime<Utc> {
        self.create_date
    }

    fn priority(&self) -> Priority {
        self.priority
    }

    fn set_priority(&mut self, priority: Priority) -> Result<()> {
        let former = std::mem::replace(&mut self.priority, priority);
        self.changes
            .fire(Self::PRIORITY_PROPERTY, former.into(), priority.into());
        Ok(())
    }

    fn requester(&self) -> &str {
        &self.requester
    }

    fn set_requester(&mut self, requester: &str) -> Result<()> {
        check_string_not_blank(requester, "requester has to be not blank!")?;

        let former = std::mem::replace(&mut self.requester, requester.to_string());
        self.changes
            .fire(Self::REQUESTER_PROPERTY, former.into(), requester.into());
        Ok(())
    }

    fn requirement_kind(&self) -> RequirementKind {
        self.requirement_kind
    }

    fn set_requirement_kind(&mut self, kind: RequirementKind) -> Result<()> {
        let former = std::mem::replace(&mut self.requirement_kind, kind);
        self.changes
            .fire(Self::REQUIREMENT_KIND_PROPERTY, former.into(), kind.into());
        Ok(())
    }
}

impl Effort for ProductStory {
    fn estimated(&self) -> f32 {
        self.estimated
    }

    fn set_estimated(&mut self, estimated: f32) -> Result<()> {
        check_estimated(estimated)?;

        let former = std::mem::replace(&mut self.estimated, normalize(estimated));
        self.changes
            .fire(Self::ESTIMATED_PROPERTY, former.into(), self.estimated.into());
        Ok(())
    }

    /// Spent effort is not tracked yet.
    fn effective(&self) -> f32 {
        0.0
    }
}

impl Default for ProductStory {
    fn default() -> Self {
        Self {
            id: 0,
            title: DEFAULT_NAME.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            create_date: Utc::now(),
            estimated: 0.0,
            priority: Priority::Minor,
            requester: DEFAULT_REQUESTER.to_string(),
            requirement_kind: RequirementKind::UserStory,
            changes: ChangeSupport::default(),
        }
    }
}

impl PartialEq for ProductStory {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.title == other.title
            && self.description == other.description
            && self.create_date == other.create_date
            && self.estimated.to_bits() == other.estimated.to_bits()
            && self.priority == other.priority
            && self.requester == other.requester
            && self.requirement_kind == other.requirement_kind
    }
}

impl Eq for ProductStory {}

impl Hash for ProductStory {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.title.hash(state);
        self.description.hash(state);
        self.create_date.hash(state);
        self.estimated.to_bits().hash(state);
        self.priority.hash(state);
        self.requester.hash(state);
        self.requirement_kind.hash(state);
    }
}

impl fmt::Display for ProductStory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ProductStory[id={},title={},description={},createDate={},estimated={},priority={},requester={},requirementKind={}]",
            self.id,
            self.title,
            self.description,
            self.create_date.to_rfc3339_opts(SecondsFormat::Millis, true),
            self.estimated,
            self.priority,
            self.requester,
            self.requirement_kind
        )
    }
}

/// Wire shape used when deserializing: the input fields plus the stored creation date.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoryRecord {
    id: i64,
    title: String,
    description: String,
    create_date: DateTime<Utc>,
    estimated: f32,
    priority: Priority,
    requester: String,
    requirement_kind: RequirementKind,
}

impl TryFrom<StoryRecord> for ProductStory {
    type Error = CoreError;

    fn try_from(record: StoryRecord) -> Result<Self> {
        let input = StoryInput {
            id: record.id,
            title: record.title,
            description: record.description,
            estimated: record.estimated,
            priority: record.priority,
            requester: record.requester,
            requirement_kind: record.requirement_kind,
        };
        ProductStory::with_create_date(input, record.create_date)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn input() -> StoryInput {
        StoryInput {
            id: 1,
            title: "Login".to_string(),
            description: "desc".to_string(),
            estimated: 3.5,
            priority: Priority::Major,
            requester: "alice".to_string(),
            requirement_kind: RequirementKind::UserStory,
        }
    }

    #[test]
    fn zero_id_can_be_reassigned_until_non_zero() {
        let mut story = ProductStory::default();
        assert!(story.set_id(0).is_ok());
        assert!(story.set_id(9).is_ok());
        assert!(story.set_id(0).is_err());
        assert_eq!(story.id(), 9);
    }

    #[test]
    fn negative_zero_estimate_is_normalized() {
        let mut story = ProductStory::default();
        story.set_estimated(-0.0).unwrap();
        assert_eq!(story.estimated().to_bits(), 0.0f32.to_bits());
    }

    #[test]
    fn nan_estimate_is_rejected() {
        let mut story = ProductStory::default();
        assert!(story.set_estimated(f32::NAN).is_err());
    }

    #[test]
    fn display_uses_field_names() {
        let date = Utc.with_ymd_and_hms(2011, 5, 1, 12, 0, 0).unwrap();
        let story = ProductStory::with_create_date(input(), date).unwrap();
        assert_eq!(
            story.to_string(),
            "ProductStory[id=1,title=Login,description=desc,createDate=2011-05-01T12:00:00.000Z,\
             estimated=3.5,priority=MAJOR,requester=alice,requirementKind=USER_STORY]"
        );
    }

    #[test]
    fn json_keeps_field_order() {
        let date = Utc.with_ymd_and_hms(2011, 5, 1, 12, 0, 0).unwrap();
        let story = ProductStory::with_create_date(input(), date).unwrap();
        let json = serde_json::to_string(&story).unwrap();
        assert_eq!(
            json,
            r#"{"id":1,"title":"Login","description":"desc","createDate":"2011-05-01T12:00:00Z","estimated":3.5,"priority":"MAJOR","requester":"alice","requirementKind":"USER_STORY"}"#
        );

        let back: ProductStory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, story);
    }
}
