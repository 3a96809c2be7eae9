use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, Result};
use crate::validation::check_string_not_blank;

/// Something that occupies a span of the calendar, such as a release or an iteration.
pub trait Plannable {
    fn name(&self) -> &str;
    fn start(&self) -> NaiveDate;
    fn end(&self) -> NaiveDate;

    /// Whether `date` falls inside the plan, both ends inclusive.
    fn contains(&self, date: NaiveDate) -> bool {
        self.start() <= date && date <= self.end()
    }

    fn duration_days(&self) -> i64 {
        (self.end() - self.start()).num_days()
    }
}

/// A named span of work referenced by a [`Project`](super::Project).
///
/// Plans order by start date, then end date, then name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "PlanRecord")]
pub struct Plan {
    id: Uuid,
    name: String,
    start: NaiveDate,
    end: NaiveDate,
}

impl Plan {
    pub fn new(name: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Result<Self> {
        Self::with_id(Uuid::new_v4(), name, start, end)
    }

    pub fn with_id(
        id: Uuid,
        name: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Self> {
        let name = name.into();
        check_string_not_blank(&name, "plan name has to be not blank!")?;
        Ok(Self {
            id,
            name,
            start,
            end,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }
}

impl Plannable for Plan {
    fn name(&self) -> &str {
        &self.name
    }

    fn start(&self) -> NaiveDate {
        self.start
    }

    fn end(&self) -> NaiveDate {
        self.end
    }
}

impl PartialOrd for Plan {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Plan {
    fn cmp(&self, other: &Self) -> Ordering {
        self.start
            .cmp(&other.start)
            .then_with(|| self.end.cmp(&other.end))
            .then_with(|| self.name.cmp(&other.name))
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Plan[name={},start={},end={}]", self.name, self.start, self.end)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlanRecord {
    id: Uuid,
    name: String,
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<PlanRecord> for Plan {
    type Error = CoreError;

    fn try_from(record: PlanRecord) -> Result<Self> {
        Plan::with_id(record.id, record.name, record.start, record.end)
    }
}
