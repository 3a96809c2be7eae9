use std::fmt;

use serde::{Deserialize, Serialize};

/// Priority of a requirement.
///
/// Variants are declared in ascending order, so `Minor < Major < Blocker`.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    #[default]
    Minor,
    Major,
    Blocker,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minor => "MINOR",
            Self::Major => "MAJOR",
            Self::Blocker => "BLOCKER",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "MINOR" => Some(Self::Minor),
            "MAJOR" => Some(Self::Major),
            "BLOCKER" => Some(Self::Blocker),
            _ => None,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of work a requirement describes.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequirementKind {
    /// "As a ... I want ... so that ..." story.
    #[default]
    UserStory,
    Feature,
    Bug,
    Task,
}

impl RequirementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserStory => "USER_STORY",
            Self::Feature => "FEATURE",
            Self::Bug => "BUG",
            Self::Task => "TASK",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "USER_STORY" => Some(Self::UserStory),
            "FEATURE" => Some(Self::Feature),
            "BUG" => Some(Self::Bug),
            "TASK" => Some(Self::Task),
            _ => None,
        }
    }
}

impl fmt::Display for RequirementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
