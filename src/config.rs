//! Default values used by the zero-argument constructors.
//!
//! The built-in defaults can be overridden by a JSON file at
//! `<config dir>/jgility/defaults.json`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};

use crate::models::{Priority, ProductStory, Project, RequirementKind, StoryInput, Team};

const APP_NAME: &str = "jgility";
const CONFIG_FILE: &str = "defaults.json";

pub(crate) const DEFAULT_NAME: &str = "Default";
pub(crate) const DEFAULT_DESCRIPTION: &str = "Default";
pub(crate) const DEFAULT_REQUESTER: &str = "Nobody";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityDefaults {
    pub story_title: String,
    pub story_description: String,
    pub story_requester: String,
    pub story_estimated: f32,
    pub story_priority: Priority,
    pub story_kind: RequirementKind,
    pub team_name: String,
    pub project_name: String,
    pub project_description: String,
}

impl Default for EntityDefaults {
    fn default() -> Self {
        Self {
            story_title: DEFAULT_NAME.to_string(),
            story_description: DEFAULT_DESCRIPTION.to_string(),
            story_requester: DEFAULT_REQUESTER.to_string(),
            story_estimated: 0.0,
            story_priority: Priority::Minor,
            story_kind: RequirementKind::UserStory,
            team_name: DEFAULT_NAME.to_string(),
            project_name: DEFAULT_NAME.to_string(),
            project_description: DEFAULT_DESCRIPTION.to_string(),
        }
    }
}

impl EntityDefaults {
    /// Load defaults from the user's config directory.
    /// Returns the built-in defaults if the file doesn't exist or fails to parse.
    pub fn load() -> Self {
        let loaded = get_config_path().and_then(|path| Self::load_from(&path));
        match loaded {
            Ok(defaults) => defaults,
            Err(e) => {
                tracing::warn!("Failed to load entity defaults, using built-in values: {:#}", e);
                Self::default()
            }
        }
    }

    /// Load defaults from `path`. A missing file yields the built-in defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).context("Failed to read defaults file")?;
        let defaults = serde_json::from_str(&content).context("Failed to parse defaults file")?;

        Ok(defaults)
    }

    /// Save to the user's config directory.
    pub fn save(&self) -> Result<()> {
        self.save_to(&get_config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content =
            serde_json::to_string_pretty(self).context("Failed to serialize defaults")?;
        fs::write(path, content).context("Failed to write defaults file")?;

        Ok(())
    }

    /// A fresh story with id `0` built from these defaults.
    pub fn story(&self) -> crate::Result<ProductStory> {
        ProductStory::create(StoryInput {
            id: 0,
            title: self.story_title.clone(),
            description: self.story_description.clone(),
            estimated: self.story_estimated,
            priority: self.story_priority,
            requester: self.story_requester.clone(),
            requirement_kind: self.story_kind,
        })
    }

    pub fn team(&self) -> crate::Result<Team> {
        Team::new(self.team_name.as_str())
    }

    pub fn project(&self) -> crate::Result<Project> {
        Project::new(self.project_name.as_str(), self.project_description.as_str())
    }
}

fn get_config_path() -> Result<PathBuf> {
    let mut path =
        config_dir().ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
    path.push(APP_NAME);
    path.push(CONFIG_FILE);
    Ok(path)
}
