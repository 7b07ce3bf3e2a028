//! Project records (the "building" board).

use super::{Kind, Meta, Patch, Record};
use serde::{Deserialize, Serialize};

fn default_status() -> String {
    "active".to_string()
}

/// A project with a completion gauge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    #[serde(flatten)]
    pub meta: Meta,

    pub name: String,

    #[serde(default = "default_status")]
    pub status: String,

    /// Completion percentage, clamped to 0-100.
    #[serde(default)]
    pub progress: u8,
}

impl Project {
    #[must_use]
    pub fn from_draft(draft: ProjectDraft) -> Self {
        Self {
            meta: Meta::default(),
            name: draft.name,
            status: draft.status.unwrap_or_else(default_status),
            progress: draft.progress.unwrap_or(0).min(100),
        }
    }
}

impl Record for Project {
    const KIND: Kind = Kind::Projects;

    fn meta(&self) -> &Meta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut Meta {
        &mut self.meta
    }
}

/// Caller input for project creation.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectDraft {
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub progress: Option<u8>,
}

/// Merge patch for project updates.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub progress: Option<u8>,
}

impl Patch<Project> for ProjectPatch {
    fn apply(&self, target: &mut Project) {
        if let Some(name) = &self.name {
            target.name = name.clone();
        }
        if let Some(status) = &self.status {
            target.status = status.clone();
        }
        if let Some(progress) = self.progress {
            target.progress = progress.min(100);
        }
    }
}
