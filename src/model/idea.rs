//! Idea records (experiments backlog).

use super::{Kind, Meta, Record};
use serde::{Deserialize, Serialize};

fn default_status() -> String {
    "draft".to_string()
}

/// An idea or experiment, captured before it becomes a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Idea {
    #[serde(flatten)]
    pub meta: Meta,

    pub title: String,

    #[serde(default = "default_status")]
    pub status: String,
}

impl Idea {
    #[must_use]
    pub fn from_draft(draft: IdeaDraft) -> Self {
        Self {
            meta: Meta::default(),
            title: draft.title,
            status: draft.status.unwrap_or_else(default_status),
        }
    }
}

impl Record for Idea {
    const KIND: Kind = Kind::Ideas;

    fn meta(&self) -> &Meta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut Meta {
        &mut self.meta
    }
}

/// Caller input for idea capture.
#[derive(Debug, Clone, Deserialize)]
pub struct IdeaDraft {
    pub title: String,
    #[serde(default)]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_draft_defaults_to_draft_status() {
        let idea = Idea::from_draft(IdeaDraft {
            title: "Weekly digest email".to_string(),
            status: None,
        });
        assert_eq!(idea.status, "draft");
    }
}
