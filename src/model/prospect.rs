//! Sales pipeline prospects.

use super::{Kind, Meta, Patch, Record};
use serde::{Deserialize, Serialize};

/// Pipeline stage for a prospect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    #[default]
    Lead,
    Prospect,
    Qualified,
    Closed,
    ClosedLost,
}

impl Stage {
    /// Canonical wire string (`lead`, …, `closed-lost`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lead => "lead",
            Self::Prospect => "prospect",
            Self::Qualified => "qualified",
            Self::Closed => "closed",
            Self::ClosedLost => "closed-lost",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lead" => Ok(Self::Lead),
            "prospect" => Ok(Self::Prospect),
            "qualified" => Ok(Self::Qualified),
            "closed" => Ok(Self::Closed),
            "closed-lost" => Ok(Self::ClosedLost),
            _ => Err(format!("Unknown stage: {s}")),
        }
    }
}

/// A sales prospect moving through the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prospect {
    #[serde(flatten)]
    pub meta: Meta,

    pub name: String,

    #[serde(default)]
    pub stage: Stage,

    /// Next concrete action to move the deal forward.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_action: Option<String>,
}

impl Prospect {
    #[must_use]
    pub fn from_draft(draft: ProspectDraft) -> Self {
        Self {
            meta: Meta::default(),
            name: draft.name,
            stage: draft.stage.unwrap_or_default(),
            next_action: draft.next_action,
        }
    }
}

impl Record for Prospect {
    const KIND: Kind = Kind::Prospects;

    fn meta(&self) -> &Meta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut Meta {
        &mut self.meta
    }
}

/// Caller input for prospect creation.
#[derive(Debug, Clone, Deserialize)]
pub struct ProspectDraft {
    pub name: String,
    #[serde(default)]
    pub stage: Option<Stage>,
    #[serde(default)]
    pub next_action: Option<String>,
}

/// Merge patch for prospect updates.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProspectPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub stage: Option<Stage>,
    #[serde(default)]
    pub next_action: Option<String>,
}

impl Patch<Prospect> for ProspectPatch {
    fn apply(&self, target: &mut Prospect) {
        if let Some(name) = &self.name {
            target.name = name.clone();
        }
        if let Some(stage) = self.stage {
            target.stage = stage;
        }
        if let Some(next_action) = &self.next_action {
            target.next_action = Some(next_action.clone());
        }
    }
}
