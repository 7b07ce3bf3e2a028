//! Weekly review records.

use super::{Kind, Meta, Record};
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

/// A weekly review entry.
///
/// The week number is derived at creation time (ISO week of the
/// current date); free-form body fields ride along untouched so the
/// dashboard can evolve its review template without a schema change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    #[serde(flatten)]
    pub meta: Meta,

    pub title: String,

    /// ISO week number of the year the review was written.
    pub week: u32,

    /// Free-form review body (wins, losses, next focus, …).
    #[serde(flatten)]
    pub body: serde_json::Map<String, serde_json::Value>,
}

impl Review {
    /// Build a review from caller input, deriving the week number.
    #[must_use]
    pub fn from_draft(draft: ReviewDraft) -> Self {
        let mut body = draft.body;
        // Typed fields win over whatever rode in with the body
        for reserved in ["id", "createdAt", "updatedAt", "week"] {
            body.remove(reserved);
        }
        Self {
            meta: Meta::default(),
            title: draft.title,
            week: current_week(),
            body,
        }
    }
}

impl Record for Review {
    const KIND: Kind = Kind::Reviews;

    fn meta(&self) -> &Meta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut Meta {
        &mut self.meta
    }
}

/// Caller input for a weekly review.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewDraft {
    pub title: String,

    #[serde(flatten)]
    pub body: serde_json::Map<String, serde_json::Value>,
}

/// ISO week number of today.
#[must_use]
pub fn current_week() -> u32 {
    Utc::now().iso_week().week()
}
