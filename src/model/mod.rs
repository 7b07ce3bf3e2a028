//! Data types for the Life OS workspace.
//!
//! Each entity kind gets its own module with three shapes:
//! - the persisted record (embedding [`Meta`] for id/timestamps)
//! - a `Draft`: caller input with per-kind defaults applied on build
//! - a `Patch`: all-optional merge struct for updates
//!
//! The store, not the caller, assigns identity: `id` and `created_at`
//! are filled in by [`crate::store::FileStore::append`], and
//! `updated_at` is only ever set by an update.

pub mod activity;
pub mod checkin;
pub mod client;
pub mod finance;
pub mod idea;
pub mod project;
pub mod prospect;
pub mod review;
pub mod task;
pub mod token;

pub use activity::ActivityEntry;
pub use checkin::{Checkin, CheckinDraft};
pub use client::{Client, ClientDraft, ClientPatch};
pub use finance::{EntryKind, FinancialEntry, FinancialEntryDraft, Ledger, Totals};
pub use idea::{Idea, IdeaDraft};
pub use project::{Project, ProjectDraft, ProjectPatch};
pub use prospect::{Prospect, ProspectDraft, ProspectPatch, Stage};
pub use review::{Review, ReviewDraft};
pub use task::{Priority, Task, TaskDraft, TaskPatch, TaskStatus};
pub use token::{TokenLog, TokenLogDraft};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A named entity category with its own backing collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Tasks,
    Clients,
    Prospects,
    Projects,
    Ideas,
    Reviews,
    Checkins,
    Tokens,
    Financials,
    Activity,
}

impl Kind {
    /// File name of the backing collection under the data directory.
    #[must_use]
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::Tasks => "tasks.json",
            Self::Clients => "clients.json",
            Self::Prospects => "prospects.json",
            Self::Projects => "projects.json",
            Self::Ideas => "ideas.json",
            Self::Reviews => "reviews.json",
            Self::Checkins => "checkins.json",
            Self::Tokens => "tokens.json",
            Self::Financials => "financials.json",
            Self::Activity => "activity.json",
        }
    }

    /// Prefix for store-assigned record IDs (`task-…`, `client-…`).
    #[must_use]
    pub const fn id_prefix(&self) -> &'static str {
        match self {
            Self::Tasks => "task",
            Self::Clients => "client",
            Self::Prospects => "prospect",
            Self::Projects => "project",
            Self::Ideas => "idea",
            Self::Reviews => "review",
            Self::Checkins => "checkin",
            Self::Tokens => "token",
            Self::Financials => "fin",
            Self::Activity => "act",
        }
    }

    /// Singular noun used by CLI subcommands (`lifeos task list`).
    #[must_use]
    pub const fn noun(&self) -> &'static str {
        match self {
            Self::Tasks => "task",
            Self::Clients => "client",
            Self::Prospects => "prospect",
            Self::Projects => "project",
            Self::Ideas => "idea",
            Self::Reviews => "review",
            Self::Checkins => "checkin",
            Self::Tokens => "tokens",
            Self::Financials => "finance",
            Self::Activity => "activity",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Tasks => "tasks",
            Self::Clients => "clients",
            Self::Prospects => "prospects",
            Self::Projects => "projects",
            Self::Ideas => "ideas",
            Self::Reviews => "reviews",
            Self::Checkins => "checkins",
            Self::Tokens => "tokens",
            Self::Financials => "financials",
            Self::Activity => "activity",
        };
        write!(f, "{name}")
    }
}

/// Store-assigned identity fields, flattened into every record.
///
/// `id` and `created_at` are assigned exactly once, at append time.
/// `updated_at` is set on every mutation and only on mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// Unique within the collection, `<prefix>-<12 hex chars>`.
    pub id: String,

    /// RFC 3339 creation timestamp.
    #[serde(rename = "createdAt")]
    pub created_at: String,

    /// RFC 3339 timestamp of the last update, absent until first update.
    #[serde(rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// A persisted record belonging to a fixed [`Kind`].
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// The collection this record type lives in.
    const KIND: Kind;

    /// Identity fields (read).
    fn meta(&self) -> &Meta;

    /// Identity fields (write), used by the store at append/update time.
    fn meta_mut(&mut self) -> &mut Meta;

    /// The record's unique ID.
    fn id(&self) -> &str {
        &self.meta().id
    }
}

/// A typed merge patch: only fields present in the patch change.
pub trait Patch<T> {
    /// Apply the supplied fields to `target`, leaving the rest intact.
    fn apply(&self, target: &mut T);
}
