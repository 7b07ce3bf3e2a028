//! Snapshot bundle types.

use serde::{Deserialize, Serialize};

use crate::model::{
    ActivityEntry, Checkin, Client, Idea, Ledger, Project, Prospect, Review, Task, TokenLog,
};

/// One serialized bundle of all collections.
///
/// Every kind is optional so partial snapshots can be imported: a kind
/// absent from the bundle is left untouched on import. The activity
/// feed rides along for inspection but is never imported.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<Task>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clients: Option<Vec<Client>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prospects: Option<Vec<Prospect>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<Project>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financials: Option<Ledger>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens: Option<Vec<TokenLog>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkins: Option<Vec<Checkin>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ideas: Option<Vec<Idea>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<Review>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity: Option<Vec<ActivityEntry>>,

    /// ISO8601 timestamp when this snapshot was exported.
    #[serde(rename = "exportedAt", default)]
    pub exported_at: String,

    /// SHA256 hash of the collections (for change detection).
    #[serde(rename = "contentHash", default, skip_serializing_if = "Option::is_none")]
    pub content_hash: Option<String>,
}

/// Per-kind record counts for a snapshot operation.
#[derive(Debug, Default, Clone, Serialize)]
pub struct SnapshotCounts {
    pub tasks: usize,
    pub clients: usize,
    pub prospects: usize,
    pub projects: usize,
    /// Ledger entries (revenue + expenses).
    pub financial_entries: usize,
    pub tokens: usize,
    pub checkins: usize,
    pub ideas: usize,
    pub reviews: usize,
    pub activity: usize,
}

impl SnapshotCounts {
    /// Count the records present in a snapshot.
    #[must_use]
    pub fn of(snapshot: &Snapshot) -> Self {
        Self {
            tasks: snapshot.tasks.as_ref().map_or(0, Vec::len),
            clients: snapshot.clients.as_ref().map_or(0, Vec::len),
            prospects: snapshot.prospects.as_ref().map_or(0, Vec::len),
            projects: snapshot.projects.as_ref().map_or(0, Vec::len),
            financial_entries: snapshot
                .financials
                .as_ref()
                .map_or(0, |l| l.revenue.len() + l.expenses.len()),
            tokens: snapshot.tokens.as_ref().map_or(0, Vec::len),
            checkins: snapshot.checkins.as_ref().map_or(0, Vec::len),
            ideas: snapshot.ideas.as_ref().map_or(0, Vec::len),
            reviews: snapshot.reviews.as_ref().map_or(0, Vec::len),
            activity: snapshot.activity.as_ref().map_or(0, Vec::len),
        }
    }

    /// Total number of records (excludes the activity slice).
    #[must_use]
    pub fn total(&self) -> usize {
        self.tasks
            + self.clients
            + self.prospects
            + self.projects
            + self.financial_entries
            + self.tokens
            + self.checkins
            + self.ideas
            + self.reviews
    }

    /// Returns true if the snapshot carries no records at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() + self.activity == 0
    }
}
