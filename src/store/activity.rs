//! Activity recorder.
//!
//! Cross-cutting audit trail invoked by every mutating operation
//! (token logging excepted). Each call writes one entry to the
//! append-only `activity.json` feed and mirrors the same message into
//! the daily Markdown journal.
//!
//! The journal mirror is best-effort within [`ActivityLog::record`]:
//! a journal failure is logged to the operator channel and never
//! surfaces. A feed write failure does error out of `record`, but the
//! workspace layer treats the whole audit trail as best-effort; only
//! the primary entity write can fail a business operation.

use tracing::warn;

use crate::error::Result;
use crate::model::{ActivityEntry, Kind};

use super::file::{FileStore, generate_id};
use super::{Journal, now_rfc3339};

/// Default read window for the activity feed.
pub const DEFAULT_LIMIT: usize = 50;

/// Writer/reader for the activity feed plus its journal mirror.
#[derive(Debug, Clone)]
pub struct ActivityLog {
    store: FileStore,
    journal: Journal,
}

impl ActivityLog {
    #[must_use]
    pub fn new(store: FileStore, journal: Journal) -> Self {
        Self { store, journal }
    }

    /// Record an activity message.
    ///
    /// Appends `{id, timestamp, message}` to the feed, then mirrors
    /// the line to the journal. The feed grows without bound;
    /// truncation only happens at read time.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::StoreWrite`] if the feed cannot
    /// be persisted. A journal failure does not error.
    pub fn record(&self, message: &str) -> Result<ActivityEntry> {
        let mut entries: Vec<ActivityEntry> = self.store.load_collection(Kind::Activity);

        let entry = ActivityEntry {
            id: generate_id(Kind::Activity),
            timestamp: now_rfc3339(),
            message: message.to_string(),
        };
        entries.push(entry.clone());
        self.store.persist(Kind::Activity, &entries)?;

        if let Err(e) = self.journal.append(message) {
            warn!(error = %e, "journal mirror failed; activity entry kept");
        }

        Ok(entry)
    }

    /// The most recent `limit` entries, most-recent-first.
    ///
    /// Read-only: never reorders or rewrites the persisted feed.
    #[must_use]
    pub fn recent(&self, limit: usize) -> Vec<ActivityEntry> {
        let entries: Vec<ActivityEntry> = self.store.load_collection(Kind::Activity);
        let start = entries.len().saturating_sub(limit);
        entries[start..].iter().rev().cloned().collect()
    }
}
