//! Activity feed entries.

use serde::{Deserialize, Serialize};

/// One line of the append-only activity feed.
///
/// Entries are written by the activity recorder on every mutating
/// operation (except token logging) and mirrored to the daily
/// Markdown journal. The feed itself grows without bound; truncation
/// only ever happens at read time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// Store-assigned, `act-…`.
    pub id: String,

    /// RFC 3339 instant the activity was recorded.
    pub timestamp: String,

    /// Human-readable description, e.g. `New Client: Acme`.
    pub message: String,
}
