//! Snapshot export.

use crate::store::activity::DEFAULT_LIMIT;
use crate::workspace::Workspace;

use super::hash::content_hash;
use super::types::Snapshot;

/// Export every collection as one snapshot bundle.
///
/// Pure read: no store is mutated. The activity feed is included as
/// its most recent window (newest first) for inspection; it is not
/// part of the restore path. The bundle carries its own content hash
/// and export timestamp.
#[must_use]
pub fn export_all(workspace: &Workspace) -> Snapshot {
    let mut snapshot = Snapshot {
        tasks: Some(workspace.list_tasks()),
        clients: Some(workspace.list_clients()),
        prospects: Some(workspace.list_prospects()),
        projects: Some(workspace.list_projects()),
        financials: Some(workspace.financials()),
        tokens: Some(workspace.list_token_logs()),
        checkins: Some(workspace.list_checkins()),
        ideas: Some(workspace.list_ideas()),
        reviews: Some(workspace.list_reviews()),
        activity: Some(workspace.recent_activity(DEFAULT_LIMIT)),
        exported_at: crate::store::now_rfc3339(),
        content_hash: None,
    };
    snapshot.content_hash = Some(content_hash(&snapshot));
    snapshot
}
