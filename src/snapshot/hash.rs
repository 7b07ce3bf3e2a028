//! Content hashing for snapshots.
//!
//! A SHA256 fingerprint over the serialized collections lets two
//! snapshots be compared without walking every record, and lets an
//! import detect a bundle that was edited in transit.

use sha2::{Digest, Sha256};

use super::types::Snapshot;

/// Compute the content hash of a snapshot.
///
/// Only the collections participate: `exportedAt` and any embedded
/// hash are zeroed out first, so re-exporting unchanged data yields
/// the same fingerprint.
#[must_use]
pub fn content_hash(snapshot: &Snapshot) -> String {
    let mut body = snapshot.clone();
    body.exported_at = String::new();
    body.content_hash = None;

    let json = serde_json::to_string(&body).unwrap_or_default();
    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Check whether a snapshot's embedded hash matches its contents.
///
/// Returns `None` when the snapshot carries no hash (nothing to
/// verify), `Some(true)` on a match.
#[must_use]
pub fn verify(snapshot: &Snapshot) -> Option<bool> {
    snapshot
        .content_hash
        .as_ref()
        .map(|embedded| *embedded == content_hash(snapshot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Task, TaskDraft};

    fn snapshot_with_task(title: &str) -> Snapshot {
        Snapshot {
            tasks: Some(vec![Task::from_draft(TaskDraft {
                title: title.to_string(),
                status: None,
                priority: None,
            })]),
            exported_at: "2026-01-01T00:00:00Z".to_string(),
            ..Snapshot::default()
        }
    }

    #[test]
    fn test_hash_is_deterministic_and_ignores_export_time() {
        let mut a = snapshot_with_task("same");
        let mut b = snapshot_with_task("same");
        a.exported_at = "2026-01-01T00:00:00Z".to_string();
        b.exported_at = "2026-06-30T12:00:00Z".to_string();

        assert_eq!(content_hash(&a), content_hash(&b));
        assert_eq!(content_hash(&a).len(), 64);
    }

    #[test]
    fn test_hash_changes_with_content() {
        let a = snapshot_with_task("one");
        let b = snapshot_with_task("two");
        assert_ne!(content_hash(&a), content_hash(&b));
    }

    #[test]
    fn test_verify() {
        let mut snapshot = snapshot_with_task("verify me");
        assert!(verify(&snapshot).is_none());

        snapshot.content_hash = Some(content_hash(&snapshot));
        assert_eq!(verify(&snapshot), Some(true));

        snapshot.tasks = None;
        assert_eq!(verify(&snapshot), Some(false));
    }
}
