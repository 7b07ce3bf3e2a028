//! Generic JSON-file-backed record store.
//!
//! Each entity kind persists as one pretty-printed JSON array. All
//! mutations are read-modify-rewrite of the whole file; rewrites go
//! through a temp file, fsync and rename so a crash mid-write leaves
//! the previous contents intact.
//!
//! Two simultaneous writers on the same kind can still race at the
//! read-modify-write level (last full rewrite wins). That is accepted
//! for a single-user deployment; the server path additionally holds a
//! process-wide write lock.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::model::{Kind, Patch, Record};

use super::now_rfc3339;

/// Generate a store-assigned record ID: `<prefix>-<12 hex chars>`.
#[must_use]
pub fn generate_id(kind: Kind) -> String {
    let uuid = uuid::Uuid::new_v4().simple().to_string();
    format!("{}-{}", kind.id_prefix(), &uuid[..12])
}

/// Write content to a file atomically.
///
/// Writes to `<path>.tmp`, fsyncs, then renames over the target. If
/// any step fails the original file (if any) remains untouched.
///
/// # Errors
///
/// Returns an error if any file operation fails.
pub fn atomic_write(path: &Path, content: &str) -> std::io::Result<()> {
    let temp_path = path.with_extension("json.tmp");

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    {
        let file = File::create(&temp_path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(content.as_bytes())?;
        writer.flush()?;
        // Sync to disk before rename
        writer.get_ref().sync_all()?;
    }

    fs::rename(&temp_path, path)?;

    Ok(())
}

/// JSON-file-backed store for every entity kind.
#[derive(Debug, Clone)]
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `data_dir` (not yet created on disk).
    #[must_use]
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Path of the backing file for a kind.
    #[must_use]
    pub fn path(&self, kind: Kind) -> PathBuf {
        self.data_dir.join(kind.file_name())
    }

    /// The data directory this store persists into.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Idempotent directory bootstrap.
    ///
    /// Must have run before any mutation; calling it when the
    /// directory already exists is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn ensure_ready(&self) -> Result<()> {
        fs::create_dir_all(&self.data_dir)?;
        Ok(())
    }

    /// All records of a kind, in persisted (insertion) order.
    ///
    /// An absent backing file is an empty collection, not an error;
    /// first use must be silent. A file that fails to decode also
    /// degrades to an empty collection: availability of the dashboard
    /// wins over strict integrity, and the failure is logged rather
    /// than surfaced.
    #[must_use]
    pub fn list<T: Record>(&self) -> Vec<T> {
        self.load_collection(T::KIND)
    }

    /// Append a record, assigning its identity.
    ///
    /// The store fills in `id` and `created_at`; per-kind field
    /// defaults were already applied when the record was built from
    /// its draft. On a write failure nothing is applied and no record
    /// is exposed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StoreWrite`] if the collection cannot be
    /// persisted.
    pub fn append<T: Record>(&self, mut record: T) -> Result<T> {
        let mut records: Vec<T> = self.load_collection(T::KIND);

        let meta = record.meta_mut();
        meta.id = generate_id(T::KIND);
        meta.created_at = now_rfc3339();

        records.push(record.clone());
        self.persist(T::KIND, &records)?;

        debug!(kind = %T::KIND, id = %record.id(), "record appended");
        Ok(record)
    }

    /// Shallow-merge a patch into the record with the given ID.
    ///
    /// Only fields present in the patch change; `updated_at` is set to
    /// now. A miss returns [`Error::RecordNotFound`] without rewriting
    /// the file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RecordNotFound`] if no record matches, or
    /// [`Error::StoreWrite`] if persisting fails.
    pub fn update<T: Record, P: Patch<T>>(&self, id: &str, patch: &P) -> Result<T> {
        let mut records: Vec<T> = self.load_collection(T::KIND);

        let Some(target) = records.iter_mut().find(|r| r.id() == id) else {
            return Err(Error::RecordNotFound {
                kind: T::KIND,
                id: id.to_string(),
            });
        };

        patch.apply(target);
        target.meta_mut().updated_at = Some(now_rfc3339());
        let updated = target.clone();

        self.persist(T::KIND, &records)?;

        debug!(kind = %T::KIND, id, "record updated");
        Ok(updated)
    }

    /// Rewrite the collection with the matching record excluded.
    ///
    /// Returns whether a record matched. A miss still rewrites the
    /// (unchanged) file and still succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StoreWrite`] if persisting fails.
    pub fn remove<T: Record>(&self, id: &str) -> Result<bool> {
        let mut records: Vec<T> = self.load_collection(T::KIND);
        let before = records.len();
        records.retain(|r| r.id() != id);
        let existed = records.len() != before;

        self.persist(T::KIND, &records)?;

        debug!(kind = %T::KIND, id, existed, "record removed");
        Ok(existed)
    }

    /// Load any collection-shaped document, degrading to empty.
    pub(crate) fn load_collection<T: DeserializeOwned>(&self, kind: Kind) -> Vec<T> {
        self.load_or_default(kind)
    }

    /// Load any document with a `Default` fallback, degrading silently.
    pub(crate) fn load_or_default<T: DeserializeOwned + Default>(&self, kind: Kind) -> T {
        let path = self.path(kind);
        if !path.exists() {
            return T::default();
        }

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(kind = %kind, error = %e, "failed to read collection, substituting empty");
                return T::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!(kind = %kind, error = %e, "corrupt collection file, substituting empty");
                T::default()
            }
        }
    }

    /// Persist a document for a kind, creating the data dir if needed.
    pub(crate) fn persist<T: Serialize>(&self, kind: Kind, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        atomic_write(&self.path(kind), &json).map_err(|source| Error::StoreWrite { kind, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Task, TaskDraft, TaskPatch, TaskStatus};
    use tempfile::TempDir;

    fn store() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("data"));
        (dir, store)
    }

    fn draft(title: &str) -> Task {
        Task::from_draft(TaskDraft {
            title: title.to_string(),
            status: None,
            priority: None,
        })
    }

    #[test]
    fn test_list_on_fresh_store_is_empty() {
        let (_dir, store) = store();
        let tasks: Vec<Task> = store.list();
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_append_assigns_identity_and_preserves_order() {
        let (_dir, store) = store();

        let first = store.append(draft("first")).unwrap();
        let second = store.append(draft("second")).unwrap();

        assert!(first.id().starts_with("task-"));
        assert_ne!(first.id(), second.id());
        assert!(!first.meta.created_at.is_empty());
        assert!(first.meta.created_at <= second.meta.created_at);

        let tasks: Vec<Task> = store.list();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].title, "first");
        assert_eq!(tasks[1].title, "second");
    }

    #[test]
    fn test_append_returns_record_equal_to_listed() {
        let (_dir, store) = store();
        let created = store.append(draft("Ship spec")).unwrap();

        let tasks: Vec<Task> = store.list();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id(), created.id());
        assert_eq!(tasks[0].title, created.title);
        assert_eq!(tasks[0].status, TaskStatus::Todo);
    }

    #[test]
    fn test_update_merges_and_stamps_updated_at() {
        let (_dir, store) = store();
        let created = store.append(draft("Ship spec")).unwrap();
        assert!(created.meta.updated_at.is_none());

        let patch = TaskPatch {
            status: Some(TaskStatus::Completed),
            ..TaskPatch::default()
        };
        let updated = store.update::<Task, _>(created.id(), &patch).unwrap();

        assert_eq!(updated.status, TaskStatus::Completed);
        assert_eq!(updated.title, "Ship spec");
        assert!(updated.meta.updated_at.is_some());
        assert_eq!(updated.meta.created_at, created.meta.created_at);
    }

    #[test]
    fn test_update_missing_id_leaves_collection_unchanged() {
        let (_dir, store) = store();
        store.append(draft("keep me")).unwrap();
        let before = std::fs::read_to_string(store.path(Kind::Tasks)).unwrap();

        let patch = TaskPatch {
            status: Some(TaskStatus::Completed),
            ..TaskPatch::default()
        };
        let err = store.update::<Task, _>("bad-id", &patch).unwrap_err();
        assert!(matches!(err, Error::RecordNotFound { .. }));

        let after = std::fs::read_to_string(store.path(Kind::Tasks)).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_remove_reports_whether_record_existed() {
        let (_dir, store) = store();
        let created = store.append(draft("to delete")).unwrap();

        assert!(store.remove::<Task>(created.id()).unwrap());
        assert!(!store.remove::<Task>(created.id()).unwrap());

        let tasks: Vec<Task> = store.list();
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_corrupt_file_degrades_to_empty() {
        let (_dir, store) = store();
        store.ensure_ready().unwrap();
        std::fs::write(store.path(Kind::Tasks), "{not json").unwrap();

        let tasks: Vec<Task> = store.list();
        assert!(tasks.is_empty());

        // And the store recovers on the next write
        let created = store.append(draft("fresh start")).unwrap();
        let tasks: Vec<Task> = store.list();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id(), created.id());
    }

    #[test]
    fn test_ensure_ready_is_idempotent() {
        let (_dir, store) = store();
        store.ensure_ready().unwrap();
        store.ensure_ready().unwrap();
        assert!(store.data_dir().exists());
    }

    #[test]
    fn test_atomic_write_replaces_contents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.json");

        atomic_write(&path, "[1]").unwrap();
        atomic_write(&path, "[1,2]").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[1,2]");
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_generated_ids_carry_kind_prefix() {
        let id = generate_id(Kind::Clients);
        assert!(id.starts_with("client-"));
        assert_eq!(id.len(), "client-".len() + 12);
    }
}
