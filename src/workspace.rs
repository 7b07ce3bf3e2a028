//! High-level workspace operations.
//!
//! [`Workspace`] ties the record store, the financial ledger and the
//! activity recorder together and exposes the operation-per-entity
//! surface both the CLI and the HTTP server call. Every mutating
//! operation (token logging excepted) records a human-readable
//! activity message after the primary write lands.
//!
//! The audit trail is best-effort from here: a failed activity or
//! journal write is logged at `warn` and never fails the operation
//! whose entity write already succeeded.

use std::path::PathBuf;

use parking_lot::Mutex;
use tracing::warn;

use crate::config::Paths;
use crate::error::Result;
use crate::model::{
    ActivityEntry, Checkin, CheckinDraft, Client, ClientDraft, ClientPatch, FinancialEntry,
    FinancialEntryDraft, Idea, IdeaDraft, Kind, Ledger, Project, ProjectDraft, ProjectPatch,
    Prospect, ProspectDraft, ProspectPatch, Review, ReviewDraft, Task, TaskDraft, TaskPatch,
    TokenLog, TokenLogDraft,
};
use crate::store::{ActivityLog, FileStore, Journal, LedgerStore};

/// The assembled Life OS workspace.
///
/// Cheap to construct; directories are created lazily by the first
/// mutation (or eagerly via [`Workspace::ensure_ready`]). Mutations
/// serialize on a process-wide lock; two simultaneous requests can no
/// longer drop each other's whole-file rewrite within one process.
/// Cross-process writers remain unsynchronized, an accepted limitation
/// for a single-user deployment.
pub struct Workspace {
    paths: Paths,
    store: FileStore,
    ledger: LedgerStore,
    activity: ActivityLog,
    journal: Journal,
    write_lock: Mutex<()>,
}

impl Workspace {
    /// Assemble a workspace rooted at `root`.
    #[must_use]
    pub fn open(root: PathBuf) -> Self {
        let paths = Paths::under(root);
        let store = FileStore::new(paths.data_dir.clone());
        let journal = Journal::new(paths.memory_dir.clone(), paths.main_memory.clone());
        let ledger = LedgerStore::new(store.clone());
        let activity = ActivityLog::new(store.clone(), journal.clone());
        Self {
            paths,
            store,
            ledger,
            activity,
            journal,
            write_lock: Mutex::new(()),
        }
    }

    /// Resolved workspace paths.
    #[must_use]
    pub fn paths(&self) -> &Paths {
        &self.paths
    }

    /// The underlying record store (snapshot import/export path).
    #[must_use]
    pub fn store(&self) -> &FileStore {
        &self.store
    }

    /// The ledger store (snapshot import path).
    #[must_use]
    pub fn ledger(&self) -> &LedgerStore {
        &self.ledger
    }

    /// The Markdown journal (memory read endpoints).
    #[must_use]
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Create the data and memory directories.
    ///
    /// # Errors
    ///
    /// Returns an error if either directory cannot be created.
    pub fn ensure_ready(&self) -> Result<()> {
        self.store.ensure_ready()?;
        self.journal.ensure_ready()
    }

    /// Record to the audit trail, best-effort.
    fn log_activity(&self, message: &str) {
        if let Err(e) = self.activity.record(message) {
            warn!(error = %e, message, "activity record failed; primary operation kept");
        }
    }

    // ===============
    // Tasks
    // ===============

    /// All tasks, insertion order.
    #[must_use]
    pub fn list_tasks(&self) -> Vec<Task> {
        self.store.list()
    }

    /// Create a task.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be persisted.
    pub fn add_task(&self, draft: TaskDraft) -> Result<Task> {
        let _guard = self.write_lock.lock();
        let task = self.store.append(Task::from_draft(draft))?;
        self.log_activity(&format!(
            "Task Created: \"{}\" ({})",
            task.title, task.status
        ));
        Ok(task)
    }

    /// Patch a task by ID.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::RecordNotFound`] for an unknown
    /// ID, or a write error if persisting fails.
    pub fn update_task(&self, id: &str, patch: &TaskPatch) -> Result<Task> {
        let _guard = self.write_lock.lock();
        let task = self.store.update::<Task, _>(id, patch)?;
        self.log_activity(&format!("Task Updated: \"{}\"", task.title));
        Ok(task)
    }

    /// Delete a task by ID; returns whether it existed.
    ///
    /// A miss is not an error and, unlike a hit, leaves no activity
    /// entry; deleting twice reads the same as deleting once.
    ///
    /// # Errors
    ///
    /// Returns a write error if the rewrite fails.
    pub fn delete_task(&self, id: &str) -> Result<bool> {
        let _guard = self.write_lock.lock();
        let existed = self.store.remove::<Task>(id)?;
        if existed {
            self.log_activity("Task Deleted");
        }
        Ok(existed)
    }

    // ===============
    // Clients
    // ===============

    /// All clients, insertion order.
    #[must_use]
    pub fn list_clients(&self) -> Vec<Client> {
        self.store.list()
    }

    /// Create a client.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be persisted.
    pub fn add_client(&self, draft: ClientDraft) -> Result<Client> {
        let _guard = self.write_lock.lock();
        let client = self.store.append(Client::from_draft(draft))?;
        self.log_activity(&format!("New Client: {}", client.name));
        Ok(client)
    }

    /// Patch a client by ID.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::RecordNotFound`] for an unknown
    /// ID, or a write error if persisting fails.
    pub fn update_client(&self, id: &str, patch: &ClientPatch) -> Result<Client> {
        let _guard = self.write_lock.lock();
        let client = self.store.update::<Client, _>(id, patch)?;
        self.log_activity(&format!("Client Updated: {}", client.name));
        Ok(client)
    }

    /// Delete a client by ID; returns whether it existed.
    ///
    /// # Errors
    ///
    /// Returns a write error if the rewrite fails.
    pub fn delete_client(&self, id: &str) -> Result<bool> {
        let _guard = self.write_lock.lock();
        let existed = self.store.remove::<Client>(id)?;
        if existed {
            self.log_activity("Client Removed");
        }
        Ok(existed)
    }

    // ===============
    // Prospects
    // ===============

    /// All prospects, insertion order.
    #[must_use]
    pub fn list_prospects(&self) -> Vec<Prospect> {
        self.store.list()
    }

    /// Create a prospect.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be persisted.
    pub fn add_prospect(&self, draft: ProspectDraft) -> Result<Prospect> {
        let _guard = self.write_lock.lock();
        let prospect = self.store.append(Prospect::from_draft(draft))?;
        self.log_activity(&format!(
            "New Prospect: {} ({})",
            prospect.name, prospect.stage
        ));
        Ok(prospect)
    }

    /// Patch a prospect by ID.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::RecordNotFound`] for an unknown
    /// ID, or a write error if persisting fails.
    pub fn update_prospect(&self, id: &str, patch: &ProspectPatch) -> Result<Prospect> {
        let _guard = self.write_lock.lock();
        let prospect = self.store.update::<Prospect, _>(id, patch)?;
        self.log_activity(&format!("Prospect Updated: {}", prospect.name));
        Ok(prospect)
    }

    // ===============
    // Projects
    // ===============

    /// All projects, insertion order.
    #[must_use]
    pub fn list_projects(&self) -> Vec<Project> {
        self.store.list()
    }

    /// Create a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be persisted.
    pub fn add_project(&self, draft: ProjectDraft) -> Result<Project> {
        let _guard = self.write_lock.lock();
        let project = self.store.append(Project::from_draft(draft))?;
        self.log_activity(&format!("New Project: {}", project.name));
        Ok(project)
    }

    /// Patch a project by ID.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::RecordNotFound`] for an unknown
    /// ID, or a write error if persisting fails.
    pub fn update_project(&self, id: &str, patch: &ProjectPatch) -> Result<Project> {
        let _guard = self.write_lock.lock();
        let project = self.store.update::<Project, _>(id, patch)?;
        self.log_activity(&format!("Project Updated: {}", project.name));
        Ok(project)
    }

    // ===============
    // Ideas & reviews
    // ===============

    /// All ideas, insertion order.
    #[must_use]
    pub fn list_ideas(&self) -> Vec<Idea> {
        self.store.list()
    }

    /// Capture an idea.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be persisted.
    pub fn add_idea(&self, draft: IdeaDraft) -> Result<Idea> {
        let _guard = self.write_lock.lock();
        let idea = self.store.append(Idea::from_draft(draft))?;
        self.log_activity(&format!("New Idea: {}", idea.title));
        Ok(idea)
    }

    /// All weekly reviews, insertion order.
    #[must_use]
    pub fn list_reviews(&self) -> Vec<Review> {
        self.store.list()
    }

    /// Write a weekly review (week number derived).
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be persisted.
    pub fn add_review(&self, draft: ReviewDraft) -> Result<Review> {
        let _guard = self.write_lock.lock();
        let review = self.store.append(Review::from_draft(draft))?;
        self.log_activity(&format!("Weekly Review: {}", review.title));
        Ok(review)
    }

    // ===============
    // Check-ins
    // ===============

    /// All daily check-ins, insertion order.
    #[must_use]
    pub fn list_checkins(&self) -> Vec<Checkin> {
        self.store.load_collection(Kind::Checkins)
    }

    /// Log a daily check-in (date and timestamp derived).
    ///
    /// # Errors
    ///
    /// Returns a validation error for out-of-range scales, or a write
    /// error if persisting fails.
    pub fn log_checkin(&self, draft: CheckinDraft) -> Result<Checkin> {
        draft
            .validate()
            .map_err(crate::error::Error::InvalidArgument)?;

        let _guard = self.write_lock.lock();
        let mut checkins: Vec<Checkin> = self.store.load_collection(Kind::Checkins);
        let checkin = Checkin {
            id: crate::store::file::generate_id(Kind::Checkins),
            date: crate::store::today_stamp(),
            timestamp: crate::store::now_rfc3339(),
            energy: draft.energy,
            focus: draft.focus,
        };
        checkins.push(checkin.clone());
        self.store.persist(Kind::Checkins, &checkins)?;

        self.log_activity(&format!(
            "Daily Checkin: Energy {}/10, Focus {}/10",
            checkin.energy, checkin.focus
        ));
        Ok(checkin)
    }

    // ===============
    // Token usage
    // ===============

    /// All token-usage samples, insertion order.
    #[must_use]
    pub fn list_token_logs(&self) -> Vec<TokenLog> {
        self.store.load_collection(Kind::Tokens)
    }

    /// Log a token-usage sample.
    ///
    /// Intentionally emits no activity entry and no journal line.
    ///
    /// # Errors
    ///
    /// Returns a write error if persisting fails.
    pub fn log_token_usage(&self, draft: TokenLogDraft) -> Result<TokenLog> {
        let _guard = self.write_lock.lock();
        let mut logs: Vec<TokenLog> = self.store.load_collection(Kind::Tokens);
        let mut metadata = draft.metadata;
        // Typed fields win over whatever rode in with the metadata
        metadata.remove("id");
        metadata.remove("timestamp");
        let log = TokenLog {
            id: crate::store::file::generate_id(Kind::Tokens),
            timestamp: crate::store::now_rfc3339(),
            cost: draft.cost,
            metadata,
        };
        logs.push(log.clone());
        self.store.persist(Kind::Tokens, &logs)?;
        Ok(log)
    }

    // ===============
    // Financials
    // ===============

    /// The whole ledger (zeroed shape when absent).
    #[must_use]
    pub fn financials(&self) -> Ledger {
        self.ledger.read()
    }

    /// Log revenue and recompute totals.
    ///
    /// # Errors
    ///
    /// Returns a write error if the ledger cannot be persisted.
    pub fn log_revenue(&self, draft: FinancialEntryDraft) -> Result<FinancialEntry> {
        let _guard = self.write_lock.lock();
        let entry = self.ledger.log_revenue(draft)?;
        self.log_activity(&format!(
            "Revenue Logged: ${} - {}",
            entry.amount, entry.description
        ));
        Ok(entry)
    }

    /// Log an expense and recompute totals.
    ///
    /// # Errors
    ///
    /// Returns a write error if the ledger cannot be persisted.
    pub fn log_expense(&self, draft: FinancialEntryDraft) -> Result<FinancialEntry> {
        let _guard = self.write_lock.lock();
        let entry = self.ledger.log_expense(draft)?;
        self.log_activity(&format!(
            "Expense Logged: ${} - {}",
            entry.amount, entry.description
        ));
        Ok(entry)
    }

    // ===============
    // Activity
    // ===============

    /// The most recent `limit` activity entries, newest first.
    #[must_use]
    pub fn recent_activity(&self, limit: usize) -> Vec<ActivityEntry> {
        self.activity.recent(limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Record, TaskStatus};
    use tempfile::TempDir;

    fn workspace() -> (TempDir, Workspace) {
        let dir = TempDir::new().unwrap();
        let ws = Workspace::open(dir.path().join("workspace"));
        (dir, ws)
    }

    #[test]
    fn test_add_task_records_activity_and_journal() {
        let (_dir, ws) = workspace();
        let task = ws
            .add_task(TaskDraft {
                title: "Ship spec".to_string(),
                status: None,
                priority: None,
            })
            .unwrap();

        assert!(task.id().starts_with("task-"));
        assert_eq!(task.status, TaskStatus::Todo);

        let activity = ws.recent_activity(10);
        assert_eq!(activity.len(), 1);
        assert_eq!(activity[0].message, "Task Created: \"Ship spec\" (todo)");

        let today = ws.journal().read_today().unwrap();
        assert!(today.contains("Task Created: \"Ship spec\" (todo)"));
    }

    #[test]
    fn test_token_usage_emits_no_activity() {
        let (_dir, ws) = workspace();
        ws.log_token_usage(TokenLogDraft {
            cost: 0.5,
            metadata: serde_json::Map::new(),
        })
        .unwrap();

        assert_eq!(ws.list_token_logs().len(), 1);
        assert!(ws.recent_activity(10).is_empty());
        assert!(ws.journal().read_today().is_none());
    }

    #[test]
    fn test_delete_miss_leaves_no_activity() {
        let (_dir, ws) = workspace();
        assert!(!ws.delete_task("task-does-not-exist").unwrap());
        assert!(ws.recent_activity(10).is_empty());
    }

    #[test]
    fn test_delete_hit_records_activity() {
        let (_dir, ws) = workspace();
        let task = ws
            .add_task(TaskDraft {
                title: "temp".to_string(),
                status: None,
                priority: None,
            })
            .unwrap();

        assert!(ws.delete_task(task.id()).unwrap());
        let messages: Vec<_> = ws
            .recent_activity(10)
            .into_iter()
            .map(|e| e.message)
            .collect();
        assert!(messages.contains(&"Task Deleted".to_string()));
    }

    #[test]
    fn test_checkin_derives_date_and_validates() {
        let (_dir, ws) = workspace();

        let err = ws.log_checkin(CheckinDraft { energy: 0, focus: 5 }).unwrap_err();
        assert!(err.to_string().contains("energy"));

        let checkin = ws.log_checkin(CheckinDraft { energy: 7, focus: 8 }).unwrap();
        assert_eq!(checkin.date.len(), 10); // YYYY-MM-DD
        assert!(checkin.timestamp.starts_with(&checkin.date));

        let activity = ws.recent_activity(10);
        assert_eq!(activity[0].message, "Daily Checkin: Energy 7/10, Focus 8/10");
    }

    #[test]
    fn test_revenue_activity_message_format() {
        let (_dir, ws) = workspace();
        ws.log_revenue(FinancialEntryDraft {
            amount: 500.0,
            description: "invoice".to_string(),
            recurring: true,
        })
        .unwrap();

        let activity = ws.recent_activity(10);
        assert_eq!(activity[0].message, "Revenue Logged: $500 - invoice");
        assert_eq!(ws.financials().total.mrr, 500.0);
    }

    #[test]
    fn test_update_task_not_found_has_no_side_effects() {
        let (_dir, ws) = workspace();
        let err = ws
            .update_task(
                "task-missing",
                &TaskPatch {
                    status: Some(TaskStatus::Completed),
                    ..TaskPatch::default()
                },
            )
            .unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::RecordNotFound { kind: Kind::Tasks, .. }
        ));
        assert!(ws.recent_activity(10).is_empty());
    }
}
