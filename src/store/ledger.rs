//! Financial ledger store.
//!
//! Specializes the file store for the single `financials` document:
//! two ordered entry lists plus a derived totals cache that is
//! recomputed inside the same operation as every append; there is no
//! eventual consistency window in which the cache can be stale on
//! disk.

use tracing::debug;

use crate::error::Result;
use crate::model::{EntryKind, FinancialEntry, FinancialEntryDraft, Kind, Ledger};

use super::file::{FileStore, generate_id};
use super::now_rfc3339;

/// Store wrapper for the financial ledger.
#[derive(Debug, Clone)]
pub struct LedgerStore {
    store: FileStore,
}

impl LedgerStore {
    /// Wrap a file store; the ledger persists as `financials.json`.
    #[must_use]
    pub fn new(store: FileStore) -> Self {
        Self { store }
    }

    /// The whole ledger; a zeroed shape when absent or unreadable.
    ///
    /// Callers never special-case "ledger not yet created".
    #[must_use]
    pub fn read(&self) -> Ledger {
        self.store.load_or_default(Kind::Financials)
    }

    /// Append a revenue entry and refresh the derived totals.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::StoreWrite`] if the ledger
    /// cannot be persisted; the entry is not applied in that case.
    pub fn log_revenue(&self, draft: FinancialEntryDraft) -> Result<FinancialEntry> {
        self.log(EntryKind::Revenue, draft)
    }

    /// Append an expense entry and refresh the derived totals.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::StoreWrite`] if the ledger
    /// cannot be persisted.
    pub fn log_expense(&self, draft: FinancialEntryDraft) -> Result<FinancialEntry> {
        self.log(EntryKind::Expense, draft)
    }

    fn log(&self, entry_kind: EntryKind, draft: FinancialEntryDraft) -> Result<FinancialEntry> {
        let mut ledger = self.read();

        let entry = FinancialEntry {
            id: entry_id(entry_kind),
            date: now_rfc3339(),
            entry_kind,
            amount: draft.amount,
            description: draft.description,
            // The recurring flag only means anything on revenue
            recurring: matches!(entry_kind, EntryKind::Revenue) && draft.recurring,
        };

        match entry_kind {
            EntryKind::Revenue => ledger.revenue.push(entry.clone()),
            EntryKind::Expense => ledger.expenses.push(entry.clone()),
        }
        ledger.recompute();

        self.store.persist(Kind::Financials, &ledger)?;

        debug!(id = %entry.id, amount = entry.amount, "ledger entry logged");
        Ok(entry)
    }

    /// Overwrite the whole ledger document (snapshot import path).
    ///
    /// Totals are recomputed before persisting so an imported snapshot
    /// cannot smuggle in a drifted cache.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::StoreWrite`] if persisting fails.
    pub fn replace(&self, mut ledger: Ledger) -> Result<()> {
        ledger.recompute();
        self.store.persist(Kind::Financials, &ledger)
    }
}

/// Ledger entries are prefixed by their own kind, not the collection.
fn entry_id(entry_kind: EntryKind) -> String {
    let generated = generate_id(Kind::Financials);
    let hex = generated
        .rsplit('-')
        .next()
        .unwrap_or_default()
        .to_string();
    format!("{}-{hex}", entry_kind.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Totals;
    use tempfile::TempDir;

    fn ledger_store() -> (TempDir, LedgerStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("data"));
        (dir, LedgerStore::new(store))
    }

    fn draft(amount: f64, description: &str, recurring: bool) -> FinancialEntryDraft {
        FinancialEntryDraft {
            amount,
            description: description.to_string(),
            recurring,
        }
    }

    #[test]
    fn test_read_absent_ledger_is_zeroed() {
        let (_dir, ledger) = ledger_store();
        let read = ledger.read();
        assert!(read.revenue.is_empty());
        assert!(read.expenses.is_empty());
        assert_eq!(read.total, Totals::default());
    }

    #[test]
    fn test_totals_recomputed_after_every_call() {
        let (_dir, ledger) = ledger_store();

        ledger.log_revenue(draft(500.0, "invoice", true)).unwrap();
        let after_first = ledger.read();
        assert_eq!(after_first.total.revenue, 500.0);
        assert_eq!(after_first.total.mrr, 500.0);
        assert!(after_first.totals_consistent());

        ledger.log_revenue(draft(300.0, "one-off", false)).unwrap();
        let after_second = ledger.read();
        assert_eq!(after_second.total.revenue, 800.0);
        assert_eq!(after_second.total.expenses, 0.0);
        assert_eq!(after_second.total.mrr, 500.0);

        ledger.log_expense(draft(120.0, "hosting", false)).unwrap();
        let after_third = ledger.read();
        assert_eq!(after_third.total.expenses, 120.0);
        assert_eq!(after_third.total.mrr, 500.0);
        assert!(after_third.totals_consistent());
    }

    #[test]
    fn test_entry_ids_carry_entry_kind_prefix() {
        let (_dir, ledger) = ledger_store();
        let revenue = ledger.log_revenue(draft(100.0, "invoice", false)).unwrap();
        let expense = ledger.log_expense(draft(50.0, "tools", false)).unwrap();
        assert!(revenue.id.starts_with("revenue-"));
        assert!(expense.id.starts_with("expense-"));
    }

    #[test]
    fn test_recurring_ignored_on_expenses() {
        let (_dir, ledger) = ledger_store();
        ledger.log_expense(draft(75.0, "subscription", true)).unwrap();
        let read = ledger.read();
        assert!(!read.expenses[0].recurring);
        assert_eq!(read.total.mrr, 0.0);
    }

    #[test]
    fn test_replace_recomputes_imported_totals() {
        let (_dir, ledger) = ledger_store();
        ledger.log_revenue(draft(100.0, "invoice", true)).unwrap();

        let mut imported = ledger.read();
        imported.total = Totals {
            revenue: 12345.0,
            expenses: 0.0,
            mrr: 0.0,
        };

        ledger.replace(imported).unwrap();
        let read = ledger.read();
        assert_eq!(read.total.revenue, 100.0);
        assert_eq!(read.total.mrr, 100.0);
    }
}
