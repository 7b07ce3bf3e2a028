//! Financial ledger types.
//!
//! The ledger is one document holding two ordered entry lists plus a
//! derived [`Totals`] cache. The cache is never authoritative: it is
//! recomputed from the lists inside the same operation that appends an
//! entry, and caller-supplied totals are never accepted.

use serde::{Deserialize, Serialize};

/// Whether an entry is money in or money out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Revenue,
    Expense,
}

impl EntryKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Revenue => "revenue",
            Self::Expense => "expense",
        }
    }
}

/// A single ledger line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialEntry {
    /// Store-assigned, `revenue-…` or `expense-…`.
    pub id: String,

    /// RFC 3339 timestamp, assigned at log time.
    pub date: String,

    #[serde(rename = "type")]
    pub entry_kind: EntryKind,

    pub amount: f64,

    pub description: String,

    /// Monthly-recurring flag; only meaningful on revenue entries.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub recurring: bool,
}

/// Caller input for logging a ledger entry.
#[derive(Debug, Clone, Deserialize)]
pub struct FinancialEntryDraft {
    pub amount: f64,
    pub description: String,
    #[serde(default)]
    pub recurring: bool,
}

/// Derived ledger totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub revenue: f64,
    pub expenses: f64,
    /// Monthly recurring revenue: revenue entries flagged `recurring`.
    pub mrr: f64,
}

impl Totals {
    /// Recompute totals from the entry lists.
    ///
    /// This is the only way totals come into existence; the persisted
    /// `total` object is a cache of this function's result.
    #[must_use]
    pub fn of(revenue: &[FinancialEntry], expenses: &[FinancialEntry]) -> Self {
        Self {
            revenue: revenue.iter().map(|e| e.amount).sum(),
            expenses: expenses.iter().map(|e| e.amount).sum(),
            mrr: revenue
                .iter()
                .filter(|e| e.recurring)
                .map(|e| e.amount)
                .sum(),
        }
    }
}

/// The financial ledger document (`financials.json`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    pub revenue: Vec<FinancialEntry>,

    #[serde(default)]
    pub expenses: Vec<FinancialEntry>,

    #[serde(default)]
    pub total: Totals,
}

impl Ledger {
    /// Refresh the derived totals from the entry lists.
    pub fn recompute(&mut self) {
        self.total = Totals::of(&self.revenue, &self.expenses);
    }

    /// True when the cached totals match a recomputation.
    #[must_use]
    pub fn totals_consistent(&self) -> bool {
        self.total == Totals::of(&self.revenue, &self.expenses)
    }
}
