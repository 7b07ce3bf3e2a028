//! File-backed storage layer.
//!
//! One JSON document per entity kind under the data directory, loaded
//! and rewritten wholesale on every mutation. That trade (write cost
//! for implementation simplicity) is deliberate: record counts are
//! personal-scale, and it keeps the layer free of any indexing or
//! query machinery.
//!
//! # Submodules
//!
//! - [`file`] - Generic JSON-array store with atomic rewrites
//! - [`ledger`] - Financial ledger with derived totals
//! - [`journal`] - Append-only daily Markdown memory files
//! - [`activity`] - Activity recorder (feed + journal mirror)
//!
//! # Failure policy
//!
//! Reads never fail visibly: an absent file is an empty collection and
//! a corrupt file degrades to an empty collection with a `warn` log.
//! Writes on the primary collection fail hard (`StoreWrite`); journal
//! writes are best-effort and never abort the primary operation.

pub mod activity;
pub mod file;
pub mod journal;
pub mod ledger;

pub use activity::ActivityLog;
pub use file::FileStore;
pub use journal::Journal;
pub use ledger::LedgerStore;

use chrono::{SecondsFormat, Utc};

/// Current instant as RFC 3339 with millisecond precision.
#[must_use]
pub(crate) fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Today's day stamp, `YYYY-MM-DD`.
#[must_use]
pub(crate) fn today_stamp() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}
