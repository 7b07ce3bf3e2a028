//! Snapshot export/import.
//!
//! A snapshot is one serialized bundle of every collection, used for
//! backup and migration. Export is a pure read; import overwrites each
//! kind present in the snapshot wholesale and leaves absent kinds
//! untouched. Import is best-effort, not atomic: a failure partway
//! through leaves already-processed kinds overwritten.
//!
//! # Submodules
//!
//! - [`types`] - The snapshot bundle and per-kind counts
//! - [`hash`] - SHA-256 content hashing for change detection
//! - [`export`] - Building a snapshot from a workspace
//! - [`import`] - Restoring a snapshot into a workspace

pub mod export;
pub mod hash;
pub mod import;
pub mod types;

pub use export::export_all;
pub use hash::content_hash;
pub use import::import_all;
pub use types::{Snapshot, SnapshotCounts};
