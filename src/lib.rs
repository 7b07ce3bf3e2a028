//! Life OS CLI - a personal operations dashboard
//!
//! This crate provides the core functionality for the `lifeos` tool:
//! a file-backed record store for personal/business records (tasks,
//! clients, prospects, projects, finances, check-ins, ideas, reviews)
//! with a derived financial ledger, an append-only activity feed
//! mirrored into daily Markdown memory files, snapshot export/import,
//! and both a CLI and an HTTP surface over the same operations.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface using clap
//! - [`model`] - Record types, drafts and patches per entity kind
//! - [`store`] - JSON-file store, ledger, journal, activity recorder
//! - [`workspace`] - High-level operations tying the stores together
//! - [`snapshot`] - Export/import bundles
//! - [`server`] - axum HTTP API
//! - [`remote`] - Optional hosted-mirror push client
//! - [`config`] - Workspace root resolution
//! - [`error`] - Error types and handling

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod remote;
pub mod server;
pub mod snapshot;
pub mod store;
pub mod validate;
pub mod workspace;

pub use error::{Error, Result};

/// Global silent mode flag for `--silent` output.
///
/// When set, create/mutate commands print only the ID instead of full
/// output. Avoids threading a `silent` bool through every handler
/// signature.
pub static SILENT: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);

/// Check if silent mode is active.
#[inline]
#[must_use]
pub fn is_silent() -> bool {
    SILENT.load(std::sync::atomic::Ordering::Relaxed)
}
