//! Error types for the Life OS CLI.
//!
//! Provides structured error handling with:
//! - Machine-readable error codes (`ErrorCode`)
//! - Category-based exit codes (2=store, 3=not_found, 4=validation, etc.)
//! - Context-aware recovery hints
//! - Structured JSON output for piped / non-TTY consumers
//!
//! Two failure classes from the storage layer deliberately have no
//! variant here: a corrupt backing file degrades to an empty collection
//! on read, and a failed journal append never aborts the operation that
//! triggered it. Both are logged and swallowed at the store layer.

use crate::model::Kind;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Life OS operations.
pub type Result<T> = std::result::Result<T, Error>;

// ── Error Code ────────────────────────────────────────────────

/// Machine-readable error codes grouped by category.
///
/// Each code maps to a SCREAMING_SNAKE string and a category-based
/// exit code. Scripts match on the string; shells on the exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Store (exit 2)
    NotInitialized,
    AlreadyInitialized,
    StoreWriteError,

    // Not Found (exit 3)
    RecordNotFound,

    // Validation (exit 4)
    InvalidStatus,
    InvalidStage,
    InvalidPriority,
    InvalidArgument,

    // Snapshot (exit 6)
    SnapshotError,

    // Config (exit 7)
    ConfigError,

    // I/O (exit 8)
    IoError,
    JsonError,

    // Remote mirror (exit 9)
    RemoteError,

    // Internal (exit 1)
    InternalError,
}

impl ErrorCode {
    /// Machine-readable SCREAMING_SNAKE code string.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::NotInitialized => "NOT_INITIALIZED",
            Self::AlreadyInitialized => "ALREADY_INITIALIZED",
            Self::StoreWriteError => "STORE_WRITE_ERROR",
            Self::RecordNotFound => "RECORD_NOT_FOUND",
            Self::InvalidStatus => "INVALID_STATUS",
            Self::InvalidStage => "INVALID_STAGE",
            Self::InvalidPriority => "INVALID_PRIORITY",
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::SnapshotError => "SNAPSHOT_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
            Self::IoError => "IO_ERROR",
            Self::JsonError => "JSON_ERROR",
            Self::RemoteError => "REMOTE_ERROR",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Category-based exit code (1-9).
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::InternalError => 1,
            Self::NotInitialized | Self::AlreadyInitialized | Self::StoreWriteError => 2,
            Self::RecordNotFound => 3,
            Self::InvalidStatus
            | Self::InvalidStage
            | Self::InvalidPriority
            | Self::InvalidArgument => 4,
            Self::SnapshotError => 6,
            Self::ConfigError => 7,
            Self::IoError | Self::JsonError => 8,
            Self::RemoteError => 9,
        }
    }
}

// ── Error Enum ────────────────────────────────────────────────

/// Errors that can occur in Life OS CLI operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Workspace not initialized: run `lifeos init` first")]
    NotInitialized,

    #[error("Workspace already initialized at {path}")]
    AlreadyInitialized { path: PathBuf },

    #[error("{kind} record not found: {id}")]
    RecordNotFound { kind: Kind, id: String },

    #[error("{kind} record not found: {id} (did you mean: {}?)", similar.join(", "))]
    RecordNotFoundSimilar {
        kind: Kind,
        id: String,
        similar: Vec<String>,
    },

    #[error("Failed to persist {kind}: {source}")]
    StoreWrite {
        kind: Kind,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("Invalid stage: {0}")]
    InvalidStage(String),

    #[error("Invalid priority: {0}")]
    InvalidPriority(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Snapshot error: {0}")]
    Snapshot(String),

    #[error("Remote mirror error: {0}")]
    Remote(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Map this error to its structured `ErrorCode`.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::NotInitialized => ErrorCode::NotInitialized,
            Self::AlreadyInitialized { .. } => ErrorCode::AlreadyInitialized,
            Self::RecordNotFound { .. } | Self::RecordNotFoundSimilar { .. } => {
                ErrorCode::RecordNotFound
            }
            Self::StoreWrite { .. } => ErrorCode::StoreWriteError,
            Self::InvalidStatus(_) => ErrorCode::InvalidStatus,
            Self::InvalidStage(_) => ErrorCode::InvalidStage,
            Self::InvalidPriority(_) => ErrorCode::InvalidPriority,
            Self::InvalidArgument(_) => ErrorCode::InvalidArgument,
            Self::Snapshot(_) => ErrorCode::SnapshotError,
            Self::Remote(_) => ErrorCode::RemoteError,
            Self::Config(_) => ErrorCode::ConfigError,
            Self::Io(_) => ErrorCode::IoError,
            Self::Json(_) => ErrorCode::JsonError,
            Self::Other(_) => ErrorCode::InternalError,
        }
    }

    /// Category-based exit code, delegating to the `ErrorCode`.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.error_code().exit_code()
    }

    /// Context-aware recovery hint for scripts and humans.
    ///
    /// Returns `None` if no actionable suggestion exists.
    #[must_use]
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::NotInitialized => {
                Some("Run `lifeos init` to create the workspace directories".to_string())
            }

            Self::AlreadyInitialized { path } => Some(format!(
                "Workspace already exists at {}. Use `--force` to recreate it.",
                path.display()
            )),

            Self::RecordNotFound { kind, id } => Some(format!(
                "No {kind} record with ID '{id}'. Use `lifeos {} list` to see existing records.",
                kind.noun()
            )),
            Self::RecordNotFoundSimilar { similar, .. } => {
                Some(format!("Did you mean: {}?", similar.join(", ")))
            }

            Self::InvalidStatus(_) => Some(
                "Task statuses: todo, in-progress, completed. \
                 Synonyms: done→completed, wip→in-progress, open→todo"
                    .to_string(),
            ),
            Self::InvalidStage(_) => Some(
                "Prospect stages: lead, prospect, qualified, closed, closed-lost. \
                 Synonyms: won→closed, lost→closed-lost"
                    .to_string(),
            ),
            Self::InvalidPriority(_) => {
                Some("Priorities: low, medium, high (or synonyms like urgent, minor)".to_string())
            }

            Self::Remote(_) => Some(
                "Set LIFEOS_REMOTE_URL (and optionally LIFEOS_REMOTE_KEY) to configure \
                 the hosted mirror"
                    .to_string(),
            ),

            Self::StoreWrite { .. }
            | Self::InvalidArgument(_)
            | Self::Snapshot(_)
            | Self::Config(_)
            | Self::Io(_)
            | Self::Json(_)
            | Self::Other(_) => None,
        }
    }

    /// Structured JSON representation for machine consumption.
    ///
    /// Includes error code, message, exit code, and optional recovery
    /// hint. Scripts parse this instead of stderr text.
    #[must_use]
    pub fn to_structured_json(&self) -> serde_json::Value {
        let code = self.error_code();
        let mut obj = serde_json::json!({
            "error": {
                "code": code.as_str(),
                "message": self.to_string(),
                "exit_code": code.exit_code(),
            }
        });

        if let Some(hint) = self.hint() {
            obj["error"]["hint"] = serde_json::Value::String(hint);
        }

        obj
    }
}
