//! Configuration management.
//!
//! Resolves the workspace root (the single directory everything
//! lives under) once at process start; the resulting [`Paths`] are
//! read-only after that.
//!
//! Layout under the root:
//!
//! ```text
//! ~/.lifeos/
//!   data/        one JSON document per entity kind
//!   memory/      one Markdown file per calendar day
//!   MEMORY.md    cumulative memory log
//! ```

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Resolved workspace paths.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Workspace root directory.
    pub root: PathBuf,
    /// Directory of the JSON collections.
    pub data_dir: PathBuf,
    /// Directory of the per-day Markdown files.
    pub memory_dir: PathBuf,
    /// Cumulative memory log file.
    pub main_memory: PathBuf,
}

impl Paths {
    /// Derive the standard layout under a root.
    #[must_use]
    pub fn under(root: PathBuf) -> Self {
        Self {
            data_dir: root.join("data"),
            memory_dir: root.join("memory"),
            main_memory: root.join("MEMORY.md"),
            root,
        }
    }
}

/// Get the default workspace root location (`~/.lifeos`).
#[must_use]
pub fn default_root() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".lifeos"))
}

/// Resolve the workspace root.
///
/// Priority:
/// 1. Explicit `--root` flag
/// 2. `LIFEOS_ROOT` environment variable
/// 3. Default location: `~/.lifeos`
///
/// # Errors
///
/// Returns a config error if no home directory can be determined and
/// neither override is set.
pub fn resolve_root(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    if let Ok(root) = std::env::var("LIFEOS_ROOT") {
        if !root.trim().is_empty() {
            return Ok(PathBuf::from(root));
        }
    }

    default_root().ok_or_else(|| {
        Error::Config("Could not determine the Life OS workspace root".to_string())
    })
}

/// Hosted mirror base URL, if configured (`LIFEOS_REMOTE_URL`).
#[must_use]
pub fn remote_url() -> Option<String> {
    std::env::var("LIFEOS_REMOTE_URL")
        .ok()
        .filter(|v| !v.trim().is_empty())
}

/// Hosted mirror API key, if configured (`LIFEOS_REMOTE_KEY`).
#[must_use]
pub fn remote_key() -> Option<String> {
    std::env::var("LIFEOS_REMOTE_KEY")
        .ok()
        .filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_root_with_explicit() {
        let explicit = PathBuf::from("/custom/workspace");
        let result = resolve_root(Some(&explicit)).unwrap();
        assert_eq!(result, explicit);
    }

    #[test]
    fn test_paths_layout() {
        let paths = Paths::under(PathBuf::from("/w"));
        assert_eq!(paths.data_dir, PathBuf::from("/w/data"));
        assert_eq!(paths.memory_dir, PathBuf::from("/w/memory"));
        assert_eq!(paths.main_memory, PathBuf::from("/w/MEMORY.md"));
    }

    #[test]
    fn test_default_root_returns_some() {
        assert!(default_root().is_some());
    }
}
