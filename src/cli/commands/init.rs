//! Initialize the Life OS workspace.

use serde::Serialize;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::workspace::Workspace;

#[derive(Serialize)]
struct InitOutput {
    root: PathBuf,
    data_dir: PathBuf,
    memory_dir: PathBuf,
}

/// Execute the init command.
///
/// Creates the workspace root with its `data/` and `memory/`
/// directories and the cumulative `MEMORY.md`. Collections themselves
/// appear lazily on first write.
///
/// # Errors
///
/// Returns [`Error::AlreadyInitialized`] if the root exists and
/// `--force` was not given, or an I/O error if creation fails.
pub fn execute(ws: &Workspace, force: bool, json: bool) -> Result<()> {
    let paths = ws.paths();

    if paths.data_dir.exists() && !force {
        return Err(Error::AlreadyInitialized {
            path: paths.root.clone(),
        });
    }

    ws.ensure_ready()?;

    if json {
        let output = InitOutput {
            root: paths.root.clone(),
            data_dir: paths.data_dir.clone(),
            memory_dir: paths.memory_dir.clone(),
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("Initialized Life OS workspace");
        println!("  Root:   {}", paths.root.display());
        println!("  Data:   {}", paths.data_dir.display());
        println!("  Memory: {}", paths.memory_dir.display());
        println!();
        println!("Next: `lifeos task add \"First task\"` or `lifeos serve`.");
    }

    Ok(())
}
