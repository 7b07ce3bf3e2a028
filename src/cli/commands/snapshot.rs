//! Snapshot command implementations.

use std::fs;
use std::path::Path;

use crate::cli::SnapshotCommands;
use crate::error::{Error, Result};
use crate::remote::RemoteClient;
use crate::snapshot::{Snapshot, SnapshotCounts, export_all, import_all};
use crate::workspace::Workspace;

/// Execute snapshot commands.
pub fn execute(command: &SnapshotCommands, ws: &Workspace, json: bool) -> Result<()> {
    match command {
        SnapshotCommands::Export { output } => export(output.as_deref(), ws, json),
        SnapshotCommands::Import { input } => import(input, ws, json),
        SnapshotCommands::Push => push(ws, json),
    }
}

fn export(output: Option<&Path>, ws: &Workspace, json: bool) -> Result<()> {
    let snapshot = export_all(ws);
    let payload = serde_json::to_string_pretty(&snapshot)?;

    match output {
        Some(path) => {
            fs::write(path, &payload)?;
            let counts = SnapshotCounts::of(&snapshot);
            if json {
                println!(
                    "{}",
                    serde_json::json!({ "path": path, "records": counts.total() })
                );
            } else {
                println!(
                    "Exported {} records to {}",
                    counts.total(),
                    path.display()
                );
            }
        }
        // Bare payload on stdout so it pipes cleanly
        None => println!("{payload}"),
    }

    Ok(())
}

fn import(input: &Path, ws: &Workspace, json: bool) -> Result<()> {
    let raw = fs::read_to_string(input)
        .map_err(|e| Error::Snapshot(format!("cannot read {}: {e}", input.display())))?;
    let snapshot: Snapshot = serde_json::from_str(&raw)
        .map_err(|e| Error::Snapshot(format!("invalid snapshot file: {e}")))?;

    let counts = import_all(ws, &snapshot)?;

    if json {
        println!("{}", serde_json::to_string(&counts)?);
    } else {
        println!(
            "Imported {} records from {}",
            counts.total(),
            input.display()
        );
    }

    Ok(())
}

fn push(ws: &Workspace, json: bool) -> Result<()> {
    let Some(client) = RemoteClient::from_env() else {
        return Err(Error::Remote("no hosted mirror configured".to_string()));
    };

    let snapshot = export_all(ws);
    let counts = SnapshotCounts::of(&snapshot);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| Error::Other(format!("Failed to create async runtime: {e}")))?;
    rt.block_on(client.push_snapshot(&snapshot))?;

    if json {
        println!(
            "{}",
            serde_json::json!({ "pushed": true, "records": counts.total() })
        );
    } else {
        println!("Pushed {} records to the hosted mirror", counts.total());
    }

    Ok(())
}
