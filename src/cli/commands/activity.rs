//! Activity feed command implementation.

use colored::Colorize;

use crate::error::Result;
use crate::workspace::Workspace;

/// Execute `lifeos activity`.
pub fn execute(limit: usize, ws: &Workspace, json: bool) -> Result<()> {
    let entries = ws.recent_activity(limit);

    if json {
        println!("{}", serde_json::to_string(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No activity yet.");
        return Ok(());
    }

    println!("Recent activity ({} entries, newest first):", entries.len());
    println!();
    for entry in &entries {
        println!("{}  {}", entry.timestamp.dimmed(), entry.message);
    }

    Ok(())
}
