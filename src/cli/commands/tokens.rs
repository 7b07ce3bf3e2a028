//! Token usage command implementations.

use crate::cli::TokenCommands;
use crate::error::Result;
use crate::model::TokenLogDraft;
use crate::workspace::Workspace;

/// Execute token commands.
pub fn execute(command: &TokenCommands, ws: &Workspace, json: bool) -> Result<()> {
    match command {
        TokenCommands::Log { cost, meta } => log(*cost, meta, ws, json),
        TokenCommands::List { limit } => list(*limit, ws, json),
    }
}

fn log(cost: f64, meta: &[(String, String)], ws: &Workspace, json: bool) -> Result<()> {
    let metadata = meta
        .iter()
        .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
        .collect();

    let entry = ws.log_token_usage(TokenLogDraft { cost, metadata })?;

    if crate::is_silent() {
        println!("{}", entry.id);
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string(&entry)?);
    } else {
        println!("Logged token usage {} (${})", entry.id, entry.cost);
    }

    Ok(())
}

fn list(limit: usize, ws: &Workspace, json: bool) -> Result<()> {
    let logs = ws.list_token_logs();
    // Most recent window, like the dashboard's cost panel
    let start = logs.len().saturating_sub(limit);
    let window = &logs[start..];

    if json {
        println!("{}", serde_json::to_string(window)?);
        return Ok(());
    }

    if window.is_empty() {
        println!("No token usage logged.");
        return Ok(());
    }

    let total: f64 = window.iter().map(|l| l.cost).sum();
    println!("Token usage (last {} samples, ${total} total):", window.len());
    println!();
    for entry in window.iter().rev() {
        println!("• {}  ${}", entry.timestamp, entry.cost);
    }

    Ok(())
}
