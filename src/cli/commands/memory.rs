//! Memory log command implementations.

use crate::cli::MemoryCommands;
use crate::error::Result;
use crate::workspace::Workspace;

/// Execute memory commands.
pub fn execute(command: &MemoryCommands, ws: &Workspace, json: bool) -> Result<()> {
    match command {
        MemoryCommands::Today => today(ws, json),
        MemoryCommands::Main => main_log(ws, json),
        MemoryCommands::Show { date } => show(date, ws, json),
    }
}

fn today(ws: &Workspace, json: bool) -> Result<()> {
    let content = ws
        .journal()
        .read_today()
        .unwrap_or_else(|| "No entries yet".to_string());
    print_content(&content, json)
}

fn main_log(ws: &Workspace, json: bool) -> Result<()> {
    let content = ws
        .journal()
        .read_main()
        .unwrap_or_else(|| "No entries yet".to_string());
    print_content(&content, json)
}

fn show(date: &str, ws: &Workspace, json: bool) -> Result<()> {
    let content = ws
        .journal()
        .read_day(date)
        .unwrap_or_else(|| format!("No entries for {date}"));
    print_content(&content, json)
}

fn print_content(content: &str, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::json!({ "content": content }));
    } else {
        println!("{content}");
    }
    Ok(())
}
