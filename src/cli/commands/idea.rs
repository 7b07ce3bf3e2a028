//! Idea command implementations.

use colored::Colorize;

use crate::cli::IdeaCommands;
use crate::error::Result;
use crate::model::{IdeaDraft, Record};
use crate::workspace::Workspace;

/// Execute idea commands.
pub fn execute(command: &IdeaCommands, ws: &Workspace, json: bool) -> Result<()> {
    match command {
        IdeaCommands::Add { title, status } => add(title, status.clone(), ws, json),
        IdeaCommands::List => list(ws, json),
    }
}

fn add(title: &str, status: Option<String>, ws: &Workspace, json: bool) -> Result<()> {
    let idea = ws.add_idea(IdeaDraft {
        title: title.to_string(),
        status,
    })?;

    if crate::is_silent() {
        println!("{}", idea.id());
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string(&idea)?);
    } else {
        println!("Captured idea {} [{}]", idea.id().bold(), idea.status);
    }

    Ok(())
}

fn list(ws: &Workspace, json: bool) -> Result<()> {
    let ideas = ws.list_ideas();

    if json {
        println!("{}", serde_json::to_string(&ideas)?);
        return Ok(());
    }

    if ideas.is_empty() {
        println!("No ideas yet.");
        return Ok(());
    }

    println!("Ideas ({} found):", ideas.len());
    println!();
    for idea in &ideas {
        println!("• {}  [{}]  {}", idea.title, idea.status, idea.id().dimmed());
    }

    Ok(())
}
