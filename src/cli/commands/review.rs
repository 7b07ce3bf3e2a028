//! Weekly review command implementations.

use colored::Colorize;

use crate::cli::ReviewCommands;
use crate::error::Result;
use crate::model::{Record, ReviewDraft};
use crate::workspace::Workspace;

/// Execute review commands.
pub fn execute(command: &ReviewCommands, ws: &Workspace, json: bool) -> Result<()> {
    match command {
        ReviewCommands::Add { title, notes } => add(title, notes.as_deref(), ws, json),
        ReviewCommands::List => list(ws, json),
    }
}

fn add(title: &str, notes: Option<&str>, ws: &Workspace, json: bool) -> Result<()> {
    let mut body = serde_json::Map::new();
    if let Some(notes) = notes {
        body.insert(
            "notes".to_string(),
            serde_json::Value::String(notes.to_string()),
        );
    }

    let review = ws.add_review(ReviewDraft {
        title: title.to_string(),
        body,
    })?;

    if crate::is_silent() {
        println!("{}", review.id());
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string(&review)?);
    } else {
        println!(
            "Added review {} [week {}]",
            review.id().bold(),
            review.week
        );
    }

    Ok(())
}

fn list(ws: &Workspace, json: bool) -> Result<()> {
    let reviews = ws.list_reviews();

    if json {
        println!("{}", serde_json::to_string(&reviews)?);
        return Ok(());
    }

    if reviews.is_empty() {
        println!("No reviews yet.");
        return Ok(());
    }

    println!("Weekly reviews ({} found):", reviews.len());
    println!();
    for review in &reviews {
        println!(
            "• week {:>2}  {}  {}",
            review.week,
            review.title,
            review.id().dimmed()
        );
    }

    Ok(())
}
