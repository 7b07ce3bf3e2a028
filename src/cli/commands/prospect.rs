//! Prospect command implementations.

use colored::Colorize;

use crate::cli::ProspectCommands;
use crate::error::{Error, Result};
use crate::model::{ProspectDraft, ProspectPatch, Record, Stage};
use crate::validate::normalize_stage;
use crate::workspace::Workspace;

/// Execute prospect commands.
pub fn execute(command: &ProspectCommands, ws: &Workspace, json: bool) -> Result<()> {
    match command {
        ProspectCommands::Add {
            name,
            stage,
            next_action,
        } => add(name, stage.as_deref(), next_action.clone(), ws, json),
        ProspectCommands::List { stage } => list(stage.as_deref(), ws, json),
        ProspectCommands::Update {
            id,
            name,
            stage,
            next_action,
        } => update(
            id,
            name.clone(),
            stage.as_deref(),
            next_action.clone(),
            ws,
            json,
        ),
    }
}

fn parse_stage(input: &str) -> Result<Stage> {
    normalize_stage(input).map_err(|(original, _)| Error::InvalidStage(original))
}

fn add(
    name: &str,
    stage: Option<&str>,
    next_action: Option<String>,
    ws: &Workspace,
    json: bool,
) -> Result<()> {
    let prospect = ws.add_prospect(ProspectDraft {
        name: name.to_string(),
        stage: stage.map(parse_stage).transpose()?,
        next_action,
    })?;

    if crate::is_silent() {
        println!("{}", prospect.id());
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string(&prospect)?);
    } else {
        println!(
            "Added prospect {} [{}]",
            prospect.id().bold(),
            prospect.stage
        );
    }

    Ok(())
}

fn list(stage: Option<&str>, ws: &Workspace, json: bool) -> Result<()> {
    let filter = stage.map(parse_stage).transpose()?;
    let mut prospects = ws.list_prospects();
    if let Some(filter) = filter {
        prospects.retain(|p| p.stage == filter);
    }

    if json {
        println!("{}", serde_json::to_string(&prospects)?);
        return Ok(());
    }

    if prospects.is_empty() {
        println!("No prospects found.");
        return Ok(());
    }

    println!("Pipeline ({} prospects):", prospects.len());
    println!();
    for prospect in &prospects {
        let stage = match prospect.stage {
            Stage::Closed => prospect.stage.to_string().green(),
            Stage::ClosedLost => prospect.stage.to_string().red(),
            _ => prospect.stage.to_string().yellow(),
        };
        print!("• {}  [{stage}]  {}", prospect.name, prospect.id().dimmed());
        if let Some(next_action) = &prospect.next_action {
            print!("\n    next: {next_action}");
        }
        println!();
    }

    Ok(())
}

fn update(
    id: &str,
    name: Option<String>,
    stage: Option<&str>,
    next_action: Option<String>,
    ws: &Workspace,
    json: bool,
) -> Result<()> {
    let patch = ProspectPatch {
        name,
        stage: stage.map(parse_stage).transpose()?,
        next_action,
    };

    let prospect = ws.update_prospect(id, &patch)?;

    if crate::is_silent() {
        println!("{}", prospect.id());
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string(&prospect)?);
    } else {
        println!(
            "Updated prospect {} [{}]",
            prospect.id().bold(),
            prospect.stage
        );
    }

    Ok(())
}
