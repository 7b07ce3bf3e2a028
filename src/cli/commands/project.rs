//! Project command implementations.

use colored::Colorize;

use crate::cli::ProjectCommands;
use crate::error::Result;
use crate::model::{ProjectDraft, ProjectPatch, Record};
use crate::workspace::Workspace;

/// Execute project commands.
pub fn execute(command: &ProjectCommands, ws: &Workspace, json: bool) -> Result<()> {
    match command {
        ProjectCommands::Add {
            name,
            status,
            progress,
        } => add(name, status.clone(), *progress, ws, json),
        ProjectCommands::List => list(ws, json),
        ProjectCommands::Update {
            id,
            name,
            status,
            progress,
        } => update(id, name.clone(), status.clone(), *progress, ws, json),
    }
}

fn add(
    name: &str,
    status: Option<String>,
    progress: Option<u8>,
    ws: &Workspace,
    json: bool,
) -> Result<()> {
    let project = ws.add_project(ProjectDraft {
        name: name.to_string(),
        status,
        progress,
    })?;

    if crate::is_silent() {
        println!("{}", project.id());
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string(&project)?);
    } else {
        println!(
            "Added project {} [{} / {}%]",
            project.id().bold(),
            project.status,
            project.progress
        );
    }

    Ok(())
}

fn list(ws: &Workspace, json: bool) -> Result<()> {
    let projects = ws.list_projects();

    if json {
        println!("{}", serde_json::to_string(&projects)?);
        return Ok(());
    }

    if projects.is_empty() {
        println!("No projects found.");
        return Ok(());
    }

    println!("Projects ({} found):", projects.len());
    println!();
    for project in &projects {
        println!(
            "• {}  {}  [{}]  {}",
            project.name,
            progress_bar(project.progress),
            project.status,
            project.id().dimmed()
        );
    }

    Ok(())
}

/// Ten-segment progress bar, e.g. `[####······] 40%`.
fn progress_bar(progress: u8) -> String {
    let filled = usize::from(progress.min(100)) / 10;
    format!("[{}{}] {}%", "#".repeat(filled), "·".repeat(10 - filled), progress)
}

fn update(
    id: &str,
    name: Option<String>,
    status: Option<String>,
    progress: Option<u8>,
    ws: &Workspace,
    json: bool,
) -> Result<()> {
    let project = ws.update_project(
        id,
        &ProjectPatch {
            name,
            status,
            progress,
        },
    )?;

    if crate::is_silent() {
        println!("{}", project.id());
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string(&project)?);
    } else {
        println!(
            "Updated project {} [{} / {}%]",
            project.id().bold(),
            project.status,
            project.progress
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0), "[··········] 0%");
        assert_eq!(progress_bar(40), "[####······] 40%");
        assert_eq!(progress_bar(100), "[##########] 100%");
    }
}
