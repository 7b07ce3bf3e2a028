//! Task command implementations.

use colored::Colorize;

use crate::cli::TaskCommands;
use crate::error::{Error, Result};
use crate::model::{Record, Task, TaskDraft, TaskPatch, TaskStatus};
use crate::validate::{normalize_priority, normalize_task_status};
use crate::workspace::Workspace;

/// Execute task commands.
pub fn execute(command: &TaskCommands, ws: &Workspace, json: bool) -> Result<()> {
    match command {
        TaskCommands::Add {
            title,
            status,
            priority,
        } => add(title, status.as_deref(), priority.as_deref(), ws, json),
        TaskCommands::List { status } => list(status.as_deref(), ws, json),
        TaskCommands::Update {
            id,
            title,
            status,
            priority,
        } => update(
            id,
            title.clone(),
            status.as_deref(),
            priority.as_deref(),
            ws,
            json,
        ),
        TaskCommands::Done { id } => done(id, ws, json),
        TaskCommands::Delete { id } => delete(id, ws, json),
    }
}

fn parse_status(input: &str) -> Result<TaskStatus> {
    normalize_task_status(input).map_err(|(original, _)| Error::InvalidStatus(original))
}

fn add(
    title: &str,
    status: Option<&str>,
    priority: Option<&str>,
    ws: &Workspace,
    json: bool,
) -> Result<()> {
    let draft = TaskDraft {
        title: title.to_string(),
        status: status.map(parse_status).transpose()?,
        priority: priority
            .map(|p| normalize_priority(p).map_err(|(original, _)| Error::InvalidPriority(original)))
            .transpose()?,
    };

    let task = ws.add_task(draft)?;

    if crate::is_silent() {
        println!("{}", task.id());
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string(&task)?);
    } else {
        println!(
            "Added task {} [{} / {}]",
            task.id().bold(),
            task.status,
            task.priority
        );
    }

    Ok(())
}

fn list(status: Option<&str>, ws: &Workspace, json: bool) -> Result<()> {
    let filter = status.map(parse_status).transpose()?;
    let mut tasks = ws.list_tasks();
    if let Some(filter) = filter {
        tasks.retain(|t| t.status == filter);
    }

    if json {
        println!("{}", serde_json::to_string(&tasks)?);
        return Ok(());
    }

    if tasks.is_empty() {
        println!("No tasks found.");
        return Ok(());
    }

    println!("Tasks ({} found):", tasks.len());
    println!();
    for task in &tasks {
        println!("{}", format_task(task));
    }

    Ok(())
}

fn format_task(task: &Task) -> String {
    let marker = match task.status {
        TaskStatus::Todo => "[ ]".normal(),
        TaskStatus::InProgress => "[>]".yellow(),
        TaskStatus::Completed => "[x]".green(),
    };
    format!(
        "{marker} {}  {} ({})",
        task.title,
        task.id().dimmed(),
        task.priority
    )
}

fn update(
    id: &str,
    title: Option<String>,
    status: Option<&str>,
    priority: Option<&str>,
    ws: &Workspace,
    json: bool,
) -> Result<()> {
    let patch = TaskPatch {
        title,
        status: status.map(parse_status).transpose()?,
        priority: priority
            .map(|p| normalize_priority(p).map_err(|(original, _)| Error::InvalidPriority(original)))
            .transpose()?,
    };

    let task = match ws.update_task(id, &patch) {
        Ok(task) => task,
        Err(Error::RecordNotFound { kind, id: missing }) => {
            let existing: Vec<String> = ws
                .list_tasks()
                .iter()
                .map(|t| t.id().to_string())
                .collect();
            let similar = crate::validate::find_similar_ids(&missing, &existing, 3);
            return Err(if similar.is_empty() {
                Error::RecordNotFound { kind, id: missing }
            } else {
                Error::RecordNotFoundSimilar {
                    kind,
                    id: missing,
                    similar,
                }
            });
        }
        Err(e) => return Err(e),
    };

    if crate::is_silent() {
        println!("{}", task.id());
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string(&task)?);
    } else {
        println!("Updated task {} [{}]", task.id().bold(), task.status);
    }

    Ok(())
}

fn done(id: &str, ws: &Workspace, json: bool) -> Result<()> {
    update(id, None, Some("completed"), None, ws, json)
}

fn delete(id: &str, ws: &Workspace, json: bool) -> Result<()> {
    let existed = ws.delete_task(id)?;

    if json {
        println!("{}", serde_json::json!({ "id": id, "deleted": existed }));
    } else if existed {
        println!("Deleted task {id}");
    } else {
        println!("No task with ID {id} (nothing deleted)");
    }

    Ok(())
}
