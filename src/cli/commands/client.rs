//! Client command implementations.

use colored::Colorize;

use crate::cli::ClientCommands;
use crate::error::Result;
use crate::model::{ClientDraft, ClientPatch, Record};
use crate::workspace::Workspace;

/// Execute client commands.
pub fn execute(command: &ClientCommands, ws: &Workspace, json: bool) -> Result<()> {
    match command {
        ClientCommands::Add { name, status } => add(name, status.clone(), ws, json),
        ClientCommands::List => list(ws, json),
        ClientCommands::Update { id, name, status } => {
            update(id, name.clone(), status.clone(), ws, json)
        }
        ClientCommands::Delete { id } => delete(id, ws, json),
    }
}

fn add(name: &str, status: Option<String>, ws: &Workspace, json: bool) -> Result<()> {
    let client = ws.add_client(ClientDraft {
        name: name.to_string(),
        status,
    })?;

    if crate::is_silent() {
        println!("{}", client.id());
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string(&client)?);
    } else {
        println!("Added client {} [{}]", client.id().bold(), client.status);
    }

    Ok(())
}

fn list(ws: &Workspace, json: bool) -> Result<()> {
    let clients = ws.list_clients();

    if json {
        println!("{}", serde_json::to_string(&clients)?);
        return Ok(());
    }

    if clients.is_empty() {
        println!("No clients found.");
        return Ok(());
    }

    println!("Clients ({} found):", clients.len());
    println!();
    for client in &clients {
        let status = if client.status == "active" {
            client.status.green()
        } else {
            client.status.normal()
        };
        println!("• {}  [{}]  {}", client.name, status, client.id().dimmed());
    }

    Ok(())
}

fn update(
    id: &str,
    name: Option<String>,
    status: Option<String>,
    ws: &Workspace,
    json: bool,
) -> Result<()> {
    let client = ws.update_client(id, &ClientPatch { name, status })?;

    if crate::is_silent() {
        println!("{}", client.id());
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string(&client)?);
    } else {
        println!("Updated client {} [{}]", client.id().bold(), client.status);
    }

    Ok(())
}

fn delete(id: &str, ws: &Workspace, json: bool) -> Result<()> {
    let existed = ws.delete_client(id)?;

    if json {
        println!("{}", serde_json::json!({ "id": id, "deleted": existed }));
    } else if existed {
        println!("Deleted client {id}");
    } else {
        println!("No client with ID {id} (nothing deleted)");
    }

    Ok(())
}
