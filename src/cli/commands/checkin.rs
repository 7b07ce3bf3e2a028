//! Daily check-in command implementations.

use colored::Colorize;

use crate::cli::CheckinCommands;
use crate::error::Result;
use crate::model::CheckinDraft;
use crate::workspace::Workspace;

/// Execute check-in commands.
pub fn execute(command: &CheckinCommands, ws: &Workspace, json: bool) -> Result<()> {
    match command {
        CheckinCommands::Log { energy, focus } => log(*energy, *focus, ws, json),
        CheckinCommands::List => list(ws, json),
    }
}

fn log(energy: u8, focus: u8, ws: &Workspace, json: bool) -> Result<()> {
    let checkin = ws.log_checkin(CheckinDraft { energy, focus })?;

    if crate::is_silent() {
        println!("{}", checkin.id);
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string(&checkin)?);
    } else {
        println!(
            "Checked in for {}: energy {}/10, focus {}/10",
            checkin.date.bold(),
            checkin.energy,
            checkin.focus
        );
    }

    Ok(())
}

fn list(ws: &Workspace, json: bool) -> Result<()> {
    let checkins = ws.list_checkins();

    if json {
        println!("{}", serde_json::to_string(&checkins)?);
        return Ok(());
    }

    if checkins.is_empty() {
        println!("No check-ins yet.");
        return Ok(());
    }

    println!("Check-ins ({} found):", checkins.len());
    println!();
    for checkin in &checkins {
        println!(
            "• {}  energy {:>2}/10  focus {:>2}/10",
            checkin.date, checkin.energy, checkin.focus
        );
    }

    Ok(())
}
