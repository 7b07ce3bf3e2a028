//! Financial ledger command implementations.

use colored::Colorize;

use crate::cli::FinanceCommands;
use crate::error::Result;
use crate::model::FinancialEntryDraft;
use crate::workspace::Workspace;

/// Execute finance commands.
pub fn execute(command: &FinanceCommands, ws: &Workspace, json: bool) -> Result<()> {
    match command {
        FinanceCommands::Revenue {
            amount,
            description,
            recurring,
        } => revenue(*amount, description, *recurring, ws, json),
        FinanceCommands::Expense {
            amount,
            description,
        } => expense(*amount, description, ws, json),
        FinanceCommands::Show => show(ws, json),
    }
}

fn revenue(
    amount: f64,
    description: &str,
    recurring: bool,
    ws: &Workspace,
    json: bool,
) -> Result<()> {
    let entry = ws.log_revenue(FinancialEntryDraft {
        amount,
        description: description.to_string(),
        recurring,
    })?;

    if crate::is_silent() {
        println!("{}", entry.id);
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string(&entry)?);
    } else {
        let tag = if entry.recurring { " (recurring)" } else { "" };
        println!(
            "Logged revenue {} ${}{tag} - {}",
            entry.id.bold(),
            entry.amount,
            entry.description
        );
    }

    Ok(())
}

fn expense(amount: f64, description: &str, ws: &Workspace, json: bool) -> Result<()> {
    let entry = ws.log_expense(FinancialEntryDraft {
        amount,
        description: description.to_string(),
        recurring: false,
    })?;

    if crate::is_silent() {
        println!("{}", entry.id);
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string(&entry)?);
    } else {
        println!(
            "Logged expense {} ${} - {}",
            entry.id.bold(),
            entry.amount,
            entry.description
        );
    }

    Ok(())
}

fn show(ws: &Workspace, json: bool) -> Result<()> {
    let ledger = ws.financials();

    if json {
        println!("{}", serde_json::to_string(&ledger)?);
        return Ok(());
    }

    println!("Ledger:");
    println!(
        "  revenue  {} ({} entries)",
        format!("${}", ledger.total.revenue).green(),
        ledger.revenue.len()
    );
    println!(
        "  expenses {} ({} entries)",
        format!("${}", ledger.total.expenses).red(),
        ledger.expenses.len()
    );
    println!("  mrr      {}", format!("${}", ledger.total.mrr).bold());

    Ok(())
}
