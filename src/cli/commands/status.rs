//! Workspace status summary.

use colored::Colorize;
use serde::Serialize;

use crate::error::Result;
use crate::workspace::Workspace;

/// Record counts across the workspace.
#[derive(Serialize)]
struct StatusOutput {
    tasks: usize,
    clients: usize,
    prospects: usize,
    projects: usize,
    ideas: usize,
    reviews: usize,
    checkins: usize,
    tokens: usize,
    revenue_entries: usize,
    expense_entries: usize,
    mrr: f64,
}

/// Execute the status command.
pub fn execute(ws: &Workspace, json: bool) -> Result<()> {
    let ledger = ws.financials();
    let output = StatusOutput {
        tasks: ws.list_tasks().len(),
        clients: ws.list_clients().len(),
        prospects: ws.list_prospects().len(),
        projects: ws.list_projects().len(),
        ideas: ws.list_ideas().len(),
        reviews: ws.list_reviews().len(),
        checkins: ws.list_checkins().len(),
        tokens: ws.list_token_logs().len(),
        revenue_entries: ledger.revenue.len(),
        expense_entries: ledger.expenses.len(),
        mrr: ledger.total.mrr,
    };

    if json {
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    println!("Workspace: {}", ws.paths().root.display().to_string().bold());
    println!();
    println!("  tasks      {:>4}", output.tasks);
    println!("  clients    {:>4}", output.clients);
    println!("  prospects  {:>4}", output.prospects);
    println!("  projects   {:>4}", output.projects);
    println!("  ideas      {:>4}", output.ideas);
    println!("  reviews    {:>4}", output.reviews);
    println!("  checkins   {:>4}", output.checkins);
    println!("  tokens     {:>4}", output.tokens);
    println!(
        "  ledger     {:>4} revenue / {} expense entries, mrr ${}",
        output.revenue_entries, output.expense_entries, output.mrr
    );

    Ok(())
}
