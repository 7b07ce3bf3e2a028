//! CLI definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

/// Life OS CLI - personal operations dashboard
#[derive(Parser, Debug)]
#[command(name = "lifeos", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root (default: ~/.lifeos)
    #[arg(long, global = true, env = "LIFEOS_ROOT")]
    pub root: Option<PathBuf>,

    /// Output as JSON (for scripting)
    #[arg(long, alias = "robot", global = true)]
    pub json: bool,

    /// Output only the ID (for scripting)
    #[arg(long, global = true)]
    pub silent: bool,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (no output except errors)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize the workspace directories
    Init {
        /// Recreate even if the workspace already exists
        #[arg(long)]
        force: bool,
    },

    /// Print version information
    Version,

    /// Task management
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },

    /// Client management
    Client {
        #[command(subcommand)]
        command: ClientCommands,
    },

    /// Sales pipeline prospects
    Prospect {
        #[command(subcommand)]
        command: ProspectCommands,
    },

    /// Project tracking
    Project {
        #[command(subcommand)]
        command: ProjectCommands,
    },

    /// Idea capture
    Idea {
        #[command(subcommand)]
        command: IdeaCommands,
    },

    /// Weekly reviews
    Review {
        #[command(subcommand)]
        command: ReviewCommands,
    },

    /// Daily energy/focus check-ins
    Checkin {
        #[command(subcommand)]
        command: CheckinCommands,
    },

    /// Financial ledger
    Finance {
        #[command(subcommand)]
        command: FinanceCommands,
    },

    /// AI token usage logging
    Tokens {
        #[command(subcommand)]
        command: TokenCommands,
    },

    /// Show the recent activity feed
    Activity {
        /// Maximum entries to show
        #[arg(short, long, default_value = "50")]
        limit: usize,
    },

    /// Read the Markdown memory log
    Memory {
        #[command(subcommand)]
        command: MemoryCommands,
    },

    /// Snapshot export/import
    Snapshot {
        #[command(subcommand)]
        command: SnapshotCommands,
    },

    /// Workspace record counts
    Status,

    /// Run the dashboard HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3001", env = "LIFEOS_PORT")]
        port: u16,

        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        bind: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ============================================================================
// Task Commands
// ============================================================================

#[derive(Subcommand, Debug)]
pub enum TaskCommands {
    /// Add a task
    Add {
        /// Task title
        title: String,

        /// Status (todo, in-progress, completed; synonyms accepted)
        #[arg(short, long)]
        status: Option<String>,

        /// Priority (low, medium, high; synonyms accepted)
        #[arg(short, long)]
        priority: Option<String>,
    },

    /// List tasks
    List {
        /// Filter by status
        #[arg(short, long)]
        status: Option<String>,
    },

    /// Update a task
    Update {
        /// Task ID
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New status
        #[arg(short, long)]
        status: Option<String>,

        /// New priority
        #[arg(short, long)]
        priority: Option<String>,
    },

    /// Mark a task completed
    Done {
        /// Task ID
        id: String,
    },

    /// Delete a task
    Delete {
        /// Task ID
        id: String,
    },
}

// ============================================================================
// Client Commands
// ============================================================================

#[derive(Subcommand, Debug)]
pub enum ClientCommands {
    /// Add a client
    Add {
        /// Client name
        name: String,

        /// Status label (default: active)
        #[arg(short, long)]
        status: Option<String>,
    },

    /// List clients
    List,

    /// Update a client
    Update {
        /// Client ID
        id: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New status label
        #[arg(short, long)]
        status: Option<String>,
    },

    /// Delete a client
    Delete {
        /// Client ID
        id: String,
    },
}

// ============================================================================
// Prospect Commands
// ============================================================================

#[derive(Subcommand, Debug)]
pub enum ProspectCommands {
    /// Add a prospect
    Add {
        /// Prospect name
        name: String,

        /// Pipeline stage (lead, prospect, qualified, closed, closed-lost)
        #[arg(short, long)]
        stage: Option<String>,

        /// Next concrete action
        #[arg(short, long)]
        next_action: Option<String>,
    },

    /// List prospects
    List {
        /// Filter by stage
        #[arg(short, long)]
        stage: Option<String>,
    },

    /// Update a prospect
    Update {
        /// Prospect ID
        id: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New stage
        #[arg(short, long)]
        stage: Option<String>,

        /// New next action
        #[arg(short, long)]
        next_action: Option<String>,
    },
}

// ============================================================================
// Project Commands
// ============================================================================

#[derive(Subcommand, Debug)]
pub enum ProjectCommands {
    /// Add a project
    Add {
        /// Project name
        name: String,

        /// Status label (default: active)
        #[arg(short, long)]
        status: Option<String>,

        /// Initial progress (0-100)
        #[arg(short, long)]
        progress: Option<u8>,
    },

    /// List projects
    List,

    /// Update a project
    Update {
        /// Project ID
        id: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New status label
        #[arg(short, long)]
        status: Option<String>,

        /// New progress (0-100)
        #[arg(short, long)]
        progress: Option<u8>,
    },
}

// ============================================================================
// Idea / Review / Checkin Commands
// ============================================================================

#[derive(Subcommand, Debug)]
pub enum IdeaCommands {
    /// Capture an idea
    Add {
        /// Idea title
        title: String,

        /// Status label (default: draft)
        #[arg(short, long)]
        status: Option<String>,
    },

    /// List ideas
    List,
}

#[derive(Subcommand, Debug)]
pub enum ReviewCommands {
    /// Write a weekly review (week number is derived)
    Add {
        /// Review title
        title: String,

        /// Free-form notes
        #[arg(short, long)]
        notes: Option<String>,
    },

    /// List weekly reviews
    List,
}

#[derive(Subcommand, Debug)]
pub enum CheckinCommands {
    /// Log today's check-in
    Log {
        /// Energy level (1-10)
        #[arg(short, long)]
        energy: u8,

        /// Focus level (1-10)
        #[arg(short, long)]
        focus: u8,
    },

    /// List check-ins
    List,
}

// ============================================================================
// Finance / Token Commands
// ============================================================================

#[derive(Subcommand, Debug)]
pub enum FinanceCommands {
    /// Log revenue
    Revenue {
        /// Amount in dollars
        amount: f64,

        /// Description
        description: String,

        /// Mark as monthly recurring revenue
        #[arg(short, long)]
        recurring: bool,
    },

    /// Log an expense
    Expense {
        /// Amount in dollars
        amount: f64,

        /// Description
        description: String,
    },

    /// Show the ledger with totals
    Show,
}

#[derive(Subcommand, Debug)]
pub enum TokenCommands {
    /// Log a token-usage sample
    Log {
        /// Dollar cost of the sample
        cost: f64,

        /// Metadata as key=value pairs (repeatable)
        #[arg(short, long, value_parser = parse_key_value)]
        meta: Vec<(String, String)>,
    },

    /// List token-usage samples
    List {
        /// Maximum samples to show
        #[arg(short, long, default_value = "30")]
        limit: usize,
    },
}

/// Parse a `key=value` CLI argument.
fn parse_key_value(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{s}'"))
}

// ============================================================================
// Memory / Snapshot Commands
// ============================================================================

#[derive(Subcommand, Debug)]
pub enum MemoryCommands {
    /// Print today's memory file
    Today,

    /// Print the cumulative MEMORY.md
    Main,

    /// Print a specific day's memory file
    Show {
        /// Day stamp, YYYY-MM-DD
        date: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum SnapshotCommands {
    /// Export all collections to a snapshot file (or stdout)
    Export {
        /// Output path; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Import a snapshot file, overwriting the kinds it contains
    Import {
        /// Snapshot file to import
        input: PathBuf,
    },

    /// Push a snapshot to the hosted mirror
    Push,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_key_value() {
        assert_eq!(
            parse_key_value("model=opus").unwrap(),
            ("model".to_string(), "opus".to_string())
        );
        assert!(parse_key_value("no-equals").is_err());
    }
}
