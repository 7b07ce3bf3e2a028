//! Life OS CLI entry point.

use clap::Parser;
use lifeos::cli::commands;
use lifeos::cli::{Cli, Commands};
use lifeos::error::Error;
use lifeos::workspace::Workspace;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.silent {
        lifeos::SILENT.store(true, std::sync::atomic::Ordering::Relaxed);
    }
    if cli.no_color {
        colored::control::set_override(false);
    }

    // Set up tracing based on verbosity
    init_tracing(cli.verbose, cli.quiet);

    // Resolve effective JSON mode: --json OR non-TTY stdout
    let json = cli.json || !std::io::IsTerminal::is_terminal(&std::io::stdout());

    // Run the command and handle errors
    match run(cli, json) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if json {
                eprintln!("{}", e.to_structured_json());
            } else if let Some(hint) = e.hint() {
                eprintln!("Error: {e}\n  Hint: {hint}");
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::from(e.exit_code())
        }
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    use tracing_subscriber::EnvFilter;

    if quiet {
        return;
    }

    // Honor RUST_LOG if set, otherwise use verbosity flag
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug,hyper=info,tower_http=info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn run(cli: Cli, json: bool) -> Result<(), Error> {
    // Commands that never touch the workspace
    match &cli.command {
        Commands::Version => return commands::version::execute(json),
        Commands::Completions { shell } => return commands::completions::execute(shell),
        _ => {}
    }

    let root = lifeos::config::resolve_root(cli.root.as_deref())?;
    let ws = Workspace::open(root);

    match cli.command {
        Commands::Init { force } => commands::init::execute(&ws, force, json),
        Commands::Task { command } => commands::task::execute(&command, &ws, json),
        Commands::Client { command } => commands::client::execute(&command, &ws, json),
        Commands::Prospect { command } => commands::prospect::execute(&command, &ws, json),
        Commands::Project { command } => commands::project::execute(&command, &ws, json),
        Commands::Idea { command } => commands::idea::execute(&command, &ws, json),
        Commands::Review { command } => commands::review::execute(&command, &ws, json),
        Commands::Checkin { command } => commands::checkin::execute(&command, &ws, json),
        Commands::Finance { command } => commands::finance::execute(&command, &ws, json),
        Commands::Tokens { command } => commands::tokens::execute(&command, &ws, json),
        Commands::Activity { limit } => commands::activity::execute(limit, &ws, json),
        Commands::Memory { command } => commands::memory::execute(&command, &ws, json),
        Commands::Snapshot { command } => commands::snapshot::execute(&command, &ws, json),
        Commands::Status => commands::status::execute(&ws, json),
        Commands::Serve { port, bind } => commands::serve::execute(ws, &bind, port),
        // Already dispatched before the workspace was opened
        Commands::Version | Commands::Completions { .. } => Ok(()),
    }
}
