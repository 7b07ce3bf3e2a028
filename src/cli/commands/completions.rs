//! Generate shell completions.

use clap::CommandFactory;
use clap_complete::{Shell as CompletionShell, generate};

use crate::cli::{Cli, Shell};
use crate::error::Result;

/// Execute the completions command.
pub fn execute(shell: &Shell) -> Result<()> {
    let shell = match shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    };

    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "lifeos", &mut std::io::stdout());

    Ok(())
}
