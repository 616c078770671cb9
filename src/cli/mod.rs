//! Command-line interface.

pub mod check;
pub mod completions;
pub mod list;
pub mod name;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// regcheck - metadata linter for server registry repositories.
#[derive(Parser)]
#[command(
    name = "regcheck",
    about = "Validate server entries in a registry repository",
    version
)]
pub struct Cli {
    /// Registry root directory
    #[arg(short = 'C', long, global = true, env = "REGCHECK_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Run every check for the given servers
    Check {
        /// Server names (directory names under the servers directory)
        names: Vec<String>,
        /// Check every server in the registry
        #[arg(short, long, conflicts_with = "names")]
        all: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a server name without reading the registry
    Name {
        /// Candidate server name
        name: String,
    },

    /// List servers in the registry
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
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
}

/// Execute a command against the registry at `root`.
pub fn execute(command: Command, root: PathBuf) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Check { names, all, json } => check::execute(&root, &names, all, json),
        Name { name } => name::execute(&name),
        List { json } => list::execute(&root, json),
        Completions { shell } => completions::execute(shell),
    }
}
