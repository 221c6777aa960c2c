//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Aikit - installer for shared AI assistant configuration
///
/// Mirrors versioned assistant assets from the current project into the
/// aikit home and records every change there in a git history.
#[derive(Parser, Debug)]
#[command(
    name = "aikit",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Installer for shared AI assistant configuration",
    long_about = "Aikit mirrors versioned assistant assets (agents, commands, rules, skills) \
                  from the current project into the aikit home and records every change \
                  in a git history there. Files removed from the project are never removed \
                  from the home.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  aikit install                 \x1b[90m# Sync all categories and commit\x1b[0m\n   \
                  aikit install --dry-run       \x1b[90m# Show what would be copied\x1b[0m\n   \
                  aikit install-agents          \x1b[90m# Sync one category, no commit\x1b[0m\n   \
                  aikit status                  \x1b[90m# Show uncommitted home changes\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Aikit home directory (defaults to ~/.aikit)
    #[arg(long, global = true, env = "AIKIT_HOME")]
    pub home: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sync every category into the home and commit the changes
    Install(InstallArgs),

    /// Sync only agents, without committing
    InstallAgents,

    /// Sync only commands, without committing
    InstallCommands,

    /// Sync only rules, without committing
    InstallRules,

    /// Sync only skills, without committing
    InstallSkills,

    /// Show uncommitted changes at the home
    Status,

    /// Acknowledge that there is nothing to clean
    Clean,

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the full install
#[derive(Args, Debug, Default)]
pub struct InstallArgs {
    /// Plan the sync without copying or committing anything
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the completions command
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
