//! Aikit - installer for shared AI assistant configuration
//!
//! Mirrors versioned assistant assets (agents, commands, rules, skills) from
//! the current project into the aikit home and records each install as a git
//! commit there.

use clap::Parser;

mod category;
mod cli;
mod commands;
mod error;
mod home;
mod paths;
mod progress;
mod sync;
mod vcs;

use category::Category;
use cli::{Cli, Commands, InstallArgs};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Install(args)) => commands::install::run_all(cli.home, cli.verbose, args),
        Some(Commands::InstallAgents) => {
            commands::install::run_single(cli.home, cli.verbose, Category::Agents)
        }
        Some(Commands::InstallCommands) => {
            commands::install::run_single(cli.home, cli.verbose, Category::Commands)
        }
        Some(Commands::InstallRules) => {
            commands::install::run_single(cli.home, cli.verbose, Category::Rules)
        }
        Some(Commands::InstallSkills) => {
            commands::install::run_single(cli.home, cli.verbose, Category::Skills)
        }
        Some(Commands::Status) => commands::status::run(cli.home),
        Some(Commands::Clean) => commands::clean::run(),
        Some(Commands::Version) => commands::version::run(),
        Some(Commands::Completions(args)) => commands::completions::run(args),
        // Bare `aikit` behaves like `aikit install`
        None => commands::install::run_all(cli.home, cli.verbose, InstallArgs::default()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
