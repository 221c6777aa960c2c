//! Status command showing uncommitted changes at the aikit home

use std::path::PathBuf;

use console::Style;

use crate::error::Result;
use crate::home::Home;
use crate::paths;
use crate::vcs::Vcs;
use crate::vcs::git::GitVcs;

/// Show what the next full install would commit
pub fn run(home_override: Option<PathBuf>) -> Result<()> {
    let home = Home::at(paths::resolve_home(home_override)?);

    if !home.is_initialized() {
        println!("Nothing installed at {}", home.root().display());
        println!(
            "{}",
            Style::new().dim().apply_to("Run 'aikit install' first.")
        );
        return Ok(());
    }

    let changes = GitVcs::new().pending_changes(home.root())?;
    if changes.is_empty() {
        println!("No pending changes at {}", home.root().display());
        return Ok(());
    }

    println!("Pending changes at {}:", home.root().display());
    for path in &changes.added {
        println!("  {}", Style::new().green().apply_to(format!("+ {path}")));
    }
    for path in &changes.modified {
        println!("  {}", Style::new().yellow().apply_to(format!("~ {path}")));
    }
    for path in &changes.deleted {
        println!("  {}", Style::new().red().apply_to(format!("- {path}")));
    }
    println!();
    println!("Run 'aikit install' to commit them.");

    Ok(())
}
