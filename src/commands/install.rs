//! Install command implementation
//!
//! The full install runs in three steps:
//! 1. Initialize the aikit home (root directory, ignore file, repository)
//! 2. Mirror each source category into its home subdirectory
//! 3. Commit whatever changed, with a message listing every path
//!
//! Per-category variants run steps 1 and 2 for a single category and leave
//! the commit to a later full install.

use std::path::{Path, PathBuf};

use console::Style;

use crate::category::Category;
use crate::cli::InstallArgs;
use crate::error::Result;
use crate::home::Home;
use crate::paths;
use crate::progress::{create_progress_spinner, finish_progress_bar};
use crate::sync::{self, SyncReport};
use crate::vcs::git::GitVcs;
use crate::vcs::{self, CommitOutcome};

/// Run the full install: initialize, mirror all categories, commit
pub fn run_all(home_override: Option<PathBuf>, verbose: bool, args: InstallArgs) -> Result<()> {
    let home = Home::at(paths::resolve_home(home_override)?);
    let source = paths::source_root()?;
    let vcs = GitVcs::new();

    if args.dry_run {
        println!("[DRY RUN] Would install assets to {}", home.root().display());
    } else {
        println!("Installing assets to {}", home.root().display());
        home.init(&vcs)?;
    }
    println!();

    let mut copied = 0;
    for category in Category::ALL {
        let report = sync_category(&home, &source, category, args.dry_run)?;
        print_report(category, &report, verbose);
        copied += report.total();
    }
    println!();

    if args.dry_run {
        println!("[DRY RUN] Would copy {copied} file(s)");
        return Ok(());
    }

    match vcs::commit_all(&vcs, home.root())? {
        CommitOutcome::Committed(changes) => {
            println!(
                "{} Committed {}",
                Style::new().green().apply_to("✓"),
                changes.summary()
            );
        }
        CommitOutcome::NothingToCommit => println!("No changes to commit."),
    }

    Ok(())
}

/// Install one category without recording a commit
pub fn run_single(
    home_override: Option<PathBuf>,
    verbose: bool,
    category: Category,
) -> Result<()> {
    let home = Home::at(paths::resolve_home(home_override)?);
    let source = paths::source_root()?;

    println!("Installing {category} to {}", home.root().display());
    home.init(&GitVcs::new())?;
    println!();

    let report = sync_category(&home, &source, category, false)?;
    print_report(category, &report, verbose);

    Ok(())
}

fn sync_category(
    home: &Home,
    source_root: &Path,
    category: Category,
    dry_run: bool,
) -> Result<SyncReport> {
    let source = source_root.join(category.dir_name());
    let dest = home.category_dir(category);

    let pb = create_progress_spinner(dry_run, &format!("Syncing {category}"));
    let report = if dry_run {
        sync::plan(&source, &dest)?
    } else {
        sync::mirror(&source, &dest)?
    };
    finish_progress_bar(pb);

    Ok(report)
}

fn print_report(category: Category, report: &SyncReport, verbose: bool) {
    println!(
        "{category}: {} new, {} updated",
        report.new_count(),
        report.updated_count()
    );

    if !verbose {
        return;
    }
    for path in &report.new_files {
        let line = format!("+ {}", path.display());
        println!("  {}", Style::new().dim().apply_to(line));
    }
    for path in &report.updated_files {
        let line = format!("~ {}", path.display());
        println!("  {}", Style::new().dim().apply_to(line));
    }
}
