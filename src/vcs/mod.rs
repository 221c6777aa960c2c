//! Version control seam for the aikit home
//!
//! Install history is tracked in a repository at the home root. The [`Vcs`]
//! trait keeps the external tool behind one interface: [`git::GitVcs`] links
//! libgit2 for production use and the in-memory fake backs unit tests.

use std::path::Path;

use crate::error::Result;

pub mod git;

#[cfg(test)]
pub mod fake;

/// First line prefix of every recorded commit
pub const COMMIT_PREFIX: &str = "aikit sync:";

/// Paths grouped by what happened to them, relative to the repository root
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ChangeSet {
    pub added: Vec<String>,
    pub modified: Vec<String>,
    pub deleted: Vec<String>,
}

impl ChangeSet {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.modified.is_empty() && self.deleted.is_empty()
    }

    #[allow(dead_code)]
    pub fn total(&self) -> usize {
        self.added.len() + self.modified.len() + self.deleted.len()
    }

    /// Sort each group so listings and commit messages are deterministic
    pub fn sort(&mut self) {
        self.added.sort();
        self.modified.sort();
        self.deleted.sort();
    }

    /// Compact tally like `+2 ~1 -3`, omitting empty groups
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if !self.added.is_empty() {
            parts.push(format!("+{}", self.added.len()));
        }
        if !self.modified.is_empty() {
            parts.push(format!("~{}", self.modified.len()));
        }
        if !self.deleted.is_empty() {
            parts.push(format!("-{}", self.deleted.len()));
        }
        parts.join(" ")
    }
}

/// Operations aikit needs from a version control tool
pub trait Vcs {
    /// Create a repository at the root unless one already exists
    fn ensure_repository(&self, root: &Path) -> Result<()>;

    /// Uncommitted working tree changes, untracked files included
    fn pending_changes(&self, root: &Path) -> Result<ChangeSet>;

    /// Stage every working tree change, deletions included
    fn stage_all(&self, root: &Path) -> Result<()>;

    /// Classified difference between the last commit and the index
    fn staged_changes(&self, root: &Path) -> Result<ChangeSet>;

    /// Record the staged changes as a new commit on the current branch
    fn commit(&self, root: &Path, message: &str) -> Result<()>;
}

/// What [`commit_all`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    Committed(ChangeSet),
    NothingToCommit,
}

/// Build the commit message for a set of staged changes
///
/// The subject line carries the tally, followed by one labeled section per
/// non-empty group with a marker before each path.
pub fn commit_message(changes: &ChangeSet) -> String {
    let mut message = format!("{COMMIT_PREFIX} {}", changes.summary());

    for (header, marker, paths) in [
        ("New files:", '+', &changes.added),
        ("Modified files:", '~', &changes.modified),
        ("Deleted files:", '-', &changes.deleted),
    ] {
        if paths.is_empty() {
            continue;
        }
        message.push_str("\n\n");
        message.push_str(header);
        for path in paths {
            message.push('\n');
            message.push(marker);
            message.push(' ');
            message.push_str(path);
        }
    }

    message
}

/// Stage and commit everything pending at the root
///
/// A clean working tree short-circuits without touching the index. Staging
/// can also come up empty (for example when every pending path is ignored),
/// which is reported the same way instead of recording an empty commit.
pub fn commit_all(vcs: &dyn Vcs, root: &Path) -> Result<CommitOutcome> {
    if vcs.pending_changes(root)?.is_empty() {
        return Ok(CommitOutcome::NothingToCommit);
    }

    vcs.stage_all(root)?;
    let changes = vcs.staged_changes(root)?;
    if changes.is_empty() {
        return Ok(CommitOutcome::NothingToCommit);
    }

    vcs.commit(root, &commit_message(&changes))?;
    Ok(CommitOutcome::Committed(changes))
}
