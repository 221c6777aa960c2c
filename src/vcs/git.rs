//! Production [`Vcs`] adapter backed by libgit2

use std::path::Path;

use git2::{Delta, ErrorCode, IndexAddOption, Repository, Status, StatusOptions};

use crate::error::{AikitError, Result};

use super::{ChangeSet, Vcs};

/// Git operations through the git2 crate, no git binary required
#[derive(Debug, Default, Clone, Copy)]
pub struct GitVcs;

impl GitVcs {
    pub fn new() -> Self {
        Self
    }

    fn open(self, root: &Path) -> Result<Repository> {
        Repository::open(root).map_err(|e| AikitError::RepoOpenFailed {
            path: root.display().to_string(),
            reason: e.message().to_string(),
        })
    }
}

impl Vcs for GitVcs {
    fn ensure_repository(&self, root: &Path) -> Result<()> {
        if root.join(".git").exists() {
            return Ok(());
        }

        Repository::init(root).map_err(|e| AikitError::RepoInitFailed {
            path: root.display().to_string(),
            reason: e.message().to_string(),
        })?;
        Ok(())
    }

    fn pending_changes(&self, root: &Path) -> Result<ChangeSet> {
        let repo = self.open(root)?;
        let mut options = StatusOptions::new();
        options.include_untracked(true).recurse_untracked_dirs(true);
        let statuses = repo.statuses(Some(&mut options))?;

        let mut changes = ChangeSet::default();
        for entry in statuses.iter() {
            let Some(path) = entry.path() else {
                continue;
            };
            let status = entry.status();
            if status.intersects(Status::WT_NEW | Status::INDEX_NEW) {
                changes.added.push(path.to_string());
            } else if status.intersects(Status::WT_DELETED | Status::INDEX_DELETED) {
                changes.deleted.push(path.to_string());
            } else if status.intersects(
                Status::WT_MODIFIED
                    | Status::INDEX_MODIFIED
                    | Status::WT_TYPECHANGE
                    | Status::INDEX_TYPECHANGE,
            ) {
                changes.modified.push(path.to_string());
            }
        }

        changes.sort();
        Ok(changes)
    }

    fn stage_all(&self, root: &Path) -> Result<()> {
        let repo = self.open(root)?;
        let mut index = repo.index()?;
        // add_all picks up new and modified paths, update_all the deletions
        index.add_all(["*"], IndexAddOption::DEFAULT, None)?;
        index.update_all(["*"], None)?;
        index.write()?;
        Ok(())
    }

    fn staged_changes(&self, root: &Path) -> Result<ChangeSet> {
        let repo = self.open(root)?;
        let head_tree = head_tree(&repo)?;
        let index = repo.index()?;
        let diff = repo.diff_tree_to_index(head_tree.as_ref(), Some(&index), None)?;

        let mut changes = ChangeSet::default();
        for delta in diff.deltas() {
            let Some(path) = delta_path(&delta) else {
                continue;
            };
            match delta.status() {
                Delta::Added => changes.added.push(path),
                Delta::Deleted => changes.deleted.push(path),
                Delta::Modified | Delta::Typechange => changes.modified.push(path),
                _ => {}
            }
        }

        changes.sort();
        Ok(changes)
    }

    fn commit(&self, root: &Path, message: &str) -> Result<()> {
        let repo = self.open(root)?;
        let mut index = repo.index()?;
        let tree_id = index.write_tree()?;
        let tree = repo.find_tree(tree_id)?;
        let signature = repo
            .signature()
            .map_err(|_| AikitError::CommitIdentityMissing)?;

        match head_commit(&repo)? {
            Some(parent) => {
                repo.commit(
                    Some("HEAD"),
                    &signature,
                    &signature,
                    message,
                    &tree,
                    &[&parent],
                )?;
            }
            None => {
                repo.commit(Some("HEAD"), &signature, &signature, message, &tree, &[])?;
            }
        }
        Ok(())
    }
}

/// Tree of the last commit, or None on a branch with no commits yet
fn head_tree(repo: &Repository) -> Result<Option<git2::Tree<'_>>> {
    match repo.head() {
        Ok(head) => Ok(Some(head.peel_to_tree()?)),
        Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

fn head_commit(repo: &Repository) -> Result<Option<git2::Commit<'_>>> {
    match repo.head() {
        Ok(head) => Ok(Some(head.peel_to_commit()?)),
        Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

fn delta_path(delta: &git2::DiffDelta<'_>) -> Option<String> {
    let file = match delta.status() {
        Delta::Deleted => delta.old_file(),
        _ => delta.new_file(),
    };
    file.path().map(|p| p.to_string_lossy().into_owned())
}
