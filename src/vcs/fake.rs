//! In-memory [`Vcs`] double for unit tests

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::Result;

use super::{ChangeSet, Vcs};

/// Scripted [`Vcs`] that records every call instead of touching a repository
#[derive(Default)]
pub struct FakeVcs {
    state: Mutex<FakeState>,
}

#[derive(Default)]
struct FakeState {
    pending: ChangeSet,
    staged: ChangeSet,
    initialized_roots: Vec<PathBuf>,
    stage_calls: usize,
    commits: Vec<String>,
}

impl FakeVcs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script what [`Vcs::pending_changes`] reports
    pub fn with_pending(self, changes: ChangeSet) -> Self {
        self.state.lock().unwrap().pending = changes;
        self
    }

    /// Script what [`Vcs::staged_changes`] reports
    pub fn with_staged(self, changes: ChangeSet) -> Self {
        self.state.lock().unwrap().staged = changes;
        self
    }

    pub fn initialized_roots(&self) -> Vec<PathBuf> {
        self.state.lock().unwrap().initialized_roots.clone()
    }

    pub fn stage_call_count(&self) -> usize {
        self.state.lock().unwrap().stage_calls
    }

    pub fn committed_messages(&self) -> Vec<String> {
        self.state.lock().unwrap().commits.clone()
    }
}

impl Vcs for FakeVcs {
    fn ensure_repository(&self, root: &Path) -> Result<()> {
        self.state
            .lock()
            .unwrap()
            .initialized_roots
            .push(root.to_path_buf());
        Ok(())
    }

    fn pending_changes(&self, _root: &Path) -> Result<ChangeSet> {
        Ok(self.state.lock().unwrap().pending.clone())
    }

    fn stage_all(&self, _root: &Path) -> Result<()> {
        self.state.lock().unwrap().stage_calls += 1;
        Ok(())
    }

    fn staged_changes(&self, _root: &Path) -> Result<ChangeSet> {
        Ok(self.state.lock().unwrap().staged.clone())
    }

    fn commit(&self, _root: &Path, message: &str) -> Result<()> {
        self.state.lock().unwrap().commits.push(message.to_string());
        Ok(())
    }
}
