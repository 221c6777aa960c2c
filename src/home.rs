//! The aikit home directory
//!
//! Layout at the root: a `.gitignore` written once, a git repository holding
//! install history, and one subdirectory per category.

use std::fs;
use std::path::{Path, PathBuf};

use crate::category::Category;
use crate::error::{self, Result};
use crate::vcs::Vcs;

/// Name of the ignore file written at the home root
pub const IGNORE_FILE: &str = ".gitignore";

/// Ephemeral runtime state the repository must never track
pub const IGNORE_PATTERNS: &str = "cache/\nlogs/\nsessions/\ntmp/\n";

/// Destination root every install works against
#[derive(Debug, Clone)]
pub struct Home {
    root: PathBuf,
}

impl Home {
    /// Wrap an already resolved root path
    pub fn at(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn ignore_file(&self) -> PathBuf {
        self.root.join(IGNORE_FILE)
    }

    /// Directory one category mirrors into
    pub fn category_dir(&self, category: Category) -> PathBuf {
        self.root.join(category.dir_name())
    }

    /// True once a repository exists at the root
    pub fn is_initialized(&self) -> bool {
        self.root.join(".git").exists()
    }

    /// Idempotently prepare the home for installs
    ///
    /// Creates the root, writes the ignore file unless one is already there
    /// (user edits survive re-runs), and creates the repository on first use.
    pub fn init(&self, vcs: &dyn Vcs) -> Result<()> {
        fs::create_dir_all(&self.root).map_err(|e| {
            error::create_dir_failed(self.root.display().to_string(), e.to_string())
        })?;

        let ignore_file = self.ignore_file();
        if !ignore_file.exists() {
            fs::write(&ignore_file, IGNORE_PATTERNS).map_err(|e| {
                error::file_write_failed(ignore_file.display().to_string(), e.to_string())
            })?;
        }

        vcs.ensure_repository(&self.root)
    }
}
