//! One-way mirror of category directories into the aikit home
//!
//! The mirror is additive and update-only: files that are new in the source
//! or strictly newer by modification time are copied, with permission bits
//! and mtime preserved. Files only present at the destination are never
//! deleted, so local customizations survive a re-install.

use std::fs;
use std::path::{Path, PathBuf};

use filetime::FileTime;
use walkdir::WalkDir;

use crate::error::{self, Result};

/// Result of mirroring one category directory
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// Copied files that did not previously exist at the destination
    pub new_files: Vec<PathBuf>,
    /// Copied files that replaced an older destination counterpart
    pub updated_files: Vec<PathBuf>,
}

impl SyncReport {
    /// Number of newly created destination files
    pub fn new_count(&self) -> usize {
        self.new_files.len()
    }

    /// Number of overwritten destination files
    pub fn updated_count(&self) -> usize {
        self.updated_files.len()
    }

    /// Total number of copied files
    pub fn total(&self) -> usize {
        self.new_files.len() + self.updated_files.len()
    }

    /// True when nothing would be (or was) copied
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.new_files.is_empty() && self.updated_files.is_empty()
    }
}

/// Classify which source files a mirror would copy, without copying anything
///
/// A missing source directory is treated as empty. Paths in the report are
/// relative to the category root, in walk order (sorted per directory).
pub fn plan(source: &Path, dest: &Path) -> Result<SyncReport> {
    let mut report = SyncReport::default();

    if !source.is_dir() {
        return Ok(report);
    }

    for entry in WalkDir::new(source).sort_by_file_name() {
        let entry = entry
            .map_err(|e| error::file_read_failed(source.display().to_string(), e.to_string()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry.path().strip_prefix(source).unwrap_or(entry.path());
        let target = dest.join(relative);

        if !target.exists() {
            report.new_files.push(relative.to_path_buf());
        } else if source_is_newer(entry.path(), &target)? {
            report.updated_files.push(relative.to_path_buf());
        }
    }

    Ok(report)
}

/// Mirror one category directory into the destination
///
/// Copies every file the plan selects and reports what was copied. The
/// destination directory (and any nested parents) are created on demand.
pub fn mirror(source: &Path, dest: &Path) -> Result<SyncReport> {
    let report = plan(source, dest)?;

    for relative in report.new_files.iter().chain(report.updated_files.iter()) {
        copy_preserving(&source.join(relative), &dest.join(relative))?;
    }

    Ok(report)
}

/// Strictly newer by mtime; equal timestamps leave the destination untouched
fn source_is_newer(source: &Path, dest: &Path) -> Result<bool> {
    Ok(mtime_of(source)? > mtime_of(dest)?)
}

fn mtime_of(path: &Path) -> Result<FileTime> {
    let metadata = fs::metadata(path)
        .map_err(|e| error::file_read_failed(path.display().to_string(), e.to_string()))?;
    Ok(FileTime::from_last_modification_time(&metadata))
}

/// Copy one file, carrying permission bits (`fs::copy`) and the source mtime
fn copy_preserving(source: &Path, dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| error::create_dir_failed(parent.display().to_string(), e.to_string()))?;
    }

    fs::copy(source, dest).map_err(|e| {
        error::file_copy_failed(
            source.display().to_string(),
            dest.display().to_string(),
            e.to_string(),
        )
    })?;

    // Stamp the source mtime so an unchanged source is skipped on re-runs
    let mtime = mtime_of(source)?;
    filetime::set_file_mtime(dest, mtime)
        .map_err(|e| error::file_write_failed(dest.display().to_string(), e.to_string()))?;

    Ok(())
}
