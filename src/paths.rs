//! Path resolution for the aikit home and the install source
//!
//! The destination is never a hidden global: it is resolved once here and
//! passed into every component. Precedence: `--home` flag, `AIKIT_HOME`
//! environment variable (both arrive as the override), then `~/.aikit`.

use std::path::PathBuf;

use normpath::PathExt;

use crate::error::{AikitError, Result};

/// Directory name of the aikit home under the user's home directory
pub const HOME_DIR_NAME: &str = ".aikit";

/// Resolve the aikit home directory
pub fn resolve_home(override_path: Option<PathBuf>) -> Result<PathBuf> {
    let home = match override_path {
        Some(path) => path,
        None => dirs::home_dir()
            .ok_or(AikitError::HomeDirNotFound)?
            .join(HOME_DIR_NAME),
    };

    Ok(normalize(home))
}

/// Source root for installs (the directory aikit was invoked from)
pub fn source_root() -> Result<PathBuf> {
    std::env::current_dir().map_err(|e| AikitError::IoError {
        message: format!("Failed to get current directory: {}", e),
    })
}

/// Normalize a path for consistent display; nonexistent paths pass through
fn normalize(path: PathBuf) -> PathBuf {
    path.normalize()
        .map(|p| p.into_path_buf())
        .unwrap_or(path)
}
