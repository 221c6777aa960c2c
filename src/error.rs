//! Error types and handling for aikit
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for aikit operations
#[derive(Error, Diagnostic, Debug)]
pub enum AikitError {
    // Path errors
    #[error("Could not determine home directory")]
    #[diagnostic(
        code(aikit::paths::home_not_found),
        help("Set AIKIT_HOME or pass --home to choose the destination explicitly")
    )]
    HomeDirNotFound,

    // File system errors
    #[error("Failed to create directory: {path}: {reason}")]
    #[diagnostic(code(aikit::fs::create_dir_failed))]
    CreateDirFailed { path: String, reason: String },

    #[error("Failed to read: {path}: {reason}")]
    #[diagnostic(code(aikit::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(aikit::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to copy {from} to {to}: {reason}")]
    #[diagnostic(code(aikit::fs::copy_failed))]
    FileCopyFailed {
        from: String,
        to: String,
        reason: String,
    },

    #[error("IO error: {message}")]
    #[diagnostic(code(aikit::fs::io_error))]
    IoError { message: String },

    // Git errors
    #[error("Failed to initialize repository at '{path}': {reason}")]
    #[diagnostic(
        code(aikit::git::init_failed),
        help("Check that you have write access to the destination directory")
    )]
    RepoInitFailed { path: String, reason: String },

    #[error("Failed to open repository at '{path}': {reason}")]
    #[diagnostic(
        code(aikit::git::open_failed),
        help("Run 'aikit install' to initialize the destination")
    )]
    RepoOpenFailed { path: String, reason: String },

    #[error("No commit identity configured")]
    #[diagnostic(
        code(aikit::git::identity_missing),
        help(
            "Set your identity with 'git config --global user.name \"Your Name\"' and 'git config --global user.email you@example.com'"
        )
    )]
    CommitIdentityMissing,

    #[error("Git operation failed: {message}")]
    #[diagnostic(code(aikit::git::operation_failed))]
    GitOperationFailed { message: String },
}

impl From<std::io::Error> for AikitError {
    fn from(err: std::io::Error) -> Self {
        AikitError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<git2::Error> for AikitError {
    fn from(err: git2::Error) -> Self {
        AikitError::GitOperationFailed {
            message: err.to_string(),
        }
    }
}

/// Creates a directory creation error
pub fn create_dir_failed(path: impl Into<String>, reason: impl Into<String>) -> AikitError {
    AikitError::CreateDirFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file read error
pub fn file_read_failed(path: impl Into<String>, reason: impl Into<String>) -> AikitError {
    AikitError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write error
pub fn file_write_failed(path: impl Into<String>, reason: impl Into<String>) -> AikitError {
    AikitError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file copy error
pub fn file_copy_failed(
    from: impl Into<String>,
    to: impl Into<String>,
    reason: impl Into<String>,
) -> AikitError {
    AikitError::FileCopyFailed {
        from: from.into(),
        to: to.into(),
        reason: reason.into(),
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, AikitError>;
