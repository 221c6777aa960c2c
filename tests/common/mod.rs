//! Common test utilities for aikit integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn aikit_cmd() -> Command {
    Command::cargo_bin("aikit").unwrap()
}

/// Sandbox for one CLI test: a source project to run in, a home to install
/// into, and an overridden user home carrying the git identity
pub struct TestHome {
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Project directory the binary runs in (source of the mirrored files)
    pub source: PathBuf,
    /// Where AIKIT_HOME points; created by the binary, not up front
    pub aikit_home: PathBuf,
    user_home: PathBuf,
}

impl TestHome {
    /// Sandbox with a git identity configured
    pub fn new() -> Self {
        let sandbox = Self::bare();
        std::fs::write(
            sandbox.user_home.join(".gitconfig"),
            "[user]\n\tname = Test User\n\temail = test@example.com\n",
        )
        .expect("Failed to write git identity");
        sandbox
    }

    /// Sandbox without a git identity, for exercising commit failures
    pub fn bare() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let source = temp.path().join("project");
        let aikit_home = temp.path().join("aikit-home");
        let user_home = temp.path().join("user-home");
        std::fs::create_dir_all(&source).expect("Failed to create project directory");
        std::fs::create_dir_all(&user_home).expect("Failed to create user home");

        Self {
            temp,
            source,
            aikit_home,
            user_home,
        }
    }

    /// Command wired to this sandbox
    ///
    /// HOME, USERPROFILE and XDG_CONFIG_HOME all point into the sandbox so
    /// the developer's real git configuration never leaks into a test.
    pub fn cmd(&self) -> Command {
        let mut cmd = aikit_cmd();
        cmd.current_dir(&self.source)
            .env("AIKIT_HOME", &self.aikit_home)
            .env("HOME", &self.user_home)
            .env("USERPROFILE", &self.user_home)
            .env("XDG_CONFIG_HOME", self.user_home.join(".config"));
        cmd
    }

    /// Write a file under the source project
    pub fn write_source_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.source.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    pub fn home_file(&self, path: &str) -> PathBuf {
        self.aikit_home.join(path)
    }

    #[allow(dead_code)]
    pub fn read_home_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.home_file(path)).expect("Failed to read file")
    }

    pub fn home_file_exists(&self, path: &str) -> bool {
        self.home_file(path).exists()
    }
}

impl Default for TestHome {
    fn default() -> Self {
        Self::new()
    }
}

/// Shift a file's mtime so it reads as strictly newer (or older) than copies
#[allow(dead_code)]
pub fn shift_mtime(path: &Path, seconds: i64) {
    let metadata = std::fs::metadata(path).expect("Failed to stat file");
    let mtime = filetime::FileTime::from_last_modification_time(&metadata);
    let shifted = filetime::FileTime::from_unix_time(mtime.unix_seconds() + seconds, 0);
    filetime::set_file_mtime(path, shifted).expect("Failed to set mtime");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sandbox_layout() {
        let sandbox = TestHome::new();
        assert!(sandbox.source.exists());
        assert!(!sandbox.aikit_home.exists());
    }

    #[test]
    fn test_sandbox_file_operations() {
        let sandbox = TestHome::new();
        sandbox.write_source_file("agents/helper.md", "# Helper");
        assert!(sandbox.source.join("agents/helper.md").exists());
        assert!(!sandbox.home_file_exists("agents/helper.md"));
    }
}
