//! Shared test utilities for integration and E2E tests.
//!
//! This module provides fixtures and helpers to reduce duplication across
//! test files.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = GitFixture::new();
//!     fixture.command().arg("list").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::GitFixture;
    pub use super::TestFixture;
    #[allow(unused_imports)]
    pub use super::MISSING_GIT;
}

/// A git program path that cannot be launched.
///
/// Pointing `--git` here makes every invocation fail, so a command that exits
/// 0 with it provably never reached git.
pub const MISSING_GIT: &str = "/nonexistent/git-helper-tests/bin/git";

/// Environment variables that would leak the caller's configuration into a test.
const HELPER_ENV: &[&str] = &["GIT_HELPER_REMOTE", "GIT_HELPER_GIT", "GIT_HELPER_REPO"];

/// A temporary directory with no repository in it.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// A `git-helper` command running in this directory.
    pub fn command(&self) -> assert_cmd::Command {
        helper_command(self.path())
    }

    /// A `git-helper` command whose git binary cannot be launched.
    #[allow(dead_code)]
    pub fn command_without_git(&self) -> assert_cmd::Command {
        let mut cmd = self.command();
        cmd.arg("--git").arg(MISSING_GIT);
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A bare `remote.git` repository and a `work` clone of it on `main`,
/// holding one pushed commit that adds `README.md`.
///
/// Requires a `git` binary on `PATH`.
#[allow(dead_code)]
pub struct GitFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl GitFixture {
    pub fn new() -> Self {
        let temp_dir = assert_fs::TempDir::new().expect("Failed to create temp directory");
        let fixture = Self { temp_dir };

        run_git(fixture.path(), &["init", "-q", "--bare", "remote.git"]);
        run_git(
            &fixture.remote(),
            &["symbolic-ref", "HEAD", "refs/heads/main"],
        );

        run_git(fixture.path(), &["init", "-q", "work"]);
        let work = fixture.work();
        run_git(&work, &["symbolic-ref", "HEAD", "refs/heads/main"]);
        run_git(&work, &["config", "user.name", "Test User"]);
        run_git(&work, &["config", "user.email", "test@example.com"]);
        run_git(&work, &["config", "commit.gpgsign", "false"]);
        run_git(&work, &["remote", "add", "origin", "../remote.git"]);

        fixture.commit_file("README.md", "# project\n", "Initial commit");
        fixture.git(&["push", "-q", "-u", "origin", "main"]);
        fixture
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The working clone.
    pub fn work(&self) -> PathBuf {
        self.path().join("work")
    }

    /// The bare remote.
    pub fn remote(&self) -> PathBuf {
        self.path().join("remote.git")
    }

    /// Run git in the working clone and return its trimmed stdout.
    pub fn git(&self, args: &[&str]) -> String {
        run_git(&self.work(), args)
    }

    /// Write `name` in the working clone without committing it.
    pub fn write_file(&self, name: &str, content: &str) {
        self.temp_dir
            .child("work")
            .child(name)
            .write_str(content)
            .expect("Failed to write file");
    }

    /// Write and commit `name` locally (not pushed); returns the full hash.
    pub fn commit_file(&self, name: &str, content: &str, message: &str) -> String {
        self.write_file(name, content);
        self.git(&["add", name]);
        self.git(&["commit", "-q", "-m", message]);
        self.head()
    }

    /// Full hash of HEAD in the working clone.
    pub fn head(&self) -> String {
        self.git(&["rev-parse", "HEAD"])
    }

    /// Run git in the bare remote and return its trimmed stdout.
    pub fn remote_git(&self, args: &[&str]) -> String {
        run_git(&self.remote(), args)
    }

    /// Full hash of `main` on the bare remote.
    pub fn remote_head(&self) -> String {
        self.remote_git(&["rev-parse", "main"])
    }

    /// Subjects on the remote's `main`, newest first.
    pub fn remote_subjects(&self) -> Vec<String> {
        run_git(&self.remote(), &["log", "--format=%s", "main"])
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// A `git-helper` command running in the working clone.
    pub fn command(&self) -> assert_cmd::Command {
        helper_command(&self.work())
    }
}

fn helper_command(dir: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("git-helper");
    cmd.current_dir(dir);
    for var in HELPER_ENV {
        cmd.env_remove(var);
    }
    cmd
}

fn run_git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {} failed: {}",
        args.join(" "),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_creates_temp_dir() {
        let fixture = TestFixture::new();
        assert!(fixture.path().exists());
    }

    #[test]
    fn test_missing_git_is_absolute() {
        assert!(Path::new(MISSING_GIT).is_absolute());
        assert!(!Path::new(MISSING_GIT).exists());
    }
}
