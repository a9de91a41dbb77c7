//! Git process invocation.
//!
//! Everything git-helper knows about the repository comes from running the
//! `git` binary and reading its exit status and output text. This module
//! holds that boundary:
//!
//! - [`ProcessOutput`]: what one invocation produced.
//! - [`GitRunner`]: the seam used to launch git, so operations can be driven
//!   by a scripted runner in tests.
//! - [`SystemGit`]: the real runner, built on `std::process::Command`.
//! - [`Git`]: named invocations (`add -A`, `push --force`, ...) on top of a
//!   runner, turning non-zero exits into [`Error::ExternalTool`].

use std::path::PathBuf;
use std::process::Command;

use log::debug;

use crate::defaults::DEFAULT_GIT_PROGRAM;
use crate::error::{Error, Result};

/// Exit status and captured output of one git invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code, or `None` if the process was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    /// Whether the process exited with status 0.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Launches git with an argument vector and captures the result.
///
/// Implementations only fail when git could not be run at all; a non-zero
/// exit is reported through [`ProcessOutput::code`].
pub trait GitRunner {
    fn run(&self, args: &[&str]) -> Result<ProcessOutput>;
}

/// Runs the system git binary.
///
/// This uses the system git command, which automatically handles:
/// - SSH keys from ~/.ssh/
/// - Git credential helpers
/// - Any authentication configured in ~/.gitconfig
#[derive(Debug, Clone)]
pub struct SystemGit {
    program: PathBuf,
    working_dir: Option<PathBuf>,
}

impl SystemGit {
    /// Runner for `program` in the current directory.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            working_dir: None,
        }
    }

    /// Run every invocation inside `dir` instead of the current directory.
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }
}

impl Default for SystemGit {
    fn default() -> Self {
        Self::new(DEFAULT_GIT_PROGRAM)
    }
}

impl GitRunner for SystemGit {
    fn run(&self, args: &[&str]) -> Result<ProcessOutput> {
        debug!("running {} {}", self.program.display(), args.join(" "));

        let mut command = Command::new(&self.program);
        command.args(args);
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }

        let output = command.output().map_err(|e| Error::Spawn {
            program: self.program.display().to_string(),
            message: e.to_string(),
        })?;

        let result = ProcessOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        };
        debug!("{} {} exited with {:?}", self.program.display(), args.join(" "), result.code);
        Ok(result)
    }
}

impl<R: GitRunner + ?Sized> GitRunner for &R {
    fn run(&self, args: &[&str]) -> Result<ProcessOutput> {
        (**self).run(args)
    }
}

/// Named git invocations over a [`GitRunner`].
#[derive(Debug, Clone)]
pub struct Git<R> {
    runner: R,
}

impl<R: GitRunner> Git<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// The underlying runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Run git and return its raw result, whatever the exit status.
    pub fn run_unchecked(&self, args: &[&str]) -> Result<ProcessOutput> {
        self.runner.run(args)
    }

    /// Run git and return stdout, failing on a non-zero exit.
    pub fn run(&self, args: &[&str]) -> Result<String> {
        let output = self.runner.run(args)?;
        check(args, output)
    }

    /// Abbreviated name of the checked-out ref (`git rev-parse --abbrev-ref HEAD`).
    pub fn current_branch(&self) -> Result<String> {
        let out = self.run(&["rev-parse", "--abbrev-ref", "HEAD"])?;
        Ok(out.trim().to_string())
    }

    /// Switch the working tree to `branch`.
    pub fn checkout(&self, branch: &str) -> Result<()> {
        self.run(&["checkout", branch]).map(drop)
    }

    /// Fetch one branch from a remote.
    pub fn fetch(&self, remote: &str, branch: &str) -> Result<()> {
        self.run(&["fetch", remote, branch]).map(drop)
    }

    /// Stage every change in the working tree, including deletions.
    pub fn add_all(&self) -> Result<()> {
        self.run(&["add", "-A"]).map(drop)
    }

    /// Whether the index differs from HEAD.
    ///
    /// Relies on the exit status of `git diff --cached --quiet`: 0 means no
    /// staged changes, 1 means staged changes, anything else is a failure.
    pub fn has_staged_changes(&self) -> Result<bool> {
        let args = ["diff", "--cached", "--quiet"];
        let output = self.runner.run(&args)?;
        match output.code {
            Some(0) => Ok(false),
            Some(1) => Ok(true),
            _ => Err(external_tool_error(&args, &output)),
        }
    }

    /// Create a commit from the index.
    pub fn commit(&self, message: &str) -> Result<()> {
        self.run(&["commit", "-m", message]).map(drop)
    }

    /// Push a branch and record the remote as its upstream.
    pub fn push_set_upstream(&self, remote: &str, branch: &str) -> Result<()> {
        self.run(&["push", "-u", remote, branch]).map(drop)
    }

    /// Push a branch; rejected if it is not a fast-forward.
    pub fn push(&self, remote: &str, branch: &str) -> Result<()> {
        self.run(&["push", remote, branch]).map(drop)
    }

    /// Push a branch, overwriting whatever the remote has.
    pub fn push_force(&self, remote: &str, branch: &str) -> Result<()> {
        self.run(&["push", "--force", remote, branch]).map(drop)
    }

    /// One-line log of the newest `limit` commits reachable from `rev`.
    pub fn log_oneline(&self, rev: &str, limit: usize) -> Result<String> {
        let count = format!("-n{limit}");
        self.run(&["log", rev, "--oneline", &count])
    }

    /// Commits on the ancestry path from `target` (exclusive) to HEAD,
    /// newest first.
    pub fn ancestry_path_to_head(&self, target: &str) -> Result<Vec<String>> {
        let range = format!("{target}..HEAD");
        let out = self.run(&["rev-list", "--ancestry-path", &range])?;
        Ok(out
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Record a new commit undoing `commit`, with git's generated message.
    pub fn revert(&self, commit: &str) -> Result<()> {
        self.run(&["revert", "--no-edit", commit]).map(drop)
    }

    /// Move the branch and working tree to `target`, discarding everything after it.
    pub fn reset_hard(&self, target: &str) -> Result<()> {
        self.run(&["reset", "--hard", target]).map(drop)
    }
}

fn check(args: &[&str], output: ProcessOutput) -> Result<String> {
    if output.success() {
        Ok(output.stdout)
    } else {
        Err(external_tool_error(args, &output))
    }
}

fn external_tool_error(args: &[&str], output: &ProcessOutput) -> Error {
    Error::ExternalTool {
        command: args.join(" "),
        code: output.code,
        stderr: output.stderr.clone(),
        stdout: output.stdout.clone(),
    }
}
