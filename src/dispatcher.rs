//! # Command Dispatcher
//!
//! The operations git-helper offers, each a short fixed sequence of git
//! invocations:
//!
//! - [`Dispatcher::commit_and_publish`]: stage everything, commit, push.
//! - [`Dispatcher::list_remote_history`]: newest commits on the remote branch.
//! - [`Dispatcher::revert_to`]: add revert commits back to a target, push.
//! - [`Dispatcher::reset_and_force_publish`]: hard reset to a target, force push.
//!
//! Every operation takes an optional branch; `None` means the branch that is
//! currently checked out. Operations that change the branch switch to an
//! explicitly named branch first, so local and remote work happen on the same
//! branch. Operations print their progress to stdout and return an outcome
//! value for the caller.

use log::{debug, warn};

use crate::defaults::DEFAULT_REMOTE;
use crate::error::{Error, Result};
use crate::git::{Git, GitRunner};
use crate::history::{parse_log, CommitRecord};
use crate::output::OutputConfig;

/// Result of [`Dispatcher::commit_and_publish`] when it succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// A new commit was created and pushed.
    Committed,
    /// The working tree matched HEAD; the branch was pushed as it was.
    NothingToCommit,
}

/// Result of [`Dispatcher::revert_to`] when it succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevertOutcome {
    /// The target is already HEAD; nothing was reverted or pushed.
    NothingToRevert,
    /// These commits were reverted, newest first, and the branch was pushed.
    Reverted(Vec<String>),
}

/// Runs git-helper operations against one repository and remote.
pub struct Dispatcher<R> {
    git: Git<R>,
    remote: String,
    output: OutputConfig,
}

impl<R: GitRunner> Dispatcher<R> {
    pub fn new(runner: R) -> Self {
        Self {
            git: Git::new(runner),
            remote: DEFAULT_REMOTE.to_string(),
            output: OutputConfig::default(),
        }
    }

    /// Use `remote` instead of the default remote.
    pub fn with_remote(mut self, remote: impl Into<String>) -> Self {
        self.remote = remote.into();
        self
    }

    /// Use `output` for status lines.
    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    pub fn remote(&self) -> &str {
        &self.remote
    }

    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    pub fn git(&self) -> &Git<R> {
        &self.git
    }

    /// Name of the checked-out branch.
    pub fn current_branch(&self) -> Result<String> {
        self.git.current_branch()
    }

    /// Fetch `branch` from the remote, ignoring any failure.
    ///
    /// Operations that read remote state afterwards must cope with a stale
    /// or missing remote-tracking ref.
    pub fn refresh_remote(&self, branch: &str) {
        if let Err(e) = self.git.fetch(&self.remote, branch) {
            warn!("could not fetch {}/{}: {}", self.remote, branch, e);
        }
    }

    /// Stage all changes, commit them with `message` if there are any, then
    /// push the branch and set its upstream.
    ///
    /// An unchanged working tree is not an error: no commit is made and the
    /// push still runs.
    pub fn commit_and_publish(&self, message: &str, branch: Option<&str>) -> Result<CommitOutcome> {
        let branch = self.switch_to_branch(branch)?;

        self.git.add_all()?;

        let outcome = if self.git.has_staged_changes()? {
            match self.git.commit(message) {
                Ok(()) => CommitOutcome::Committed,
                Err(e) if e.is_nothing_to_commit() => CommitOutcome::NothingToCommit,
                Err(e) => return Err(e),
            }
        } else {
            CommitOutcome::NothingToCommit
        };

        match outcome {
            CommitOutcome::Committed => {
                println!("{} Commit created.", self.output.success_mark())
            }
            CommitOutcome::NothingToCommit => {
                println!("{} Nothing to commit.", self.output.info_mark())
            }
        }

        self.git.push_set_upstream(&self.remote, &branch)?;
        println!(
            "{} Pushed to {}/{}",
            self.output.success_mark(),
            self.remote,
            branch
        );

        Ok(outcome)
    }

    /// Newest `limit` commits on the remote-tracking branch, newest first.
    pub fn list_remote_history(
        &self,
        branch: Option<&str>,
        limit: usize,
    ) -> Result<Vec<CommitRecord>> {
        let branch = self.resolve_branch(branch)?;
        self.refresh_remote(&branch);

        let rev = format!("{}/{}", self.remote, branch);
        let out = self.git.log_oneline(&rev, limit)?;
        Ok(parse_log(&out, limit))
    }

    /// Bring the branch back to the content of `target` by adding one revert
    /// commit per commit after it, then push without force.
    ///
    /// Commits are reverted newest first. The first failed revert stops the
    /// sequence and nothing is pushed.
    pub fn revert_to(&self, target: &str, branch: Option<&str>) -> Result<RevertOutcome> {
        let branch = self.switch_to_branch(branch)?;
        self.refresh_remote(&branch);

        let to_revert = self.git.ancestry_path_to_head(target)?;
        if to_revert.is_empty() {
            println!(
                "{} No commits after {}. Nothing to revert.",
                self.output.info_mark(),
                target
            );
            return Ok(RevertOutcome::NothingToRevert);
        }

        let total = to_revert.len();
        for (completed, commit) in to_revert.iter().enumerate() {
            println!("{} Reverting {}...", self.output.progress_mark(), commit);
            self.git.revert(commit).map_err(|e| Error::Revert {
                commit: commit.clone(),
                completed,
                total,
                source: Box::new(e),
            })?;
        }

        self.git.push(&self.remote, &branch)?;
        println!(
            "{} Reverted {} commit(s) and pushed to {}/{}",
            self.output.success_mark(),
            total,
            self.remote,
            branch
        );

        Ok(RevertOutcome::Reverted(to_revert))
    }

    /// Hard-reset the branch to `target` and force-push it, replacing the
    /// remote's history.
    ///
    /// Does not ask for confirmation; interactive callers must do that first.
    pub fn reset_and_force_publish(&self, target: &str, branch: Option<&str>) -> Result<()> {
        let branch = self.switch_to_branch(branch)?;

        println!(
            "{} Resetting to {} and force-pushing...",
            self.output.progress_mark(),
            target
        );
        self.git.reset_hard(target)?;
        self.git.push_force(&self.remote, &branch)?;
        println!(
            "{} {}/{} now points to {} (history rewritten)",
            self.output.success_mark(),
            self.remote,
            branch,
            target
        );

        Ok(())
    }

    fn resolve_branch(&self, branch: Option<&str>) -> Result<String> {
        match explicit_branch(branch) {
            Some(b) => Ok(b.to_string()),
            None => self.current_branch(),
        }
    }

    /// Resolve the branch like [`Self::resolve_branch`], checking out an
    /// explicit branch that is not the current one.
    ///
    /// An explicit branch is used as given when the current branch cannot be
    /// detected (an unborn branch, for one).
    fn switch_to_branch(&self, branch: Option<&str>) -> Result<String> {
        let Some(requested) = explicit_branch(branch) else {
            return self.current_branch();
        };

        match self.current_branch() {
            Ok(current) if current == requested => {}
            Ok(current) => {
                println!(
                    "{} Switching from {} to {}...",
                    self.output.progress_mark(),
                    current,
                    requested
                );
                self.git.checkout(requested)?;
            }
            Err(e) => debug!("could not detect current branch: {}", e),
        }
        Ok(requested.to_string())
    }
}

fn explicit_branch(branch: Option<&str>) -> Option<&str> {
    branch.map(str::trim).filter(|b| !b.is_empty())
}
