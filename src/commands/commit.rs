//! # Commit Command Implementation
//!
//! `git-helper commit -m <message> [-b <branch>]` stages every change, commits
//! it, and pushes the branch with its upstream set. A clean working tree is
//! reported and the push still happens.

use anyhow::Result;
use clap::Args;

use git_helper::dispatcher::Dispatcher;
use git_helper::git::GitRunner;

/// Stage all changes, commit and push
#[derive(Args, Debug)]
pub struct CommitArgs {
    /// Commit message
    #[arg(short, long)]
    pub message: String,

    /// Branch to work on, checked out first if needed (defaults to the current branch)
    #[arg(short, long)]
    pub branch: Option<String>,
}

/// Execute the `commit` command.
pub fn execute<R: GitRunner>(args: CommitArgs, dispatcher: &Dispatcher<R>) -> Result<()> {
    dispatcher.commit_and_publish(&args.message, args.branch.as_deref())?;
    Ok(())
}
