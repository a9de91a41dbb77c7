//! # Reset-Force Command Implementation
//!
//! `git-helper reset-force <hash> [-b <branch>]` runs `git reset --hard <hash>`
//! and force-pushes the branch. Commits after `<hash>` disappear from the
//! remote. Passing the subcommand is taken as the confirmation; only the
//! interactive menu asks.

use anyhow::Result;
use clap::Args;

use git_helper::dispatcher::Dispatcher;
use git_helper::git::GitRunner;

/// Reset to a commit and force-push
#[derive(Args, Debug)]
pub struct ResetForceArgs {
    /// Target commit hash
    #[arg(value_name = "HASH")]
    pub hash: String,

    /// Branch to reset and force-push, checked out first if needed (defaults to the current branch)
    #[arg(short, long)]
    pub branch: Option<String>,
}

/// Execute the `reset-force` command.
pub fn execute<R: GitRunner>(args: ResetForceArgs, dispatcher: &Dispatcher<R>) -> Result<()> {
    dispatcher.reset_and_force_publish(&args.hash, args.branch.as_deref())?;
    Ok(())
}
