//! # Revert Command Implementation
//!
//! `git-helper revert <hash> [-b <branch>]` adds one revert commit for every
//! commit after `<hash>`, newest first, and pushes without force. Existing
//! history is left untouched.

use anyhow::Result;
use clap::Args;

use git_helper::dispatcher::Dispatcher;
use git_helper::git::GitRunner;

/// Go back to a commit by adding revert commits
#[derive(Args, Debug)]
pub struct RevertArgs {
    /// Target commit hash (the branch ends up with this commit's content)
    #[arg(value_name = "HASH")]
    pub hash: String,

    /// Branch to work on, checked out first if needed (defaults to the current branch)
    #[arg(short, long)]
    pub branch: Option<String>,
}

/// Execute the `revert` command.
pub fn execute<R: GitRunner>(args: RevertArgs, dispatcher: &Dispatcher<R>) -> Result<()> {
    dispatcher.revert_to(&args.hash, args.branch.as_deref())?;
    Ok(())
}
