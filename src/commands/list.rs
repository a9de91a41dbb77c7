//! # List Command Implementation
//!
//! `git-helper list [-b <branch>] [-n <limit>]` fetches the branch and prints
//! the newest commits of its remote-tracking ref, one `<id>  <subject>` line
//! each, newest first.

use anyhow::Result;
use clap::Args;

use git_helper::defaults::DEFAULT_LIST_LIMIT;
use git_helper::dispatcher::Dispatcher;
use git_helper::git::GitRunner;

/// List the latest remote commits
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Branch to list (defaults to the current branch)
    #[arg(short, long)]
    pub branch: Option<String>,

    /// Maximum number of commits to show
    #[arg(short = 'n', long, default_value_t = DEFAULT_LIST_LIMIT)]
    pub limit: usize,
}

/// Execute the `list` command.
pub fn execute<R: GitRunner>(args: ListArgs, dispatcher: &Dispatcher<R>) -> Result<()> {
    let commits = dispatcher.list_remote_history(args.branch.as_deref(), args.limit)?;
    for commit in &commits {
        println!("{}", commit);
    }
    Ok(())
}
