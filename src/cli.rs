//! CLI argument parsing and command dispatch

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use git_helper::defaults::{
    DEFAULT_GIT_PROGRAM, DEFAULT_REMOTE, ENV_GIT_PROGRAM, ENV_REMOTE, ENV_REPO,
};
use git_helper::dispatcher::Dispatcher;
use git_helper::git::SystemGit;
use git_helper::output::OutputConfig;

use crate::commands;

/// git-helper - Commit, push, list and roll back a branch through git
///
/// Run without a subcommand for an interactive menu.
#[derive(Parser, Debug)]
#[command(name = "git-helper")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute (omit for interactive mode)
    #[command(subcommand)]
    command: Option<Commands>,

    /// Remote to fetch from and push to
    #[arg(long, global = true, value_name = "NAME", env = ENV_REMOTE, default_value = DEFAULT_REMOTE)]
    remote: String,

    /// Git binary to run
    #[arg(long = "git", global = true, value_name = "PATH", env = ENV_GIT_PROGRAM, default_value = DEFAULT_GIT_PROGRAM)]
    git_program: PathBuf,

    /// Run git inside this directory instead of the current one
    #[arg(short = 'C', long = "repo", global = true, value_name = "DIR", env = ENV_REPO)]
    repo: Option<PathBuf>,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto",
          value_parser = ["always", "never", "auto"])]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "info",
          value_parser = ["error", "warn", "info", "debug", "trace"])]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Stage all changes, commit them and push the branch
    Commit(commands::commit::CommitArgs),

    /// List the latest commits on the remote branch
    List(commands::list::ListArgs),

    /// Go back to a commit by adding revert commits (does not rewrite history)
    Revert(commands::revert::RevertArgs),

    /// Reset to a commit and force-push (rewrites remote history)
    #[command(name = "reset-force")]
    ResetForce(commands::reset_force::ResetForceArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);

        let dispatcher = self.dispatcher();

        match self.command {
            None => commands::interactive::execute(&dispatcher),
            Some(Commands::Commit(args)) => commands::commit::execute(args, &dispatcher),
            Some(Commands::List(args)) => commands::list::execute(args, &dispatcher),
            Some(Commands::Revert(args)) => commands::revert::execute(args, &dispatcher),
            Some(Commands::ResetForce(args)) => commands::reset_force::execute(args, &dispatcher),
        }
    }

    fn dispatcher(&self) -> Dispatcher<SystemGit> {
        let mut git = SystemGit::new(&self.git_program);
        if let Some(repo) = &self.repo {
            git = git.with_working_dir(repo);
        }

        Dispatcher::new(git)
            .with_remote(&self.remote)
            .with_output(OutputConfig::from_env_and_flag(&self.color))
    }
}

/// Send `log` records at `level` and above to stderr.
fn init_logging(level: &str) {
    let _ = env_logger::Builder::new()
        .parse_filters(level)
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
