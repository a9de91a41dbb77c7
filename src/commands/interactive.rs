//! # Interactive Mode
//!
//! Entered when `git-helper` runs without a subcommand. On a terminal the
//! prompts use `dialoguer`; when stdin is piped, answers are read line by line.

use std::io::{self, IsTerminal};

use anyhow::Result;

use git_helper::dispatcher::Dispatcher;
use git_helper::git::GitRunner;
use git_helper::interactive;
use git_helper::prompt::{LinePrompter, TermPrompter};

/// Run the interactive menu.
pub fn execute<R: GitRunner>(dispatcher: &Dispatcher<R>) -> Result<()> {
    if io::stdin().is_terminal() && io::stdout().is_terminal() {
        interactive::run(dispatcher, &mut TermPrompter::new())?;
    } else {
        interactive::run(dispatcher, &mut LinePrompter::stdin())?;
    }
    Ok(())
}
