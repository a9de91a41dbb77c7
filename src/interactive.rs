//! # Interactive Menu
//!
//! A numbered menu that collects the inputs for one operation at a time and
//! runs it through a [`Dispatcher`]:
//!
//! ```text
//!   1) Commit and push
//!   2) List latest remote commits
//!   3) Go back to a commit (reverts, does NOT rewrite history)
//!   4) Force reset to a commit (rewrites history)
//!   0) Exit
//! ```
//!
//! Empty required answers cancel the current action and show the menu again.
//! Operation failures end the session and are returned to the caller. End of
//! input at any prompt ends the session normally.

use log::debug;
use thiserror::Error;

use crate::defaults::{is_affirmative, DEFAULT_LIST_LIMIT, FALLBACK_BRANCH};
use crate::dispatcher::Dispatcher;
use crate::error::Result;
use crate::git::GitRunner;
use crate::prompt::Prompter;

/// A menu answer, keyed by the number the user types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    Run(Action),
}

/// The operations the menu offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CommitAndPush,
    ListRemote,
    Revert,
    ResetForce,
}

impl MenuChoice {
    /// Parse the user's menu answer.
    pub fn parse(input: &str) -> Option<Self> {
        let action = match input.trim() {
            "0" => return Some(Self::Exit),
            "1" => Action::CommitAndPush,
            "2" => Action::ListRemote,
            "3" => Action::Revert,
            "4" => Action::ResetForce,
            _ => return None,
        };
        Some(Self::Run(action))
    }
}

/// Invalid answers to a prompt. These cancel the current action only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Empty commit message, cancelled.")]
    EmptyMessage,

    #[error("Empty hash, cancelled.")]
    EmptyHash,

    #[error("Invalid option: {0:?}")]
    InvalidChoice(String),
}

/// What to do after one pass through the menu.
enum Step {
    Continue,
    Quit,
}

/// Run the menu until the user exits, input ends, or an operation fails.
pub fn run<R: GitRunner, P: Prompter>(dispatcher: &Dispatcher<R>, prompter: &mut P) -> Result<()> {
    let detected_branch = match dispatcher.current_branch() {
        Ok(branch) => Some(branch),
        Err(e) => {
            debug!("could not detect current branch: {}", e);
            None
        }
    };
    let default_branch = detected_branch.as_deref().unwrap_or(FALLBACK_BRANCH);

    loop {
        print_menu();
        let Some(answer) = prompter.ask("Choose an option")? else {
            return Ok(());
        };

        let action = match MenuChoice::parse(&answer) {
            Some(MenuChoice::Exit) => return Ok(()),
            Some(MenuChoice::Run(action)) => action,
            None => {
                println!("{}", InputError::InvalidChoice(answer.trim().to_string()));
                continue;
            }
        };

        let step = match run_action(dispatcher, prompter, action, default_branch) {
            Ok(step) => step,
            Err(Outcome::Input(e)) => {
                println!("{}", e);
                Step::Continue
            }
            Err(Outcome::Fatal(e)) => return Err(e),
        };

        if let Step::Quit = step {
            return Ok(());
        }
    }
}

enum Outcome {
    Input(InputError),
    Fatal(crate::error::Error),
}

impl From<crate::error::Error> for Outcome {
    fn from(e: crate::error::Error) -> Self {
        Outcome::Fatal(e)
    }
}

impl From<InputError> for Outcome {
    fn from(e: InputError) -> Self {
        Outcome::Input(e)
    }
}

fn run_action<R: GitRunner, P: Prompter>(
    dispatcher: &Dispatcher<R>,
    prompter: &mut P,
    action: Action,
    default_branch: &str,
) -> std::result::Result<Step, Outcome> {
    let Some(branch_name) = ask_branch(prompter, default_branch)? else {
        return Ok(Step::Quit);
    };
    let branch = Some(branch_name.as_str());

    match action {
        Action::CommitAndPush => {
            let Some(message) = prompter.ask("Commit message")? else {
                return Ok(Step::Quit);
            };
            let message = message.trim();
            if message.is_empty() {
                return Err(InputError::EmptyMessage.into());
            }
            dispatcher.commit_and_publish(message, branch)?;
            Ok(Step::Continue)
        }

        Action::ListRemote => {
            let prompt = format!("How many commits to list? (enter={})", DEFAULT_LIST_LIMIT);
            let Some(limit) = prompter.ask(&prompt)? else {
                return Ok(Step::Quit);
            };
            let limit = parse_limit(&limit);

            let commits = dispatcher.list_remote_history(branch, limit)?;
            if commits.is_empty() {
                println!("No remote commits, or the list could not be retrieved.");
            } else {
                println!("\nRemote commits:");
                for commit in &commits {
                    println!("{}", commit);
                }
            }
            Ok(Step::Continue)
        }

        Action::Revert => {
            println!("Tip: list commits first (option 2) to copy the hash.");
            let Some(target) = ask_hash(prompter)? else {
                return Ok(Step::Quit);
            };
            dispatcher.revert_to(&target, branch)?;
            Ok(Step::Continue)
        }

        Action::ResetForce => {
            println!(
                "{}",
                dispatcher
                    .output()
                    .warning("this action rewrites the remote history.")
            );
            let Some(target) = ask_hash(prompter)? else {
                return Ok(Step::Quit);
            };
            let prompt = format!(
                "Confirm reset --hard to {} and push --force to '{}'? (yes/no)",
                target, branch_name
            );
            let Some(answer) = prompter.ask(&prompt)? else {
                return Ok(Step::Quit);
            };
            if is_affirmative(&answer) {
                dispatcher.reset_and_force_publish(&target, branch)?;
            } else {
                println!("Cancelled.");
            }
            Ok(Step::Continue)
        }
    }
}

fn ask_branch<P: Prompter>(prompter: &mut P, default_branch: &str) -> Result<Option<String>> {
    let prompt = format!("Branch (enter for '{}')", default_branch);
    Ok(prompter.ask(&prompt)?.map(|answer| {
        let answer = answer.trim();
        if answer.is_empty() {
            default_branch.to_string()
        } else {
            answer.to_string()
        }
    }))
}

fn ask_hash<P: Prompter>(prompter: &mut P) -> std::result::Result<Option<String>, Outcome> {
    let Some(hash) = prompter.ask("Target commit hash")? else {
        return Ok(None);
    };
    let hash = hash.trim();
    if hash.is_empty() {
        return Err(InputError::EmptyHash.into());
    }
    Ok(Some(hash.to_string()))
}

/// Parse the list-limit answer; empty or invalid input means the default.
fn parse_limit(input: &str) -> usize {
    input.trim().parse().unwrap_or(DEFAULT_LIST_LIMIT)
}

fn print_menu() {
    println!("\nWhat do you want to do?");
    println!("  1) Commit and push");
    println!("  2) List latest remote commits");
    println!("  3) Go back to a commit (reverts, does NOT rewrite history)");
    println!("  4) Force reset to a commit (rewrites history)");
    println!("  0) Exit");
}
