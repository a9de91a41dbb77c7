//! # git-helper Library
//!
//! This library holds everything the `git-helper` command-line tool does:
//! commit and push a branch, list the newest commits on its remote, go back to
//! an earlier commit either by adding revert commits or by resetting and
//! force-pushing. All repository work is delegated to the `git` binary.
//!
//! ## Quick Example
//!
//! ```
//! use git_helper::history::{parse_log, CommitRecord};
//!
//! let out = "a1b2c3d Fix bug\n9f8e7d6 Add feature\n";
//! let commits = parse_log(out, 1);
//! assert_eq!(commits, vec![CommitRecord::new("a1b2c3d", "Fix bug")]);
//! ```
//!
//! ## Core Concepts
//!
//! - **Git invocation (`git`)**: [`git::GitRunner`] launches git and captures
//!   its exit status and output; [`git::SystemGit`] is the real
//!   implementation and [`git::Git`] names the invocations the tool uses.
//! - **Dispatcher (`dispatcher`)**: [`dispatcher::Dispatcher`] runs the
//!   operations, resolving the current branch when none is given.
//! - **History (`history`)**: parsing of one-line log output into
//!   [`history::CommitRecord`]s.
//! - **Interactive mode (`interactive`, `prompt`)**: the numbered menu and the
//!   sources it reads answers from.
//! - **Output (`output`)**: color and emoji decisions for status lines.
//!
//! Operations are synchronous: each git invocation blocks until git exits.

pub mod defaults;
pub mod dispatcher;
pub mod error;
pub mod git;
pub mod history;
pub mod interactive;
pub mod output;
pub mod prompt;

#[cfg(test)]
mod history_proptest;
#[cfg(test)]
mod test_support;
