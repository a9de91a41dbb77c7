//! # Error Handling
//!
//! This module defines the centralized error type for `git-helper`. It uses
//! the `thiserror` library to describe every failure that can escape an
//! operation, with enough context to tell the user what was attempted.
//!
//! ## Key Components
//!
//! - **`Error`**: The enum of all failures that propagate out of the library.
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! Failures covered:
//!
//! - A git invocation that exited with a non-zero status.
//! - A git binary that could not be launched at all.
//! - A revert that failed partway through a revert sequence.
//! - Terminal and I/O failures while reading interactive input.
//!
//! Invalid interactive input (an empty commit message or hash) is not an
//! `Error`: it is handled inside the interactive loop and never propagates.

use thiserror::Error;

/// Main error type for git-helper operations
#[derive(Error, Debug)]
pub enum Error {
    /// Git ran but exited with a non-zero status.
    ///
    /// `command` holds the attempted arguments (without the program name);
    /// both output streams are kept as git wrote them.
    #[error("Git command failed: git {command}{}\n{}", code.map(|c| format!(" (exit code {})", c)).unwrap_or_default(), failure_text(stderr, stdout))]
    ExternalTool {
        command: String,
        code: Option<i32>,
        stderr: String,
        stdout: String,
    },

    /// The version-control binary could not be started.
    #[error("Failed to run {program}: {message}")]
    Spawn { program: String, message: String },

    /// A revert in a revert sequence failed; earlier reverts stay committed
    /// locally and nothing was pushed.
    #[error("Revert of {commit} failed ({completed} of {total} reverts applied, nothing pushed)\n{source}")]
    Revert {
        commit: String,
        completed: usize,
        total: usize,
        #[source]
        source: Box<Error>,
    },

    /// Reading interactive input from the terminal failed.
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns true when this is a non-zero exit whose output, on either
    /// stream, says there was nothing to commit.
    pub fn is_nothing_to_commit(&self) -> bool {
        match self {
            Error::ExternalTool { stderr, stdout, .. } => [stderr, stdout]
                .iter()
                .any(|text| text.to_lowercase().contains("nothing to commit")),
            _ => false,
        }
    }
}

/// The stream that best explains a failure: stderr, or stdout when stderr is
/// blank. Git reports some failures (`commit` with nothing staged) on stdout.
pub(crate) fn failure_text<'a>(stderr: &'a str, stdout: &'a str) -> &'a str {
    let stderr = stderr.trim();
    if stderr.is_empty() {
        stdout.trim()
    } else {
        stderr
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
