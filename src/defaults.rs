//! Default values for git-helper configuration.
//!
//! This module provides centralized default values used across commands,
//! ensuring the CLI and the interactive menu agree on them.

/// Remote that is fetched from and pushed to unless `--remote` says otherwise.
pub const DEFAULT_REMOTE: &str = "origin";

/// Version-control binary invoked unless `--git` says otherwise.
pub const DEFAULT_GIT_PROGRAM: &str = "git";

/// Number of commits `list` shows when no limit is given.
pub const DEFAULT_LIST_LIMIT: usize = 30;

/// Branch suggested in interactive mode when the current branch cannot be
/// detected.
pub const FALLBACK_BRANCH: &str = "main";

/// Environment variable overriding the remote name.
pub const ENV_REMOTE: &str = "GIT_HELPER_REMOTE";

/// Environment variable overriding the git binary.
pub const ENV_GIT_PROGRAM: &str = "GIT_HELPER_GIT";

/// Environment variable overriding the repository directory.
pub const ENV_REPO: &str = "GIT_HELPER_REPO";

/// Answers accepted as confirmation of a destructive action.
///
/// Compared after trimming and lowercasing the user's answer.
pub const AFFIRMATIVE_ANSWERS: &[&str] = &["si", "sí", "yes", "y"];

/// Returns true if `answer` confirms a destructive action.
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    AFFIRMATIVE_ANSWERS.contains(&answer.as_str())
}
