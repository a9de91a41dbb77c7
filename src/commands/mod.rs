//! # CLI Command Implementations
//!
//! One module per subcommand of the `git-helper` command-line tool, plus the
//! interactive menu used when no subcommand is given.
//!
//! ## Structure
//!
//! Each command module typically contains:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and runs the
//!   operation through the `git_helper` library's `Dispatcher`.

pub mod commit;
pub mod interactive;
pub mod list;
pub mod reset_force;
pub mod revert;
