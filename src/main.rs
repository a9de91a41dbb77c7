//! # git-helper CLI
//!
//! This is the binary entry point for the `git-helper` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Running the selected subcommand, or the interactive menu when none is
//!   given.
//! - Reporting errors: any error returned from `main` is printed on stderr and
//!   the process exits with status 1.
//!
//! The operations themselves live in the `git_helper` library crate.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
