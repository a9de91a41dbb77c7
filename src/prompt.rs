//! Reading answers to interactive prompts.
//!
//! Two sources are supported: a terminal, driven through `dialoguer`, and any
//! line-oriented reader (piped stdin, or a buffer in tests).

use std::io::{self, BufRead, Write};

use dialoguer::{theme::ColorfulTheme, Input};

use crate::error::Result;

/// Asks the user a question and returns the answer.
pub trait Prompter {
    /// Show `prompt` and read one answer, without its line ending.
    ///
    /// Returns `Ok(None)` once input is exhausted.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Prompts on a terminal with `dialoguer`.
pub struct TermPrompter {
    theme: ColorfulTheme,
}

impl TermPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TermPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TermPrompter {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        let answer = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text();

        match answer {
            Ok(answer) => Ok(Some(answer)),
            Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Prompts by writing to stdout and reading whole lines from `reader`.
pub struct LinePrompter<R> {
    reader: R,
}

impl<R: BufRead> LinePrompter<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl LinePrompter<io::StdinLock<'static>> {
    /// Line prompter over the process's standard input.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> Prompter for LinePrompter<R> {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        print!("{}: ", prompt);
        io::stdout().flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            println!();
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}
