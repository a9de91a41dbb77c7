//! Scripted git runner for unit tests.

use std::cell::RefCell;

use crate::error::{Error, Result};
use crate::git::{GitRunner, ProcessOutput};

/// A [`GitRunner`] that records every invocation and answers from a script.
///
/// Rules are matched in the order they were added: the first rule whose
/// argument prefix matches the call wins. Calls without a matching rule
/// succeed with empty output.
#[derive(Default)]
pub struct ScriptedGit {
    rules: Vec<(Vec<String>, Reply)>,
    calls: RefCell<Vec<Vec<String>>>,
}

#[derive(Clone)]
enum Reply {
    Output(ProcessOutput),
    SpawnFailure,
}

impl ScriptedGit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer calls starting with `prefix` with `output`.
    pub fn respond(mut self, prefix: &[&str], output: ProcessOutput) -> Self {
        self.rules.push((to_strings(prefix), Reply::Output(output)));
        self
    }

    /// Fail to launch git for calls starting with `prefix`.
    pub fn spawn_failure(mut self, prefix: &[&str]) -> Self {
        self.rules.push((to_strings(prefix), Reply::SpawnFailure));
        self
    }

    /// A successful exit with the given stdout.
    pub fn ok(stdout: &str) -> ProcessOutput {
        ProcessOutput {
            code: Some(0),
            stdout: stdout.to_string(),
            stderr: String::new(),
        }
    }

    /// A failed exit with the given code and stderr.
    pub fn fail(code: i32, stderr: &str) -> ProcessOutput {
        ProcessOutput {
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.to_string(),
        }
    }

    /// Every call so far, each rendered as its space-joined arguments.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|c| c.join(" ")).collect()
    }

    /// Whether any call started with `prefix`.
    pub fn called(&self, prefix: &[&str]) -> bool {
        self.calls
            .borrow()
            .iter()
            .any(|call| starts_with(call, prefix))
    }
}

impl GitRunner for ScriptedGit {
    fn run(&self, args: &[&str]) -> Result<ProcessOutput> {
        self.calls.borrow_mut().push(to_strings(args));

        let reply = self
            .rules
            .iter()
            .find(|(prefix, _)| {
                let prefix: Vec<&str> = prefix.iter().map(String::as_str).collect();
                starts_with(&to_strings(args), &prefix)
            })
            .map(|(_, reply)| reply.clone());

        match reply {
            Some(Reply::Output(output)) => Ok(output),
            Some(Reply::SpawnFailure) => Err(Error::Spawn {
                program: "git".to_string(),
                message: "No such file or directory (os error 2)".to_string(),
            }),
            None => Ok(Self::ok("")),
        }
    }
}

fn to_strings(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

fn starts_with(call: &[String], prefix: &[&str]) -> bool {
    call.len() >= prefix.len() && call.iter().zip(prefix).all(|(a, b)| a == b)
}
