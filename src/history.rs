//! Commit records parsed from `git log --oneline` output.

use std::fmt;

/// One line of one-line log output: an abbreviated id and a subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub id: String,
    /// Subject line; empty when the log line carried only an id.
    pub subject: String,
}

impl CommitRecord {
    pub fn new(id: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            subject: subject.into(),
        }
    }
}

impl fmt::Display for CommitRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  {}", self.id, self.subject)
    }
}

/// Parse one log line into a record.
///
/// The line is split on its first run of whitespace into id and subject.
/// Returns `None` for blank lines.
pub fn parse_log_line(line: &str) -> Option<CommitRecord> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    match line.split_once(char::is_whitespace) {
        Some((id, rest)) => Some(CommitRecord::new(id, rest.trim_start())),
        None => Some(CommitRecord::new(line, "")),
    }
}

/// Parse `git log --oneline` output, keeping at most `limit` records in the
/// order git printed them.
pub fn parse_log(output: &str, limit: usize) -> Vec<CommitRecord> {
    output
        .lines()
        .filter_map(parse_log_line)
        .take(limit)
        .collect()
}
