//! Fixed-format parsing of git query output
//!
//! The log query yields a single line `"<short> <40-hex> <date>"`. Each field
//! is matched independently by an anchored pattern; a field that fails to
//! match is simply absent from the result. Only when no field matches at all
//! is the whole parse reported as a failure.

use regex::Regex;
use std::sync::OnceLock;

use crate::core::date_parser;
use crate::core::properties::{
    RevisionProperties, COMMIT_DATE_ISO_PROPERTY, COMMIT_DATE_PROPERTY, LONG_COMMIT_HASH_PROPERTY,
    REPO_STATUS_PROPERTY, SHORT_COMMIT_HASH_PROPERTY, STATUS_CLEAN, STATUS_DIRTY, STATUS_UNKNOWN,
};

use super::error::{GitError, GitResult};
use super::runner::GitQueryResult;

fn short_hash_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^([0-9a-f]+) .*$").expect("pattern compiles"))
}

fn long_hash_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9a-f]+ ([0-9a-f]{40}) .*$").expect("pattern compiles"))
}

fn date_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9a-f]+ [0-9a-f]{40} (.*)$").expect("pattern compiles"))
}

/// Build the property set from the log query output and the already-decided
/// repository status.
pub fn parse_revision(output: &str, status: &str) -> GitResult<RevisionProperties> {
    let line = output.lines().next().unwrap_or("").trim_end();
    let mut props = RevisionProperties::new();
    props.set(REPO_STATUS_PROPERTY, status);

    if let Some(captures) = short_hash_pattern().captures(line) {
        props.set(SHORT_COMMIT_HASH_PROPERTY, &captures[1]);
    }
    if let Some(captures) = long_hash_pattern().captures(line) {
        props.set(LONG_COMMIT_HASH_PROPERTY, &captures[1]);
    }
    if let Some(captures) = date_pattern().captures(line) {
        let git_date = &captures[1];
        props.set(COMMIT_DATE_PROPERTY, git_date);
        match date_parser::parse_git_log_date(git_date) {
            Ok(dt) => props.set(COMMIT_DATE_ISO_PROPERTY, date_parser::to_iso_instant(&dt)),
            Err(err) => log::warn!("Could not parse date stamp '{}': {}", git_date, err),
        }
    }

    // Only the status key means nothing in the line matched.
    if props.len() <= 1 {
        return Err(GitError::UnmatchedOutput {
            output: output.to_string(),
        });
    }
    Ok(props)
}

/// Interpret the porcelain status query: any stdout bytes mean the working
/// tree is dirty, empty stdout with a zero exit means clean, and a failed
/// query means we cannot tell.
pub fn interpret_status(result: &GitQueryResult) -> &'static str {
    if result.exit_code != 0 {
        STATUS_UNKNOWN
    } else if result.stdout.is_empty() {
        STATUS_CLEAN
    } else {
        STATUS_DIRTY
    }
}
