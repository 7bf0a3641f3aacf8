//! Git Error Types

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum GitError {
    #[error("Could not find git binary in {searched}")]
    BinaryNotFound { searched: String },

    #[error("No git repository found at or above {}", .start.display())]
    RepositoryNotFound { start: PathBuf },

    #[error("Timed out after {seconds} seconds waiting for '{command}'")]
    Timeout { command: String, seconds: u64 },

    #[error("Process '{command}' exited with code {code}. Error output:\n{stderr}")]
    CommandFailed {
        command: String,
        code: i32,
        stderr: String,
    },

    #[error("Could not match git output '{output}'")]
    UnmatchedOutput { output: String },

    #[error("IO error running git: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for git operations
pub type GitResult<T> = Result<T, GitError>;
