//! Task Error Types
//!
//! Only the fatal cases live here; recoverable failures accumulate as
//! warning text on the task outcome instead.

use std::path::PathBuf;

use crate::core::error_handling::ContextualError;

#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    /// Malformed configuration, caught before any git work begins
    #[error("{message}")]
    Configuration { message: String },

    /// Failed to create or write an output file
    #[error("Error creating file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TaskError {
    pub fn config(message: impl Into<String>) -> Self {
        TaskError::Configuration {
            message: message.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TaskError::Io {
            path: path.into(),
            source,
        }
    }
}

impl ContextualError for TaskError {
    fn is_user_actionable(&self) -> bool {
        match self {
            TaskError::Configuration { .. } => true, // user can fix the config
            TaskError::Io { .. } => false,           // system IO issues
        }
    }

    fn user_message(&self) -> Option<&str> {
        match self {
            TaskError::Configuration { message } => Some(message),
            _ => None,
        }
    }
}

/// Result type for task operations
pub type TaskResult<T> = Result<T, TaskError>;
