//! Revision extraction orchestration
//!
//! Walks up to the repository root, locates the binary, runs the log and
//! status queries and assembles the property set. Failures here are mostly
//! recoverable: they accumulate into a warning string while the build goes
//! on without revision artifacts.

use std::path::{Path, PathBuf};

use crate::core::properties::{RevisionProperties, STATUS_UNKNOWN};

use super::error::GitError;
use super::locator;
use super::parser;
use super::runner::{self, GitQueryResult, LOG_ARGS, STATUS_ARGS};

/// Outcome of one extraction attempt. `properties` is `None` when no
/// repository or binary was found or the log query produced nothing usable;
/// `errors` carries whatever went wrong along the way.
#[derive(Debug, Default)]
pub struct Extraction {
    pub properties: Option<RevisionProperties>,
    pub errors: String,
}

impl Extraction {
    fn append_error(&mut self, message: &str) {
        if !self.errors.is_empty() {
            self.errors.push('\n');
        }
        self.errors.push_str(message);
    }
}

/// Extracts revision properties from the checkout containing a start path.
pub struct RevisionSource {
    preferred_binary_dirs: Vec<PathBuf>,
}

impl RevisionSource {
    pub fn new(preferred_binary_dirs: Vec<PathBuf>) -> Self {
        Self {
            preferred_binary_dirs,
        }
    }

    /// Nearest ancestor of `start` (inclusive) containing a `.git` entry.
    pub fn find_repository_root(start: &Path) -> Option<PathBuf> {
        let mut dir = if start.is_dir() {
            Some(start)
        } else {
            start.parent()
        };
        while let Some(d) = dir {
            if d.join(".git").exists() {
                return Some(d.to_path_buf());
            }
            dir = d.parent();
        }
        None
    }

    pub fn extract(&self, start: &Path) -> Extraction {
        let mut out = Extraction::default();

        let Some(root) = Self::find_repository_root(start) else {
            log::debug!("{}", GitError::RepositoryNotFound {
                start: start.to_path_buf()
            });
            return out;
        };
        let Some(binary) = locator::find_git_binary(&self.preferred_binary_dirs) else {
            let searched = locator::search_path(&self.preferred_binary_dirs)
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(",");
            out.append_error(&GitError::BinaryNotFound { searched }.to_string());
            return out;
        };

        let status = self.repo_status(&binary, &root, &mut out);
        let Some(log_output) = self.log_output(&binary, &root, &mut out) else {
            return out;
        };
        if log_output.trim().is_empty() {
            return out;
        }
        match parser::parse_revision(&log_output, status) {
            Ok(props) => out.properties = Some(props),
            Err(err) => out.append_error(&err.to_string()),
        }
        out
    }

    /// Status degrades to `unknown` on any failure; the run continues.
    fn repo_status(&self, binary: &Path, root: &Path, out: &mut Extraction) -> &'static str {
        match runner::run_status_query(binary, root) {
            Ok(result) => {
                if result.exit_code != 0 {
                    out.append_error(&command_failure(binary, STATUS_ARGS, &result));
                }
                parser::interpret_status(&result)
            }
            Err(err) => {
                out.append_error(&err.to_string());
                STATUS_UNKNOWN
            }
        }
    }

    /// Log output, or `None` when the query failed; without it no properties
    /// are produced at all.
    fn log_output(&self, binary: &Path, root: &Path, out: &mut Extraction) -> Option<String> {
        match runner::run_log_query(binary, root) {
            Ok(result) => {
                if result.exit_code != 0 {
                    out.append_error(&command_failure(binary, LOG_ARGS, &result));
                    return None;
                }
                Some(result.stdout_text())
            }
            Err(err) => {
                out.append_error(&err.to_string());
                None
            }
        }
    }
}

fn command_failure(binary: &Path, args: &[&str], result: &GitQueryResult) -> String {
    GitError::CommandFailed {
        command: runner::command_line(binary, args),
        code: result.exit_code,
        stderr: result.stderr_text(),
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_repository_root_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("project");
        let nested = root.join("src").join("deep");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::create_dir(root.join(".git")).unwrap();

        assert_eq!(
            RevisionSource::find_repository_root(&nested),
            Some(root.clone())
        );
        assert_eq!(RevisionSource::find_repository_root(&root), Some(root));
    }

    #[test]
    fn test_find_repository_root_none_outside_checkout() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(RevisionSource::find_repository_root(dir.path()), None);
    }

    #[test]
    fn test_extract_without_repository_yields_no_properties() {
        let dir = tempfile::tempdir().unwrap();
        let extraction = RevisionSource::new(Vec::new()).extract(dir.path());
        assert!(extraction.properties.is_none());
        assert!(extraction.errors.is_empty());
    }
}
