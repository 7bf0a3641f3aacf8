//! Locates an executable git binary
//!
//! Pure filesystem search: existence and permission checks only, nothing is
//! executed. Preferred directories are tried before the process search path,
//! deduplicated in insertion order.

use std::path::{Path, PathBuf};

pub const GIT_BINARY_NAME: &str = "git";

/// Find an executable git binary, or `None` if no candidate qualifies.
pub fn find_git_binary(preferred: &[PathBuf]) -> Option<PathBuf> {
    search_git_binary(&search_path(preferred))
}

/// Candidate directories: preferred first, then the entries of `PATH`,
/// deduplicated with insertion order preserved.
pub fn search_path(preferred: &[PathBuf]) -> Vec<PathBuf> {
    let mut result: Vec<PathBuf> = Vec::new();
    for dir in preferred.iter().cloned().chain(system_path()) {
        if !result.contains(&dir) {
            result.push(dir);
        }
    }
    result
}

fn system_path() -> Vec<PathBuf> {
    let mut result = Vec::new();
    if let Some(path) = std::env::var_os("PATH") {
        for dir in std::env::split_paths(&path) {
            if dir.is_dir() && !result.contains(&dir) {
                result.push(dir);
            }
        }
    }
    result
}

fn search_git_binary(dirs: &[PathBuf]) -> Option<PathBuf> {
    for dir in dirs {
        if !dir.is_dir() {
            continue;
        }
        let mut candidate = dir.join(GIT_BINARY_NAME);
        if !candidate.exists() {
            candidate = dir.join(format!("{}{}", GIT_BINARY_NAME, std::env::consts::EXE_SUFFIX));
        }
        if candidate.exists() && is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
