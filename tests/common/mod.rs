//! Common test utilities
//!
//! Shared fixtures for the integration suite: scratch git repositories
//! built with the real git binary.

use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// True when a usable git binary can be located.
pub fn git_available() -> bool {
    revision_info::git::locator::find_git_binary(&[]).is_some()
}

/// Create a repository with a single commit of one file.
pub fn create_test_repository() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let repo_path = temp_dir.path();

    run_git(repo_path, &["init"]);
    run_git(repo_path, &["config", "user.name", "Test User"]);
    run_git(repo_path, &["config", "user.email", "test@example.com"]);
    run_git(repo_path, &["config", "commit.gpgsign", "false"]);

    std::fs::write(repo_path.join("file1.txt"), "initial content").expect("Failed to write file");
    run_git(repo_path, &["add", "."]);
    run_git(repo_path, &["commit", "-m", "Initial commit"]);

    temp_dir
}

/// Make the working tree dirty without committing.
pub fn dirty_working_tree(repo_path: &Path) {
    std::fs::write(repo_path.join("file1.txt"), "modified content")
        .expect("Failed to modify file");
}

pub fn run_git(repo_path: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}
