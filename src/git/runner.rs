//! Bounded git subprocess execution
//!
//! One subprocess at a time: spawn bound to the repository root, poll for
//! exit with a hard ceiling, capture both output streams with fixed caps so
//! pathological output cannot grow memory without bound.

use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

use super::error::{GitError, GitResult};

/// Hard ceiling on subprocess runtime. Past this the invocation fails; it is
/// not retried.
const WAIT_CEILING: Duration = Duration::from_secs(30);
/// Poll interval while waiting for exit.
const POLL_INTERVAL: Duration = Duration::from_millis(10);
/// Capture ceilings for the two output streams.
const STDOUT_CAP: u64 = 64 * 1024;
const STDERR_CAP: u64 = 16 * 1024;

pub const LOG_ARGS: &[&str] = &[
    "--no-pager",
    "log",
    "-1",
    "--format=format:%h %H %cd",
    "--date=iso",
    "--no-color",
    "--encoding=utf8",
];
pub const STATUS_ARGS: &[&str] = &["status", "--porcelain"];

const TIME_ZONE_ENV_VAR: &str = "TZ";
const UTC_TIME_ZONE: &str = "UTC";

/// Captured result of one git invocation. Transient: parsed, then discarded.
#[derive(Debug)]
pub struct GitQueryResult {
    pub exit_code: i32,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl GitQueryResult {
    pub fn stdout_text(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }

    pub fn stderr_text(&self) -> String {
        String::from_utf8_lossy(&self.stderr).into_owned()
    }
}

/// Run the log query. The time zone is forced to UTC so the date output is
/// independent of the host locale and TZ settings.
pub fn run_log_query(binary: &Path, repo_root: &Path) -> GitResult<GitQueryResult> {
    run_git(binary, repo_root, LOG_ARGS, true)
}

/// Run the porcelain status query.
pub fn run_status_query(binary: &Path, repo_root: &Path) -> GitResult<GitQueryResult> {
    run_git(binary, repo_root, STATUS_ARGS, false)
}

/// Human-readable command line, for error reporting.
pub fn command_line(binary: &Path, args: &[&str]) -> String {
    let mut parts = vec![binary.display().to_string()];
    parts.extend(args.iter().map(|s| s.to_string()));
    parts.join(" ")
}

fn run_git(
    binary: &Path,
    repo_root: &Path,
    args: &[&str],
    force_utc: bool,
) -> GitResult<GitQueryResult> {
    let mut command = Command::new(binary);
    command
        .args(args)
        .current_dir(repo_root)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    if force_utc {
        command.env(TIME_ZONE_ENV_VAR, UTC_TIME_ZONE);
    }
    let mut child = command.spawn()?;
    let exit_code = wait_for_exit(&mut child, &command_line(binary, args))?;
    let stdout = read_capped(child.stdout.take(), STDOUT_CAP)?;
    let stderr = read_capped(child.stderr.take(), STDERR_CAP)?;
    Ok(GitQueryResult {
        exit_code,
        stdout,
        stderr,
    })
}

/// Poll until the child exits, failing hard past the ceiling.
fn wait_for_exit(child: &mut Child, command: &str) -> GitResult<i32> {
    let deadline = Instant::now() + WAIT_CEILING;
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(status.code().unwrap_or(-1));
        }
        if Instant::now() >= deadline {
            let _ = child.kill();
            return Err(GitError::Timeout {
                command: command.to_string(),
                seconds: WAIT_CEILING.as_secs(),
            });
        }
        std::thread::sleep(POLL_INTERVAL);
    }
}

fn read_capped<R: Read>(stream: Option<R>, cap: u64) -> GitResult<Vec<u8>> {
    let mut buf = Vec::new();
    if let Some(stream) = stream {
        stream.take(cap).read_to_end(&mut buf)?;
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line_rendering() {
        let line = command_line(Path::new("/usr/bin/git"), STATUS_ARGS);
        assert_eq!(line, "/usr/bin/git status --porcelain");
    }

    #[test]
    fn test_spawn_failure_is_an_io_error() {
        let missing = Path::new("/definitely/not/a/binary");
        let err = run_status_query(missing, Path::new(".")).unwrap_err();
        assert!(matches!(err, GitError::Io(_)));
    }

    #[test]
    fn test_log_query_in_non_repository_exits_nonzero() {
        let Some(git) = crate::git::locator::find_git_binary(&[]) else {
            eprintln!("git binary not found, skipping");
            return;
        };
        let dir = tempfile::tempdir().unwrap();
        let result = run_log_query(&git, dir.path()).unwrap();
        assert_ne!(result.exit_code, 0);
        assert!(!result.stderr.is_empty());
    }
}
