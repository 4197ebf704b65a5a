//! Git command runner for devbranch.
//!
//! Provides a safe wrapper around git commands with captured stdout/stderr
//! and structured error handling. All git operations should go through this module.

use crate::error::{DevBranchError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Result of a successful git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    /// Create a new GitOutput from raw output bytes.
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }

    /// Returns stdout lines as a vector.
    pub fn lines(&self) -> Vec<&str> {
        if self.stdout.is_empty() {
            Vec::new()
        } else {
            self.stdout.lines().collect()
        }
    }
}

/// Run a git command with the specified working directory.
///
/// # Returns
///
/// * `Ok(GitOutput)` - On successful execution (exit code 0)
/// * `Err(DevBranchError::GitError)` - On non-zero exit code
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let output = spawn_git(cwd.as_ref(), args)?;
    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        Ok(git_output)
    } else {
        Err(failure(args, &output, &git_output))
    }
}

/// Run a git command and return its stdout untouched.
///
/// Used when stdout is file content: no UTF-8 decoding, no trimming.
pub fn run_git_bytes<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<Vec<u8>> {
    let output = spawn_git(cwd.as_ref(), args)?;

    if output.status.success() {
        Ok(output.stdout)
    } else {
        let git_output = GitOutput::from_output(&output);
        Err(failure(args, &output, &git_output))
    }
}

/// Run a git command and report only whether it exited successfully.
///
/// Suitable for checks like `rev-parse --verify` or `cat-file -e` where a
/// non-zero exit is an answer rather than an error. Spawn failures still error.
pub fn git_succeeds<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<bool> {
    let output = spawn_git(cwd.as_ref(), args)?;
    Ok(output.status.success())
}

fn spawn_git(cwd: &Path, args: &[&str]) -> Result<Output> {
    Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| {
            DevBranchError::GitError(format!(
                "failed to execute git {}: {}",
                args.first().unwrap_or(&""),
                e
            ))
        })
}

fn failure(args: &[&str], output: &Output, git_output: &GitOutput) -> DevBranchError {
    let exit_code = output.status.code().unwrap_or(-1);
    let error_msg = if git_output.stderr.is_empty() {
        &git_output.stdout
    } else {
        &git_output.stderr
    };

    DevBranchError::GitError(format!(
        "git {} failed (exit code {}): {}",
        args.first().unwrap_or(&""),
        exit_code,
        error_msg
    ))
}

/// Get the repository root directory using `git rev-parse --show-toplevel`.
///
/// Works from any directory inside the repository, including linked worktrees.
///
/// # Returns
///
/// * `Ok(PathBuf)` - The absolute path to the repository root
/// * `Err(DevBranchError::UserError)` - If not inside a git repository (exit code 1)
pub fn get_repo_root<P: AsRef<Path>>(cwd: P) -> Result<PathBuf> {
    let output = Command::new("git")
        .current_dir(cwd.as_ref())
        .args(["rev-parse", "--show-toplevel"])
        .output()
        .map_err(|e| {
            DevBranchError::UserError(format!("failed to execute git: {} (is git installed?)", e))
        })?;

    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        Ok(PathBuf::from(&git_output.stdout))
    } else {
        // "not a git repository" is a clean user error (exit 1), not a git error (exit 3)
        Err(DevBranchError::UserError(
            "not inside a git repository. Run this command from within a git repository."
                .to_string(),
        ))
    }
}

/// Resolve a path inside the git directory (e.g. `info/exclude`).
///
/// Delegates to `git rev-parse --git-path` so linked worktrees and
/// `$GIT_DIR` overrides resolve to the right location. The result is
/// absolute.
pub fn git_path<P: AsRef<Path>>(repo_root: P, relative: &str) -> Result<PathBuf> {
    let repo_root = repo_root.as_ref();
    let output = run_git(repo_root, &["rev-parse", "--git-path", relative])?;
    let path = PathBuf::from(&output.stdout);

    if path.is_absolute() {
        Ok(path)
    } else {
        Ok(repo_root.join(path))
    }
}

/// Get the current branch name, or `None` when HEAD is detached.
pub fn current_branch<P: AsRef<Path>>(cwd: P) -> Result<Option<String>> {
    let output = run_git(cwd, &["rev-parse", "--abbrev-ref", "HEAD"])?;
    if output.stdout == "HEAD" {
        Ok(None)
    } else {
        Ok(Some(output.stdout))
    }
}
