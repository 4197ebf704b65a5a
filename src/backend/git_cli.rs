//! [`VersionControlBackend`] backed by the `git` command line.

use super::{FileLookup, VersionControlBackend};
use crate::error::{DevBranchError, Result};
use crate::git::{git_succeeds, run_git, run_git_bytes};
use std::path::PathBuf;

/// Runs git in `repo_root`, fetching from `remote`.
#[derive(Debug, Clone)]
pub struct GitCliBackend {
    repo_root: PathBuf,
    remote: String,
}

impl GitCliBackend {
    pub fn new(repo_root: impl Into<PathBuf>, remote: impl Into<String>) -> Self {
        Self {
            repo_root: repo_root.into(),
            remote: remote.into(),
        }
    }
}

impl VersionControlBackend for GitCliBackend {
    fn synchronize_remote(&self) -> Result<()> {
        let remote = self.remote.as_str();

        // A missing remote gets its own message; fetch's is cryptic
        let remotes = run_git(&self.repo_root, &["remote"])
            .map_err(|e| DevBranchError::SyncError(e.to_string()))?;
        if !remotes.lines().contains(&remote) {
            return Err(DevBranchError::SyncError(format!(
                "remote '{}' does not exist.\n\n\
                 To fix this, either:\n\
                 1. Set a different remote in .devbranch.yaml (remote: <name>)\n\
                 2. Add the remote: git remote add {} <url>",
                remote, remote
            )));
        }

        run_git(&self.repo_root, &["fetch", remote]).map_err(|e| {
            DevBranchError::SyncError(format!(
                "failed to fetch from '{}': {}\n\n\
                 Make sure the remote is reachable, then run the command again.",
                remote, e
            ))
        })?;

        Ok(())
    }

    fn create_branch(&self, name: &str, base_ref: &str) -> Result<()> {
        // checkout -b either creates and switches, or changes nothing
        run_git(
            &self.repo_root,
            &["checkout", "--no-track", "-b", name, base_ref],
        )
        .map_err(|e| {
            DevBranchError::BranchError(format!(
                "failed to create branch '{}' from '{}': {}",
                name, base_ref, e
            ))
        })?;

        Ok(())
    }

    fn read_file_at_ref(&self, git_ref: &str, path: &str) -> FileLookup {
        let commit = format!("{}^{{commit}}", git_ref);
        match git_succeeds(&self.repo_root, &["rev-parse", "--verify", "--quiet", &commit]) {
            Ok(true) => {}
            Ok(false) => return FileLookup::Failed(format!("cannot resolve ref '{}'", git_ref)),
            Err(e) => return FileLookup::Failed(e.to_string()),
        }

        let object = format!("{}:{}", git_ref, path);
        match git_succeeds(&self.repo_root, &["cat-file", "-e", &object]) {
            Ok(true) => {}
            Ok(false) => return FileLookup::NotFound,
            Err(e) => return FileLookup::Failed(e.to_string()),
        }

        match run_git_bytes(&self.repo_root, &["cat-file", "blob", &object]) {
            Ok(bytes) => FileLookup::Found(bytes),
            Err(e) => FileLookup::Failed(e.to_string()),
        }
    }
}
