//! Repository context resolution for devbranch.
//!
//! Finds the repository root from any working directory and resolves the
//! locations devbranch reads and writes: the working tree root, the
//! exclusion ledger inside the git directory, and the optional config file.

use crate::config::DEFAULT_CONFIG_FILE;
use crate::error::{DevBranchError, Result};
use crate::git;
use std::env;
use std::path::{Path, PathBuf};

/// Location of the exclusion ledger relative to the git directory.
pub const LEDGER_GIT_PATH: &str = "info/exclude";

/// Resolved paths for a devbranch run. All paths are absolute.
#[derive(Debug, Clone)]
pub struct RepoContext {
    /// Root of the working tree dev files are written into.
    pub repo_root: PathBuf,

    /// The exclusion ledger (`$GIT_DIR/info/exclude`).
    pub ledger_path: PathBuf,

    /// Default config file location (`{repo_root}/.devbranch.yaml`).
    pub config_path: PathBuf,
}

impl RepoContext {
    /// Resolve the context from the current working directory.
    ///
    /// # Returns
    ///
    /// * `Ok(RepoContext)` - Successfully resolved context
    /// * `Err(DevBranchError::UserError)` - If not in a git repository (exit code 1)
    pub fn resolve() -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            DevBranchError::UserError(format!("failed to get current working directory: {}", e))
        })?;

        Self::resolve_from(&cwd)
    }

    /// Resolve the context from a specific directory.
    pub fn resolve_from<P: AsRef<Path>>(cwd: P) -> Result<Self> {
        let repo_root = git::get_repo_root(cwd)?;
        let ledger_path = git::git_path(&repo_root, LEDGER_GIT_PATH)?;
        let config_path = repo_root.join(DEFAULT_CONFIG_FILE);

        Ok(Self {
            repo_root,
            ledger_path,
            config_path,
        })
    }
}
