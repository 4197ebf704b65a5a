//! Branch reference resolution and feature branch creation.

use crate::backend::VersionControlBackend;
use crate::config::Config;
use crate::error::{DevBranchError, Result};
use serde::Serialize;

/// The read-only refs a run works from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BranchRefs {
    /// Base the feature branch starts from (e.g. `origin/main`).
    pub main: String,
    /// Source of dev file content (e.g. `origin/dev`).
    pub dev: String,
}

impl BranchRefs {
    /// Remote-tracking refs for the configured main and dev branches.
    ///
    /// Remote-tracking refs are what the fetch in
    /// [`create_feature_branch`] refreshes.
    pub fn from_config(config: &Config) -> Self {
        Self {
            main: format!("{}/{}", config.remote, config.main_branch),
            dev: format!("{}/{}", config.remote, config.dev_branch),
        }
    }
}

/// Check the user-supplied feature branch name before touching the repository.
///
/// Only emptiness is checked here; git's own ref-name rules apply when the
/// branch is created.
pub fn validate_feature_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(DevBranchError::UserError(
            "feature branch name must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Synchronize with the remote, then create and switch to `feature` at `refs.main`.
///
/// Nothing is created if synchronization fails.
pub fn create_feature_branch<B: VersionControlBackend + ?Sized>(
    backend: &B,
    refs: &BranchRefs,
    feature: &str,
) -> Result<()> {
    validate_feature_name(feature)?;

    tracing::info!("synchronizing with remote");
    backend.synchronize_remote().map_err(|e| match e {
        DevBranchError::SyncError(message) => DevBranchError::SyncError(format!(
            "{}\n\nBranch '{}' was not created.",
            message, feature
        )),
        other => other,
    })?;

    tracing::info!("creating branch '{}' from '{}'", feature, refs.main);
    backend.create_branch(feature, &refs.main)?;

    Ok(())
}
