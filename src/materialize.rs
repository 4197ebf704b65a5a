//! Copying dev files from the dev branch into the working tree.
//!
//! Each path is looked up independently. A path the dev branch does not have,
//! or a lookup that fails outright, is skipped with a warning and never stops
//! the run. Only a failure to write retrieved content is fatal.

use crate::backend::{FileLookup, VersionControlBackend};
use crate::error::Result;
use crate::fs::atomic_write;
use serde::Serialize;
use std::path::Path;

/// What happened to one dev file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Materialization {
    /// Content was written to the working tree, replacing whatever was there.
    Copied { bytes: usize },
    /// Nothing was written; any existing working-tree file is untouched.
    Skipped { reason: String },
}

impl Materialization {
    pub fn is_copied(&self) -> bool {
        matches!(self, Materialization::Copied { .. })
    }
}

/// Copy `path` as it exists at `dev_ref` to the same path under `repo_root`.
///
/// # Returns
///
/// * `Ok(Materialization::Copied)` - The file was written
/// * `Ok(Materialization::Skipped)` - The dev branch has no such file, or it could not be read
/// * `Err(DevBranchError::MaterializeError)` - Retrieved content could not be written
pub fn materialize<B: VersionControlBackend + ?Sized>(
    backend: &B,
    repo_root: &Path,
    dev_ref: &str,
    path: &str,
) -> Result<Materialization> {
    let content = match backend.read_file_at_ref(dev_ref, path) {
        FileLookup::Found(content) => content,
        FileLookup::NotFound => {
            tracing::warn!("{} not found on {}, skipping", path, dev_ref);
            return Ok(Materialization::Skipped {
                reason: format!("not found on {}", dev_ref),
            });
        }
        FileLookup::Failed(message) => {
            tracing::warn!("could not read {} from {}: {}", path, dev_ref, message);
            return Ok(Materialization::Skipped { reason: message });
        }
    };

    atomic_write(repo_root.join(path), &content)?;
    tracing::debug!("wrote {} ({} bytes)", path, content.len());

    Ok(Materialization::Copied {
        bytes: content.len(),
    })
}
