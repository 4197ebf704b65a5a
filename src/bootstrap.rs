//! The bootstrap run: create the feature branch, then bring over each dev file
//! and make sure git ignores it.
//!
//! A run is strictly sequential. Branch creation happens once, up front, and a
//! failure there aborts before any file or ledger change. After that, every
//! declared path gets a materialize step followed by a ledger step. The ledger
//! step runs even when the file was skipped, so a path listed as a dev file is
//! always excluded.

use crate::backend::VersionControlBackend;
use crate::error::Result;
use crate::ledger::{ExclusionLedger, LedgerUpdate};
use crate::materialize::{Materialization, materialize};
use crate::resolver::{BranchRefs, create_feature_branch};
use serde::Serialize;
use std::path::PathBuf;

/// Per-path outcome of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub path: String,
    pub materialization: Materialization,
    pub ledger: LedgerUpdate,
}

/// Summary of a completed run, one file entry per declared path in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BootstrapReport {
    pub feature_branch: String,
    pub refs: BranchRefs,
    pub files: Vec<FileReport>,
}

impl BootstrapReport {
    pub fn copied(&self) -> usize {
        self.files
            .iter()
            .filter(|f| f.materialization.is_copied())
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.files.len() - self.copied()
    }

    pub fn ledger_appended(&self) -> usize {
        self.files
            .iter()
            .filter(|f| f.ledger == LedgerUpdate::Appended)
            .count()
    }
}

/// Everything a run needs, fixed at construction.
pub struct Bootstrap<B: VersionControlBackend> {
    backend: B,
    refs: BranchRefs,
    dev_files: Vec<String>,
    repo_root: PathBuf,
    ledger: ExclusionLedger,
}

impl<B: VersionControlBackend> Bootstrap<B> {
    pub fn new(
        backend: B,
        refs: BranchRefs,
        dev_files: Vec<String>,
        repo_root: impl Into<PathBuf>,
        ledger: ExclusionLedger,
    ) -> Self {
        Self {
            backend,
            refs,
            dev_files,
            repo_root: repo_root.into(),
            ledger,
        }
    }

    /// Create `feature` and bring over the dev files.
    ///
    /// # Returns
    ///
    /// * `Ok(BootstrapReport)` - Branch created and every path processed
    /// * `Err(SyncError | BranchError | UserError)` - Nothing was changed
    /// * `Err(MaterializeError | LedgerError)` - Stopped at that path; earlier
    ///   paths keep their written files and ledger entries
    pub fn run(&mut self, feature: &str) -> Result<BootstrapReport> {
        create_feature_branch(&self.backend, &self.refs, feature)?;

        let mut files = Vec::with_capacity(self.dev_files.len());
        for path in &self.dev_files {
            let materialization =
                materialize(&self.backend, &self.repo_root, &self.refs.dev, path)?;
            let ledger = self.ledger.ensure(path)?;

            tracing::info!(
                "{}: {}, ledger {}",
                path,
                match &materialization {
                    Materialization::Copied { .. } => "copied",
                    Materialization::Skipped { .. } => "skipped",
                },
                match ledger {
                    LedgerUpdate::Appended => "appended",
                    LedgerUpdate::Unchanged => "unchanged",
                }
            );

            files.push(FileReport {
                path: path.clone(),
                materialization,
                ledger,
            });
        }

        Ok(BootstrapReport {
            feature_branch: feature.to_string(),
            refs: self.refs.clone(),
            files,
        })
    }

    #[cfg(test)]
    pub(crate) fn backend(&self) -> &B {
        &self.backend
    }
}
