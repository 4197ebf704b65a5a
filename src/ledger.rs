//! The exclusion ledger: `$GIT_DIR/info/exclude`.
//!
//! Git ignores the paths listed here for this clone only, which keeps
//! materialized dev files out of `git status` without touching any tracked
//! `.gitignore`. devbranch only ever appends, and only when the exact line is
//! not already present.

use crate::error::{DevBranchError, Result};
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Whether an entry had to be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LedgerUpdate {
    Appended,
    Unchanged,
}

/// Handle to one repository's exclusion ledger file.
///
/// Appends take `&mut self`, so a single handle serializes them.
#[derive(Debug)]
pub struct ExclusionLedger {
    path: PathBuf,
}

impl ExclusionLedger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current lines of the ledger. A missing file has no lines.
    ///
    /// Lines are split on `\n` only; a `\r` before it stays part of the line.
    pub fn entries(&self) -> Result<Vec<String>> {
        let content = self.read()?;
        Ok(split_lines(&content).map(str::to_string).collect())
    }

    /// Append `entry` as its own line unless an identical line already exists.
    ///
    /// Matching is exact: no trimming, no glob semantics. Creates the file
    /// (and its parent directory) if needed.
    pub fn ensure(&mut self, entry: &str) -> Result<LedgerUpdate> {
        let content = self.read()?;
        if split_lines(&content).any(|line| line == entry) {
            tracing::debug!("{} already in {}", entry, self.path.display());
            return Ok(LedgerUpdate::Unchanged);
        }

        let mut line = String::new();
        if !content.is_empty() && !content.ends_with('\n') {
            line.push('\n');
        }
        line.push_str(entry);
        line.push('\n');

        self.append(&line)?;
        tracing::debug!("added {} to {}", entry, self.path.display());

        Ok(LedgerUpdate::Appended)
    }

    fn read(&self) -> Result<String> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(DevBranchError::LedgerError(format!(
                "failed to read '{}': {}",
                self.path.display(),
                e
            ))),
        }
    }

    fn append(&self, text: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                DevBranchError::LedgerError(format!(
                    "failed to create directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                DevBranchError::LedgerError(format!(
                    "failed to open '{}': {}",
                    self.path.display(),
                    e
                ))
            })?;

        file.write_all(text.as_bytes()).map_err(|e| {
            DevBranchError::LedgerError(format!(
                "failed to append to '{}': {}",
                self.path.display(),
                e
            ))
        })
    }
}

/// Lines of ledger text. An empty file has none; a final `\n` does not start
/// another line.
fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    let body = content.strip_suffix('\n').unwrap_or(content);
    (!content.is_empty())
        .then(|| body.split('\n'))
        .into_iter()
        .flatten()
}
