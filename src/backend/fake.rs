//! In-memory [`VersionControlBackend`] for tests.

use super::{FileLookup, VersionControlBackend};
use crate::error::{DevBranchError, Result};
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Default)]
pub(crate) struct FakeBackend {
    /// Existing refs; creating a branch adds to this set.
    refs: RefCell<BTreeSet<String>>,
    /// File content keyed by (ref, path).
    files: BTreeMap<(String, String), Vec<u8>>,
    /// Refs whose lookups fail outright.
    broken_refs: BTreeSet<String>,
    fail_sync: bool,
    calls: RefCell<Vec<String>>,
}

impl FakeBackend {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_ref(self, name: &str) -> Self {
        self.refs.borrow_mut().insert(name.to_string());
        self
    }

    pub(crate) fn with_file(mut self, git_ref: &str, path: &str, content: &[u8]) -> Self {
        self.refs.borrow_mut().insert(git_ref.to_string());
        self.files
            .insert((git_ref.to_string(), path.to_string()), content.to_vec());
        self
    }

    pub(crate) fn with_broken_ref(mut self, git_ref: &str) -> Self {
        self.broken_refs.insert(git_ref.to_string());
        self
    }

    pub(crate) fn failing_sync(mut self) -> Self {
        self.fail_sync = true;
        self
    }

    pub(crate) fn has_ref(&self, name: &str) -> bool {
        self.refs.borrow().contains(name)
    }

    /// Every backend call made so far, in order.
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl VersionControlBackend for FakeBackend {
    fn synchronize_remote(&self) -> Result<()> {
        self.calls.borrow_mut().push("sync".to_string());
        if self.fail_sync {
            return Err(DevBranchError::SyncError("remote unreachable".to_string()));
        }
        Ok(())
    }

    fn create_branch(&self, name: &str, base_ref: &str) -> Result<()> {
        self.calls
            .borrow_mut()
            .push(format!("create {} {}", name, base_ref));

        let mut refs = self.refs.borrow_mut();
        if !refs.contains(base_ref) {
            return Err(DevBranchError::BranchError(format!(
                "base '{}' does not exist",
                base_ref
            )));
        }
        if !refs.insert(name.to_string()) {
            return Err(DevBranchError::BranchError(format!(
                "a branch named '{}' already exists",
                name
            )));
        }
        Ok(())
    }

    fn read_file_at_ref(&self, git_ref: &str, path: &str) -> FileLookup {
        self.calls
            .borrow_mut()
            .push(format!("read {}:{}", git_ref, path));

        if self.broken_refs.contains(git_ref) || !self.refs.borrow().contains(git_ref) {
            return FileLookup::Failed(format!("cannot resolve ref '{}'", git_ref));
        }

        match self.files.get(&(git_ref.to_string(), path.to_string())) {
            Some(content) => FileLookup::Found(content.clone()),
            None => FileLookup::NotFound,
        }
    }
}
