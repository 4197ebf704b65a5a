//! Version-control backend seam.
//!
//! The bootstrap logic talks to version control only through
//! [`VersionControlBackend`], so it can run against real git
//! ([`GitCliBackend`]) or an in-memory fake in tests.

mod git_cli;

#[cfg(test)]
pub(crate) mod fake;

pub use git_cli::GitCliBackend;

use crate::error::Result;

/// Outcome of reading one path from a ref's snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileLookup {
    /// The path exists at the ref; these are its exact bytes.
    Found(Vec<u8>),
    /// The ref resolved but has no file at this path.
    NotFound,
    /// The lookup itself failed (unresolvable ref, git error).
    Failed(String),
}

/// The three version-control operations a bootstrap run needs.
///
/// All calls are blocking and are made one at a time.
pub trait VersionControlBackend {
    /// Bring the local view of the remote history up to date.
    ///
    /// Errors are [`DevBranchError::SyncError`](crate::error::DevBranchError::SyncError).
    fn synchronize_remote(&self) -> Result<()>;

    /// Create `name` at `base_ref` and switch the working tree to it.
    ///
    /// Must not leave a half-created branch behind on failure. Errors are
    /// [`DevBranchError::BranchError`](crate::error::DevBranchError::BranchError).
    fn create_branch(&self, name: &str, base_ref: &str) -> Result<()>;

    /// Read the content of `path` as it exists at `git_ref`.
    fn read_file_at_ref(&self, git_ref: &str, path: &str) -> FileLookup;
}
