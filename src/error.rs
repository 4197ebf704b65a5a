//! Error types for the devbranch CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! A dev file missing from the dev branch is deliberately absent from this enum:
//! it is a per-file skip, not a failure of the run.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for devbranch operations.
#[derive(Error, Debug)]
pub enum DevBranchError {
    /// User provided invalid arguments or the repository is in an invalid state.
    #[error("{0}")]
    UserError(String),

    /// Fetching from the remote failed before any branch was created.
    #[error("Remote synchronization failed: {0}")]
    SyncError(String),

    /// The feature branch could not be created.
    #[error("Branch creation failed: {0}")]
    BranchError(String),

    /// Some other git command failed.
    #[error("Git operation failed: {0}")]
    GitError(String),

    /// A dev file was retrieved but could not be written to the working tree.
    #[error("Failed to write dev file: {0}")]
    MaterializeError(String),

    /// The exclusion ledger could not be read or appended to.
    #[error("Failed to update exclusion ledger: {0}")]
    LedgerError(String),
}

impl DevBranchError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            DevBranchError::UserError(_) => exit_codes::USER_ERROR,
            DevBranchError::SyncError(_) => exit_codes::GIT_FAILURE,
            DevBranchError::BranchError(_) => exit_codes::GIT_FAILURE,
            DevBranchError::GitError(_) => exit_codes::GIT_FAILURE,
            DevBranchError::MaterializeError(_) => exit_codes::WRITE_FAILURE,
            DevBranchError::LedgerError(_) => exit_codes::WRITE_FAILURE,
        }
    }
}

/// Result type alias for devbranch operations.
pub type Result<T> = std::result::Result<T, DevBranchError>;
