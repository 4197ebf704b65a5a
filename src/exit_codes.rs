//! Exit code constants for the devbranch CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, not a repository, invalid config)
//! - 3: Git operation failure (fetch, branch creation)
//! - 4: Working tree or exclusion ledger write failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid state, or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// Git operation failure: remote synchronization or branch creation.
pub const GIT_FAILURE: i32 = 3;

/// Local write failure: a materialized file or the exclusion ledger.
pub const WRITE_FAILURE: i32 = 4;
