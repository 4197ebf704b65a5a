//! devbranch: start a feature branch and bring along local-only dev files.
//!
//! A run fetches the remote, creates the feature branch from the main branch,
//! copies each configured dev file from the dev branch into the working tree,
//! and lists it in `.git/info/exclude` so it stays out of `git status`.

pub mod backend;
pub mod bootstrap;
pub mod cli;
mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod git;
pub mod ledger;
pub mod materialize;
pub mod resolver;

#[cfg(test)]
pub(crate) mod test_support;

pub use commands::dispatch;
