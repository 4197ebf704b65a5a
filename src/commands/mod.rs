//! Command implementations for devbranch.
//!
//! devbranch has a single command, so dispatch resolves the repository,
//! runs the bootstrap, and renders the result.

mod start;

use crate::cli::Cli;
use crate::error::Result;

/// Run the command described by `cli`.
pub fn dispatch(cli: Cli) -> Result<()> {
    let report = start::cmd_start(&cli)?;

    if cli.json {
        start::print_json(&report)
    } else {
        start::print_summary(&report);
        Ok(())
    }
}
