//! CLI argument parsing for devbranch.
//!
//! Uses clap derive macros for declarative argument definitions.
//! The run itself lives in the `commands` module.

use clap::Parser;
use std::path::PathBuf;

/// Start a feature branch from main and bring along your local-only dev files.
///
/// The dev files are read from the dev branch, written into the working tree,
/// and listed in .git/info/exclude so they never show up as changes.
#[derive(Parser, Debug)]
#[command(name = "devbranch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Name of the feature branch to create.
    pub branch: String,

    /// Config file to use instead of `.devbranch.yaml` at the repository root.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the run report as JSON instead of a summary.
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
