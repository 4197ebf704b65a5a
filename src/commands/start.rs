//! Implementation of `devbranch <BRANCH>`.

use crate::backend::GitCliBackend;
use crate::bootstrap::{Bootstrap, BootstrapReport};
use crate::cli::Cli;
use crate::config::Config;
use crate::context::RepoContext;
use crate::error::{DevBranchError, Result};
use crate::ledger::{ExclusionLedger, LedgerUpdate};
use crate::materialize::Materialization;
use crate::resolver::{BranchRefs, validate_feature_name};

/// Resolve the repository from the current directory and run the bootstrap.
pub(super) fn cmd_start(cli: &Cli) -> Result<BootstrapReport> {
    validate_feature_name(&cli.branch)?;

    let ctx = RepoContext::resolve()?;
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(&ctx.config_path)?,
    };

    let refs = BranchRefs::from_config(&config);
    tracing::debug!(
        "base {}, dev {}, {} dev file(s)",
        refs.main,
        refs.dev,
        config.dev_files.len()
    );

    let mut bootstrap = Bootstrap::new(
        GitCliBackend::new(&ctx.repo_root, &config.remote),
        refs,
        config.dev_files,
        &ctx.repo_root,
        ExclusionLedger::new(&ctx.ledger_path),
    );

    bootstrap.run(&cli.branch)
}

pub(super) fn print_summary(report: &BootstrapReport) {
    println!(
        "Created branch '{}' from {}.",
        report.feature_branch, report.refs.main
    );
    println!();

    if report.files.is_empty() {
        println!("No dev files configured.");
        return;
    }

    println!("Dev files from {}:", report.refs.dev);
    for file in &report.files {
        let status = match &file.materialization {
            Materialization::Copied { bytes } => format!("copied ({} bytes)", bytes),
            Materialization::Skipped { reason } => format!("skipped: {}", reason),
        };
        let ledger = match file.ledger {
            LedgerUpdate::Appended => "now excluded",
            LedgerUpdate::Unchanged => "already excluded",
        };
        println!("  {:<32} {}, {}", file.path, status, ledger);
    }
    println!();
    println!(
        "{} copied, {} skipped, {} new exclusion(s).",
        report.copied(),
        report.skipped(),
        report.ledger_appended()
    );
}

pub(super) fn print_json(report: &BootstrapReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| DevBranchError::UserError(format!("failed to serialize report: {}", e)))?;
    println!("{}", json);
    Ok(())
}
