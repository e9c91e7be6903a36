//! Text summaries of a run
//!
//! One summary per run, never one message per file.

use std::fmt::Write;

use console::Style;
use miette::Diagnostic;

use crate::domain::{InstallOutcome, InstallPlan, OutcomeStatus, RunResult};
use crate::error::InstallerError;

/// Summary of a run result, as shown at the end of `install`
pub fn format_outcome(result: &RunResult) -> String {
    match result {
        RunResult::NothingToInstall { source } => format!(
            "{} No .sxp scripts found in {}, please select the folder with the downloaded scripts.",
            Style::new().bold().yellow().apply_to("Empty scripts:"),
            source.display()
        ),
        RunResult::Installed(outcome) => format_installed(outcome),
        RunResult::Planned(plan) => format_plan(plan),
    }
}

fn format_installed(outcome: &InstallOutcome) -> String {
    let mut out = String::new();
    let heading = match outcome.status() {
        OutcomeStatus::Success => Style::new().bold().green().apply_to("Installation success"),
        OutcomeStatus::PartialSuccess => {
            Style::new().bold().yellow().apply_to("Installation finished")
        }
    };
    let _ = writeln!(out, "{heading}");
    let _ = writeln!(
        out,
        "  Installed {} of {} files ({} ignored)",
        outcome.succeeded, outcome.discovered, outcome.ignored
    );

    if let Some(sync) = &outcome.sync {
        let _ = writeln!(
            out,
            "  Synced {} files into {}",
            sync.files_copied,
            sync.target.display()
        );
    }

    if !outcome.skipped_conflicts.is_empty() {
        let _ = writeln!(
            out,
            "\n{}",
            Style::new()
                .bold()
                .apply_to("These scripts were not installed because they already exist in SQX:")
        );
        for path in &outcome.skipped_conflicts {
            let _ = writeln!(out, "  {}", path.display());
        }
    }

    if !outcome.errors.is_empty() {
        let _ = writeln!(
            out,
            "\n{}",
            Style::new().bold().red().apply_to("These files failed to install:")
        );
        for error in &outcome.errors {
            let _ = writeln!(out, "  {}: {}", error.path.display(), error.reason);
        }
    }

    out.trim_end().to_string()
}

/// Planned actions of a dry run
pub fn format_plan(plan: &InstallPlan) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}",
        Style::new().bold().apply_to("Dry run, nothing was installed:")
    );
    for planned in &plan.actions {
        let _ = writeln!(
            out,
            "  {} {} -> {}",
            Style::new().cyan().apply_to(planned.action),
            planned.source.display(),
            planned.destination.display()
        );
    }
    let _ = writeln!(out, "  {} ignored", plan.ignored);
    for path in &plan.skipped_conflicts {
        let _ = writeln!(
            out,
            "  {} {} already exists in SQX",
            Style::new().yellow().apply_to("skip"),
            path.display()
        );
    }
    for error in &plan.errors {
        let _ = writeln!(
            out,
            "  {} {}: {}",
            Style::new().red().apply_to("fail"),
            error.path.display(),
            error.reason
        );
    }
    if let Some(target) = &plan.sync_target {
        let _ = writeln!(out, "  MT5 indicators would be synced into {}", target.display());
    }
    out.trim_end().to_string()
}

/// Error line plus its help text
pub fn format_error(err: &InstallerError) -> String {
    let mut out = format!("{} {err}", Style::new().bold().red().apply_to("Error:"));
    if let Some(help) = err.help() {
        let _ = write!(out, "\n  {} {help}", Style::new().bold().apply_to("help:"));
    }
    out
}
