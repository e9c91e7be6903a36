//! Install command implementation
//!
//! The installation process:
//! 1. Resolve the three folders from flags, environment and config file
//! 2. Validate the folders
//! 3. Install every discovered file, or only plan with `--dry-run`
//! 4. Sync the MT5 indicators when an MT5 folder was given
//! 5. Print one summary

use std::path::Path;

use console::Term;

use super::{EXIT_FAILURE, exit_code, resolve_config};
use crate::cli::InstallArgs;
use crate::config::InstallerConfig;
use crate::domain::{OutcomeStatus, RunResult};
use crate::error::Result;
use crate::operations::install::{InstallOperation, InstallOptions};
use crate::ui::{
    ConsoleReporter, InteractiveProgressReporter, JsonReporter, OutcomeReporter,
    ProgressReporter, SilentProgressReporter,
};

/// Run install command
pub fn run(config_file: Option<&Path>, args: InstallArgs) -> Result<i32> {
    let mut reporter: Box<dyn OutcomeReporter> = if args.json {
        Box::new(JsonReporter::stdout())
    } else {
        Box::new(ConsoleReporter::terminal())
    };

    let resolved =
        resolve_config(config_file, args.targets).and_then(InstallerConfig::into_request);
    let request = match resolved {
        Ok(request) => request,
        Err(err) => {
            reporter.report_error(&err);
            return Ok(EXIT_FAILURE);
        }
    };

    let interactive = !(args.json || args.quiet || args.dry_run) && Term::stderr().is_term();
    let mut progress: Box<dyn ProgressReporter> = if interactive {
        Box::new(InteractiveProgressReporter::new())
    } else {
        Box::new(SilentProgressReporter)
    };

    let options = InstallOptions {
        dry_run: args.dry_run,
    };
    match InstallOperation::new(&request, options).execute(progress.as_mut()) {
        Ok(result) => {
            if !(args.quiet && is_clean(&result)) {
                reporter.report(&result);
            }
            Ok(exit_code(&result))
        }
        Err(err) => {
            progress.abandon();
            reporter.report_error(&err);
            Ok(EXIT_FAILURE)
        }
    }
}

/// A run `--quiet` has nothing to say about
fn is_clean(result: &RunResult) -> bool {
    match result {
        RunResult::Installed(outcome) => outcome.status() == OutcomeStatus::Success,
        RunResult::NothingToInstall { .. } => false,
        RunResult::Planned(plan) => plan.skipped_conflicts.is_empty() && !plan.has_errors(),
    }
}
