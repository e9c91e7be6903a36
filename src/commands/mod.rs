//! Command implementations for the sqx-installer CLI
//!
//! Commands return the process exit code; only failures to even start a
//! command come back as errors.

use std::path::Path;

use crate::cli::TargetArgs;
use crate::config::InstallerConfig;
use crate::domain::RunResult;
use crate::error::Result;

pub mod install;
pub mod validate;
pub mod version;

/// Nothing to install, or everything that could be installed was
pub const EXIT_OK: i32 = 0;
/// The run was refused before anything was written
pub const EXIT_FAILURE: i32 = 1;
/// At least one file failed to install
pub const EXIT_FILE_ERRORS: i32 = 2;

/// Exit code for a finished run
///
/// Archives skipped because of conflicts do not fail the run. A dry run exits
/// the way the real run would.
pub fn exit_code(result: &RunResult) -> i32 {
    match result {
        RunResult::Installed(outcome) if outcome.has_errors() => EXIT_FILE_ERRORS,
        RunResult::Planned(plan) if plan.has_errors() => EXIT_FILE_ERRORS,
        _ => EXIT_OK,
    }
}

/// Config file values with the command-line folders layered on top
fn resolve_config(config_file: Option<&Path>, targets: TargetArgs) -> Result<InstallerConfig> {
    let cwd = std::env::current_dir()?;
    let file = InstallerConfig::load(config_file, &cwd)?;
    Ok(file.merged_with(targets.into()))
}
