//! Main orchestrator for install operation
//! Coordinates validation, the file loop and the MT5 sync
//!
//! Runs are synchronous and not reentrant. Two runs against the same SQX folder
//! race on `customBlocks.xml`, so callers must serialize them (e.g. by disabling
//! the install trigger while a run is in flight).

use std::path::Path;

use crate::domain::{FileError, InstallOutcome, InstallPlan, InstallationRequest, RunResult};
use crate::error::Result;
use crate::installer::{discover_files, sync_to_secondary};
use crate::layout;
use crate::ui::ProgressReporter;
use crate::validation;

use super::execution::{FileResult, install_file, plan_file, preview_planned};

/// Options for installation
#[derive(Debug, Clone, Copy, Default)]
pub struct InstallOptions {
    /// Classify and report without touching disk
    pub dry_run: bool,
}

/// Main orchestrator for install operation
pub struct InstallOperation<'a> {
    request: &'a InstallationRequest,
    options: InstallOptions,
}

impl<'a> InstallOperation<'a> {
    pub fn new(request: &'a InstallationRequest, options: InstallOptions) -> Self {
        Self { request, options }
    }

    /// Gate the run on folder shapes
    ///
    /// Returns `Ok(false)` when the scripts folder has nothing to install, which is
    /// informational rather than an error.
    fn validate(&self) -> Result<bool> {
        let source = self.request.source();
        if !validation::source_has_installables(source) {
            tracing::info!("no .sxp scripts under {}", source.display());
            return Ok(false);
        }

        validation::check_primary_target(self.request.primary())?;
        if let Some(secondary) = self.request.secondary() {
            validation::check_secondary_target(secondary)?;
        }
        Ok(true)
    }

    fn plan(&self) -> InstallPlan {
        let primary = self.request.primary();
        let mut plan = InstallPlan {
            sync_target: self.request.secondary().map(layout::secondary_root),
            ..InstallPlan::default()
        };
        for file in discover_files(self.request.source()) {
            let Some(planned) = plan_file(&file, primary) else {
                plan.ignored += 1;
                continue;
            };
            match preview_planned(&planned, primary) {
                Ok(FileResult::Installed) => plan.actions.push(planned),
                Ok(FileResult::Conflict) => plan.skipped_conflicts.push(planned.source),
                Ok(FileResult::Ignored) => plan.ignored += 1,
                Err(err) => plan.errors.push(FileError::new(&planned.source, &err)),
            }
        }
        plan
    }

    fn install(&self, progress: &mut dyn ProgressReporter) -> InstallOutcome {
        let primary = self.request.primary();
        let files = discover_files(self.request.source());
        let mut outcome = InstallOutcome {
            discovered: files.len(),
            ..InstallOutcome::default()
        };
        tracing::info!(
            "installing {} files from {} into {}",
            files.len(),
            self.request.source().display(),
            primary.display()
        );

        progress.init_file_progress(files.len() as u64);
        for file in &files {
            progress.update_file(&file.absolute_path.display().to_string());
            install_file(file, primary, &mut outcome);
        }
        progress.finish_files();

        if let Some(secondary) = self.request.secondary() {
            self.sync(secondary, &mut outcome);
        }

        tracing::info!(
            "installed {} files, {} conflicts, {} errors",
            outcome.succeeded,
            outcome.skipped_conflicts.len(),
            outcome.errors.len()
        );
        outcome
    }

    fn sync(&self, secondary: &Path, outcome: &mut InstallOutcome) {
        match sync_to_secondary(self.request.primary(), secondary) {
            Ok(summary) => outcome.sync = Some(summary),
            Err(err) => {
                tracing::warn!("MT5 sync failed: {err}");
                outcome.record_error(secondary, &err);
            }
        }
    }

    /// Run the operation
    ///
    /// Validation failures abort before anything is written. Per-file failures and
    /// a failed sync are recorded in the returned outcome.
    pub fn execute(&self, progress: &mut dyn ProgressReporter) -> Result<RunResult> {
        if !self.validate()? {
            return Ok(RunResult::NothingToInstall {
                source: self.request.source().to_path_buf(),
            });
        }

        if self.options.dry_run {
            return Ok(RunResult::Planned(self.plan()));
        }

        Ok(RunResult::Installed(self.install(progress)))
    }
}

/// Install everything under the request's scripts folder
pub fn run(
    request: &InstallationRequest,
    progress: &mut dyn ProgressReporter,
) -> Result<RunResult> {
    InstallOperation::new(request, InstallOptions::default()).execute(progress)
}

/// Validate and classify without touching disk
pub fn plan(request: &InstallationRequest) -> Result<RunResult> {
    InstallOperation::new(request, InstallOptions { dry_run: true })
        .execute(&mut crate::ui::SilentProgressReporter)
}
