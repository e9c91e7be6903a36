//! Per-file dispatch
//!
//! Every error is caught here and recorded against the file, so one broken
//! script never keeps the rest of the folder from installing.

use std::path::Path;

use crate::domain::{Action, DiscoveredFile, InstallOutcome, PlannedAction};
use crate::error::Result;
use crate::installer::{self, ArchiveInstall};
use crate::layout;

/// How a recognized file ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileResult {
    Installed,
    Conflict,
    Ignored,
}

/// Where a discovered file would go, or `None` if it is ignored
pub fn plan_file(file: &DiscoveredFile, primary: &Path) -> Option<PlannedAction> {
    let action = installer::classify(&file.extension);
    let destination = action.destination(primary)?;
    Some(PlannedAction {
        source: file.absolute_path.clone(),
        action,
        destination,
    })
}

/// Check a planned action without writing anything
///
/// Archives are opened so unreadable or unsafe ones and internal collisions
/// show up in a dry run. Other actions always pass.
pub fn preview_planned(planned: &PlannedAction, primary: &Path) -> Result<FileResult> {
    match planned.action {
        Action::ArchiveInstall => {
            let manifest = installer::read_manifest(&planned.source)?;
            match manifest.first_protected(&layout::internal_dir(primary)) {
                Some(_) => Ok(FileResult::Conflict),
                None => Ok(FileResult::Installed),
            }
        }
        Action::Ignore => Ok(FileResult::Ignored),
        _ => Ok(FileResult::Installed),
    }
}

/// Run the installer for one planned action
pub fn install_planned(planned: &PlannedAction, primary: &Path) -> Result<FileResult> {
    match planned.action {
        Action::ArchiveInstall => {
            match installer::install_archive(&planned.source, primary, &planned.destination)? {
                ArchiveInstall::Installed { .. } => Ok(FileResult::Installed),
                ArchiveInstall::SkippedConflict { .. } => Ok(FileResult::Conflict),
            }
        }
        Action::CopyToIndicatorFolder(_)
        | Action::CopyToIncludeFolder(_)
        | Action::CopyToExternalPlatformFolder(_) => {
            installer::copy_into(&planned.source, &planned.destination)?;
            Ok(FileResult::Installed)
        }
        Action::ConfigMerge => {
            installer::merge_config(&planned.source, &planned.destination)?;
            Ok(FileResult::Installed)
        }
        Action::Ignore => Ok(FileResult::Ignored),
    }
}

/// Classify, install and record one file in `outcome`
pub fn install_file(file: &DiscoveredFile, primary: &Path, outcome: &mut InstallOutcome) {
    let Some(planned) = plan_file(file, primary) else {
        tracing::debug!("ignoring {}", file.absolute_path.display());
        outcome.record_ignored();
        return;
    };

    tracing::debug!(
        "{} {} -> {}",
        planned.action,
        planned.source.display(),
        planned.destination.display()
    );

    match install_planned(&planned, primary) {
        Ok(FileResult::Installed) => outcome.record_success(),
        Ok(FileResult::Conflict) => outcome.record_conflict(&planned.source),
        Ok(FileResult::Ignored) => outcome.record_ignored(),
        Err(err) => {
            tracing::warn!("failed to install {}: {err}", planned.source.display());
            outcome.record_error(&planned.source, &err);
        }
    }
}
