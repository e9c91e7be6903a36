//! Results returned to the presentation shell

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::Action;
use crate::error::InstallerError;

/// A file that failed to install, with the reason shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileError {
    pub path: PathBuf,
    pub reason: String,
}

impl FileError {
    pub fn new(path: impl Into<PathBuf>, err: &InstallerError) -> Self {
        Self {
            path: path.into(),
            reason: err.to_string(),
        }
    }
}

/// What the MT5 sync copied
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncSummary {
    pub target: PathBuf,
    pub files_copied: usize,
}

/// Tri-state summary the shell turns into a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeStatus {
    /// Every recognized file was installed
    Success,
    /// Some archives were skipped or some files failed
    PartialSuccess,
}

impl fmt::Display for OutcomeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutcomeStatus::Success => write!(f, "success"),
            OutcomeStatus::PartialSuccess => write!(f, "partial success"),
        }
    }
}

/// Aggregate result of one installation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InstallOutcome {
    /// Regular files found under the scripts folder, recognized or not
    pub discovered: usize,
    /// Files installed without error
    pub succeeded: usize,
    /// Files with an unrecognized extension
    pub ignored: usize,
    /// Archives refused because they would overwrite internal content
    pub skipped_conflicts: Vec<PathBuf>,
    /// Per-file failures, in discovery order
    pub errors: Vec<FileError>,
    /// Set when the MT5 sync ran and succeeded
    pub sync: Option<SyncSummary>,
}

impl InstallOutcome {
    pub fn status(&self) -> OutcomeStatus {
        if self.skipped_conflicts.is_empty() && self.errors.is_empty() {
            OutcomeStatus::Success
        } else {
            OutcomeStatus::PartialSuccess
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub(crate) fn record_success(&mut self) {
        self.succeeded += 1;
    }

    pub(crate) fn record_ignored(&mut self) {
        self.ignored += 1;
    }

    pub(crate) fn record_conflict(&mut self, path: &Path) {
        self.skipped_conflicts.push(path.to_path_buf());
    }

    pub(crate) fn record_error(&mut self, path: &Path, err: &InstallerError) {
        self.errors.push(FileError::new(path, err));
    }
}

/// One recognized file and where it would go
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedAction {
    pub source: PathBuf,
    pub action: Action,
    pub destination: PathBuf,
}

/// What an installation run would do, computed without touching disk
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InstallPlan {
    pub actions: Vec<PlannedAction>,
    pub ignored: usize,
    /// Archives that would be refused because they ship internal content
    pub skipped_conflicts: Vec<PathBuf>,
    /// Archives that could not be read
    pub errors: Vec<FileError>,
    /// MT5 folder the custom indicators would be synced into
    pub sync_target: Option<PathBuf>,
}

impl InstallPlan {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Everything a run can return short of a validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RunResult {
    /// The scripts folder holds no `.sxp` archive, so the user picked the wrong folder
    NothingToInstall { source: PathBuf },
    Installed(InstallOutcome),
    Planned(InstallPlan),
}
