//! Installation request

use std::path::{Path, PathBuf};

/// The three folders one installation run works on
///
/// Built once from user input and never mutated while the run is in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallationRequest {
    source: PathBuf,
    primary: PathBuf,
    secondary: Option<PathBuf>,
}

impl InstallationRequest {
    /// Create a request. An empty secondary path means the MT5 sync is not requested.
    pub fn new(
        source: impl Into<PathBuf>,
        primary: impl Into<PathBuf>,
        secondary: Option<PathBuf>,
    ) -> Self {
        Self {
            source: source.into(),
            primary: primary.into(),
            secondary: secondary.filter(|p| !p.as_os_str().is_empty()),
        }
    }

    /// Folder with the downloaded scripts
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// StrategyQuant X installation folder
    pub fn primary(&self) -> &Path {
        &self.primary
    }

    /// MetaTrader 5 data folder, when the sync was requested
    pub fn secondary(&self) -> Option<&Path> {
        self.secondary.as_deref()
    }
}
