//! Discovered files and the actions they map to

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// A regular file found under the scripts folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFile {
    /// Absolute path to file
    pub absolute_path: PathBuf,

    /// Lowercase extension without the dot, empty when the file has none
    pub extension: String,
}

impl DiscoveredFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let absolute_path = path.into();
        let extension = normalized_extension(&absolute_path);
        Self {
            absolute_path,
            extension,
        }
    }
}

/// Lowercase extension of a path without the leading dot
pub fn normalized_extension(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default()
}

/// MetaTrader generation a source file targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetaTrader {
    Mt4,
    Mt5,
}

/// Non-MetaTrader platform with its own export format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExternalPlatform {
    TradeStation,
}

/// What the installer does with a discovered file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    ArchiveInstall,
    CopyToIndicatorFolder(MetaTrader),
    CopyToIncludeFolder(MetaTrader),
    CopyToExternalPlatformFolder(ExternalPlatform),
    ConfigMerge,
    Ignore,
}

impl fmt::Display for MetaTrader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetaTrader::Mt4 => write!(f, "MT4"),
            MetaTrader::Mt5 => write!(f, "MT5"),
        }
    }
}

impl fmt::Display for ExternalPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExternalPlatform::TradeStation => write!(f, "TradeStation"),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::ArchiveInstall => write!(f, "extract"),
            Action::CopyToIndicatorFolder(mt) => write!(f, "{mt} indicator"),
            Action::CopyToIncludeFolder(mt) => write!(f, "{mt} include"),
            Action::CopyToExternalPlatformFolder(p) => write!(f, "{p} export"),
            Action::ConfigMerge => write!(f, "merge"),
            Action::Ignore => write!(f, "ignore"),
        }
    }
}
