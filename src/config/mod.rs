//! Installer configuration (sqx-installer.yaml)
//!
//! The file remembers the three folders so they don't have to be typed on every
//! run. Values given on the command line or through the environment win over
//! the file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::InstallationRequest;
use crate::error::config::{not_found, parse_failed, read_failed};
use crate::error::validation::missing_path;
use crate::error::Result;

/// Default configuration file name, looked up in the current directory
pub const CONFIG_FILE: &str = "sqx-installer.yaml";

/// Folder paths, from a config file or from command-line arguments
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InstallerConfig {
    /// Folder with the downloaded scripts
    pub scripts: Option<PathBuf>,

    /// StrategyQuant X installation folder
    pub sqx: Option<PathBuf>,

    /// MetaTrader 5 data folder
    pub mt5: Option<PathBuf>,
}

impl InstallerConfig {
    /// Parse configuration from YAML; `origin` is only used in error messages
    pub fn from_yaml(yaml: &str, origin: &Path) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
            .map_err(|e| parse_failed(origin.display().to_string(), e.to_string()))
    }

    /// Load the configuration file
    ///
    /// With `explicit` set the file must exist. Otherwise [`CONFIG_FILE`] in
    /// `cwd` is read when present and defaults are returned when it isn't.
    /// Relative paths inside the file are taken relative to the file's folder.
    pub fn load(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        let path = match explicit {
            Some(path) => {
                let path = cwd.join(path);
                if !path.is_file() {
                    return Err(not_found(path.display().to_string()));
                }
                path
            }
            None => {
                let path = cwd.join(CONFIG_FILE);
                if !path.is_file() {
                    return Ok(Self::default());
                }
                path
            }
        };

        let content = fs::read_to_string(&path)
            .map_err(|e| read_failed(path.display().to_string(), e.to_string()))?;
        tracing::debug!("loaded configuration from {}", path.display());

        let base = path.parent().unwrap_or(cwd);
        Ok(Self::from_yaml(&content, &path)?.rebased(base))
    }

    fn rebased(self, base: &Path) -> Self {
        let rebase = |p: Option<PathBuf>| {
            p.map(|p| {
                if p.as_os_str().is_empty() || p.is_absolute() {
                    p
                } else {
                    base.join(p)
                }
            })
        };
        Self {
            scripts: rebase(self.scripts),
            sqx: rebase(self.sqx),
            mt5: rebase(self.mt5),
        }
    }

    /// Layer `overrides` on top of this configuration; set fields in `overrides` win
    #[must_use]
    pub fn merged_with(self, overrides: Self) -> Self {
        Self {
            scripts: overrides.scripts.or(self.scripts),
            sqx: overrides.sqx.or(self.sqx),
            mt5: overrides.mt5.or(self.mt5),
        }
    }

    /// Build the request for one run
    ///
    /// The scripts and SQX folders are required. A missing or empty MT5 folder
    /// means the sync is not requested.
    pub fn into_request(self) -> Result<InstallationRequest> {
        let scripts = required(self.scripts, "scripts")?;
        let sqx = required(self.sqx, "sqx")?;
        let mt5 = self.mt5.map(|p| dunce::simplified(&p).to_path_buf());
        Ok(InstallationRequest::new(scripts, sqx, mt5))
    }
}

fn required(path: Option<PathBuf>, name: &str) -> Result<PathBuf> {
    match path {
        Some(path) if !path.as_os_str().is_empty() => Ok(dunce::simplified(&path).to_path_buf()),
        _ => Err(missing_path(name)),
    }
}
