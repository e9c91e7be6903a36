//! Folder layout of the StrategyQuant X and MetaTrader 5 installations
//!
//! Marker names and destination subfolders are fixed by the applications
//! themselves, so they live here as constants rather than configuration.

use std::path::{Path, PathBuf};

use crate::domain::{Action, ExternalPlatform, MetaTrader};

/// Extension of packaged SQX scripts
pub const ARCHIVE_EXTENSION: &str = "sxp";

/// Files that must sit directly under an SQX installation folder
pub const PRIMARY_MARKERS: [&str; 3] = ["StrategyQuantX.exe", "sqcli.exe", "CodeEditor.exe"];

/// Folders that must exist under an MT5 data folder
pub const SECONDARY_MARKERS: [&str; 3] = ["MQL5", "bases", "config"];

/// Content shipped with SQX itself, never overwritten by user archives
pub const INTERNAL_DIR: &str = "internal";

/// User content root, archives are extracted here
pub const USER_DIR: &str = "user";

/// Root of the per-platform indicator sources
pub const CUSTOM_INDICATORS_DIR: &str = "custom_indicators";

/// Config document path relative to [`USER_DIR`]
pub const CONFIG_DOCUMENT: &str = "settings/customBlocks.xml";

/// Root element of a freshly created config document
pub const CONFIG_ROOT: &str = "CustomBlocks";

/// Item element inside the config document
pub const CONFIG_ITEM: &str = "Item";

/// Attribute identifying a config item
pub const CONFIG_KEY: &str = "key";

/// MT5 folder the custom indicators are synced into
pub const SECONDARY_ROOT: &str = "MQL5";

fn metatrader_dir(mt: MetaTrader) -> &'static str {
    match mt {
        MetaTrader::Mt4 => "Metatrader4",
        MetaTrader::Mt5 => "Metatrader5",
    }
}

fn external_dir(platform: ExternalPlatform) -> &'static str {
    match platform {
        ExternalPlatform::TradeStation => "Tradestation",
    }
}

/// Where archives are extracted
pub fn user_dir(primary: &Path) -> PathBuf {
    primary.join(USER_DIR)
}

/// Protected namespace archives are checked against
pub fn internal_dir(primary: &Path) -> PathBuf {
    primary.join(INTERNAL_DIR)
}

/// The persistent config document
pub fn config_document(primary: &Path) -> PathBuf {
    user_dir(primary).join(CONFIG_DOCUMENT)
}

/// MT5 subtree under the SQX custom indicators, mirrored into the MT5 data folder
pub fn mt5_indicator_tree(primary: &Path) -> PathBuf {
    primary
        .join(CUSTOM_INDICATORS_DIR)
        .join(metatrader_dir(MetaTrader::Mt5))
}

/// Sync destination inside the MT5 data folder
pub fn secondary_root(secondary: &Path) -> PathBuf {
    secondary.join(SECONDARY_ROOT)
}

impl Action {
    /// Destination of this action under the SQX folder
    ///
    /// Archive installs return the extraction folder, config merges the document path,
    /// and copies the folder the file lands in. [`Action::Ignore`] has none.
    pub fn destination(&self, primary: &Path) -> Option<PathBuf> {
        let indicators = primary.join(CUSTOM_INDICATORS_DIR);
        match self {
            Action::ArchiveInstall => Some(user_dir(primary)),
            Action::CopyToIndicatorFolder(mt) => {
                Some(indicators.join(metatrader_dir(*mt)).join("Indicators"))
            }
            Action::CopyToIncludeFolder(mt) => {
                Some(indicators.join(metatrader_dir(*mt)).join("Include"))
            }
            Action::CopyToExternalPlatformFolder(platform) => {
                Some(indicators.join(external_dir(*platform)))
            }
            Action::ConfigMerge => Some(config_document(primary)),
            Action::Ignore => None,
        }
    }
}
