//! Extension to action mapping

use crate::domain::{Action, ExternalPlatform, MetaTrader};
use crate::layout::ARCHIVE_EXTENSION;

/// Map a file extension to the action that installs it
///
/// Case-insensitive, with or without the leading dot. Unknown extensions map to
/// [`Action::Ignore`].
pub fn classify(extension: &str) -> Action {
    let extension = extension.trim_start_matches('.').to_ascii_lowercase();
    match extension.as_str() {
        ARCHIVE_EXTENSION => Action::ArchiveInstall,
        "mq5" => Action::CopyToIndicatorFolder(MetaTrader::Mt5),
        "mqh" => Action::CopyToIncludeFolder(MetaTrader::Mt5),
        "mq4" => Action::CopyToIndicatorFolder(MetaTrader::Mt4),
        "eld" => Action::CopyToExternalPlatformFolder(ExternalPlatform::TradeStation),
        "xml" => Action::ConfigMerge,
        _ => Action::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_recognized_extensions_map_to_distinct_actions() {
        let recognized = ["sxp", "mq5", "mqh", "mq4", "eld", "xml"];
        let actions: HashSet<Action> = recognized.iter().map(|ext| classify(ext)).collect();

        assert_eq!(actions.len(), recognized.len());
        assert!(!actions.contains(&Action::Ignore));
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(classify("SXP"), Action::ArchiveInstall);
        assert_eq!(classify("Mq5"), classify("mq5"));
        assert_eq!(classify(".XML"), Action::ConfigMerge);
    }

    #[test]
    fn test_classify_mapping() {
        assert_eq!(classify("mq5"), Action::CopyToIndicatorFolder(MetaTrader::Mt5));
        assert_eq!(classify("mqh"), Action::CopyToIncludeFolder(MetaTrader::Mt5));
        assert_eq!(classify("mq4"), Action::CopyToIndicatorFolder(MetaTrader::Mt4));
        assert_eq!(
            classify("eld"),
            Action::CopyToExternalPlatformFolder(ExternalPlatform::TradeStation)
        );
    }

    #[test]
    fn test_unknown_extensions_are_ignored() {
        for ext in ["txt", "", "zip", "ex5", "sxpx"] {
            assert_eq!(classify(ext), Action::Ignore, "{ext:?}");
        }
    }
}
