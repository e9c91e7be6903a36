//! Folder shape checks that gate an installation run
//!
//! A run touches nothing until the scripts folder holds at least one script
//! archive and the target folders carry their marker files.

use std::path::Path;

use crate::error::Result;
use crate::error::validation::{invalid_primary, invalid_secondary};
use crate::installer::discovery;
use crate::layout::{ARCHIVE_EXTENSION, PRIMARY_MARKERS, SECONDARY_MARKERS};

/// True if the scripts folder holds at least one `.sxp` archive, at any depth
pub fn source_has_installables(source: &Path) -> bool {
    discovery::discover_files(source)
        .iter()
        .any(|file| file.extension == ARCHIVE_EXTENSION)
}

/// Primary marker files absent from `folder`
pub fn missing_primary_markers(folder: &Path) -> Vec<&'static str> {
    PRIMARY_MARKERS
        .into_iter()
        .filter(|marker| !folder.join(marker).exists())
        .collect()
}

/// Secondary marker folders absent from `folder`
pub fn missing_secondary_markers(folder: &Path) -> Vec<&'static str> {
    SECONDARY_MARKERS
        .into_iter()
        .filter(|marker| !folder.join(marker).is_dir())
        .collect()
}

/// True if `folder` is an SQX installation folder
pub fn validate_primary_target(folder: &Path) -> bool {
    missing_primary_markers(folder).is_empty()
}

/// True if `folder` is an MT5 data folder, or empty (sync not requested)
pub fn validate_secondary_target(folder: &Path) -> bool {
    folder.as_os_str().is_empty() || missing_secondary_markers(folder).is_empty()
}

/// Fail with [`InvalidPrimaryTarget`] naming the missing markers
///
/// [`InvalidPrimaryTarget`]: crate::error::InstallerError::InvalidPrimaryTarget
pub fn check_primary_target(folder: &Path) -> Result<()> {
    let missing = missing_primary_markers(folder);
    if missing.is_empty() {
        return Ok(());
    }
    Err(invalid_primary(folder.display().to_string(), &missing))
}

/// Fail with [`InvalidSecondaryTarget`] naming the missing markers
///
/// [`InvalidSecondaryTarget`]: crate::error::InstallerError::InvalidSecondaryTarget
pub fn check_secondary_target(folder: &Path) -> Result<()> {
    if validate_secondary_target(folder) {
        return Ok(());
    }
    let missing = missing_secondary_markers(folder);
    Err(invalid_secondary(folder.display().to_string(), &missing))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InstallerError;
    use std::fs;
    use tempfile::TempDir;

    fn sqx_folder(markers: &[&str]) -> TempDir {
        let temp = TempDir::new().unwrap();
        for marker in markers {
            fs::write(temp.path().join(marker), b"").unwrap();
        }
        temp
    }

    #[test]
    fn test_primary_with_all_markers_is_valid() {
        let temp = sqx_folder(&PRIMARY_MARKERS);
        fs::write(temp.path().join("readme.txt"), b"unrelated").unwrap();
        assert!(validate_primary_target(temp.path()));
        assert!(check_primary_target(temp.path()).is_ok());
    }

    #[test]
    fn test_primary_missing_any_marker_is_rejected() {
        for skipped in PRIMARY_MARKERS {
            let present: Vec<&str> = PRIMARY_MARKERS
                .into_iter()
                .filter(|m| *m != skipped)
                .collect();
            let temp = sqx_folder(&present);
            assert!(!validate_primary_target(temp.path()), "{skipped} missing");
            assert_eq!(missing_primary_markers(temp.path()), vec![skipped]);
        }
    }

    #[test]
    fn test_primary_markers_are_case_sensitive() {
        let temp = sqx_folder(&["strategyquantx.exe", "sqcli.exe", "CodeEditor.exe"]);
        // Case-insensitive file systems resolve the lowercase name anyway.
        if !temp.path().join("StrategyQuantX.exe").exists() {
            assert!(!validate_primary_target(temp.path()));
        }
    }

    #[test]
    fn test_check_primary_reports_missing() {
        let temp = sqx_folder(&["StrategyQuantX.exe"]);
        let err = check_primary_target(temp.path()).unwrap_err();
        match err {
            InstallerError::InvalidPrimaryTarget { missing, .. } => {
                assert_eq!(missing, "sqcli.exe, CodeEditor.exe");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_secondary_requires_marker_folders() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("MQL5")).unwrap();
        fs::create_dir(temp.path().join("bases")).unwrap();
        // A file named like a marker folder does not count.
        fs::write(temp.path().join("config"), b"").unwrap();
        assert!(!validate_secondary_target(temp.path()));
        assert_eq!(missing_secondary_markers(temp.path()), vec!["config"]);

        fs::remove_file(temp.path().join("config")).unwrap();
        fs::create_dir(temp.path().join("config")).unwrap();
        assert!(validate_secondary_target(temp.path()));
        assert!(check_secondary_target(temp.path()).is_ok());
    }

    #[test]
    fn test_empty_secondary_is_valid() {
        assert!(validate_secondary_target(Path::new("")));
        assert!(check_secondary_target(Path::new("")).is_ok());
    }

    #[test]
    fn test_source_needs_an_archive() {
        let temp = TempDir::new().unwrap();
        assert!(!source_has_installables(temp.path()));

        fs::write(temp.path().join("b.mq5"), b"").unwrap();
        assert!(!source_has_installables(temp.path()));

        fs::create_dir_all(temp.path().join("pack/nested")).unwrap();
        fs::write(temp.path().join("pack/nested/A.SXP"), b"").unwrap();
        assert!(source_has_installables(temp.path()));
    }

    #[test]
    fn test_missing_source_has_no_installables() {
        assert!(!source_has_installables(Path::new("/definitely/not/here")));
    }
}
