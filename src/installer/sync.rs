//! Mirroring installed MT5 indicators into the MetaTrader 5 data folder

use std::fs;
use std::io;
use std::path::Path;

use walkdir::WalkDir;

use crate::domain::SyncSummary;
use crate::error::Result;
use crate::error::fs::sync_failed;
use crate::layout;

use super::file_ops::is_same_file;

/// Copy a directory recursively, merging into `dst`
///
/// Files present on both sides are overwritten, files only in `dst` are kept.
/// Symlinked folders are not descended into. Returns the number of files copied.
pub fn copy_dir_merge(src: &Path, dst: &Path) -> io::Result<usize> {
    fs::create_dir_all(dst)?;

    let mut copied = 0;
    for entry in WalkDir::new(src).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        let relative = entry.path().strip_prefix(src).map_err(io::Error::other)?;
        let dst_path = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&dst_path)?;
            continue;
        }
        if entry.path_is_symlink() && entry.path().is_dir() {
            tracing::debug!("not following symlinked folder {}", entry.path().display());
            continue;
        }
        if is_same_file(entry.path(), &dst_path) {
            continue;
        }

        fs::copy(entry.path(), &dst_path)?;
        copied += 1;
    }

    Ok(copied)
}

/// Copy `<sqx>/custom_indicators/Metatrader5` over `<mt5>/MQL5`
///
/// Nothing to copy is not an error: the summary reports zero files.
pub fn sync_to_secondary(primary: &Path, secondary: &Path) -> Result<SyncSummary> {
    let source = layout::mt5_indicator_tree(primary);
    let target = layout::secondary_root(secondary);

    if !source.is_dir() {
        tracing::info!(
            "no MT5 indicators under {}, nothing to sync",
            source.display()
        );
        return Ok(SyncSummary {
            target,
            files_copied: 0,
        });
    }

    let files_copied = copy_dir_merge(&source, &target).map_err(|e| sync_failed(&target, e))?;
    tracing::info!("synced {files_copied} files into {}", target.display());

    Ok(SyncSummary {
        target,
        files_copied,
    })
}
