//! File discovery in the scripts folder
//!
//! Every regular file at any depth is reported, recognized or not, sorted by
//! path so runs over the same folder dispatch in the same order.

use std::path::Path;

use walkdir::WalkDir;

use crate::domain::DiscoveredFile;

/// Discover all regular files under `source`
///
/// Unreadable entries are logged and skipped. A missing folder yields nothing.
pub fn discover_files(source: &Path) -> Vec<DiscoveredFile> {
    if !source.is_dir() {
        return Vec::new();
    }

    WalkDir::new(source)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::warn!("skipping unreadable entry under {}: {err}", source.display());
                None
            }
        })
        .filter(|e| e.file_type().is_file())
        .map(|entry| DiscoveredFile::new(entry.into_path()))
        .collect()
}
