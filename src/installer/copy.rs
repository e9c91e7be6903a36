//! Single-file installs into the custom indicator folders

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::error::archive::source_not_found;
use crate::error::fs::{read_failed, write_failed};

use super::file_ops::{ensure_dir, is_same_file};

/// Copy `file` into `destination_dir`, keeping its name
///
/// Creates the destination folder when missing and overwrites a same-named file,
/// so reinstalling an indicator picks up the new version. A file that already is
/// its own destination is left as it is. Returns the installed path.
pub fn copy_into(file: &Path, destination_dir: &Path) -> Result<PathBuf> {
    if !file.is_file() {
        return Err(source_not_found(file.display().to_string()));
    }
    let name = file
        .file_name()
        .ok_or_else(|| read_failed(file, "path has no file name"))?;

    ensure_dir(destination_dir)?;

    let target = destination_dir.join(name);
    if is_same_file(file, &target) {
        tracing::debug!("{} is already installed in place", file.display());
        return Ok(target);
    }
    std::fs::copy(file, &target).map_err(|e| write_failed(&target, e))?;
    tracing::debug!("copied {} -> {}", file.display(), target.display());

    Ok(target)
}
