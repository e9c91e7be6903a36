//! Basic file operations for installation
//!
//! This module handles low-level file operations:
//! - Directory creation (ensure_dir, ensure_parent_dir)
//! - Atomic document writes (write_atomic)
//! - Same-file detection before copies (is_same_file)

use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::error::fs::write_failed;

/// Ensure a directory exists
pub fn ensure_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path).map_err(|e| write_failed(path, e))
}

/// Ensure parent directory exists for a path
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_dir(parent),
        _ => Ok(()),
    }
}

/// True if both paths exist and resolve to the same file
///
/// Copying a file onto itself truncates it, so copies check this first.
pub fn is_same_file(a: &Path, b: &Path) -> bool {
    match (dunce::canonicalize(a), dunce::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Replace `path` with `contents` in one rename
///
/// The content goes to a temporary file in the same directory first, so readers
/// see either the old document or the new one.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    ensure_parent_dir(path)?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| write_failed(dir, e))?;
    tmp.write_all(contents)
        .and_then(|()| tmp.flush())
        .map_err(|e| write_failed(tmp.path(), e))?;
    tmp.persist(path).map_err(|e| write_failed(path, e.error))?;

    Ok(())
}
