//! Script archive (`.sxp`) installation
//!
//! Installation is two-phase. The first phase reads the manifest and checks every
//! entry against the SQX `internal/` namespace. Only if no entry collides does
//! the second phase extract anything, so a refused archive leaves no trace.

use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use zip::ZipArchive;

use crate::error::Result;
use crate::error::archive::{corrupt, source_not_found};
use crate::error::fs::{read_failed, write_failed};
use crate::layout;

use super::file_ops::{ensure_dir, ensure_parent_dir};

/// Result of installing one archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchiveInstall {
    /// All entries were extracted
    Installed { entries: usize },
    /// The archive ships something SQX already has under `internal/`
    SkippedConflict { entry: String },
}

/// Entry names of an archive, checked against the protected namespace
#[derive(Debug, Clone)]
pub struct ArchiveManifest {
    entries: Vec<ManifestEntry>,
}

#[derive(Debug, Clone)]
struct ManifestEntry {
    name: String,
    relative: PathBuf,
    is_dir: bool,
}

impl ArchiveManifest {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First file entry whose `internal/<name>` path already exists
    ///
    /// Folder entries never collide: `indicators/` exists under `internal/` in
    /// every installation.
    pub fn first_protected(&self, internal_dir: &Path) -> Option<&str> {
        self.entries
            .iter()
            .filter(|e| !e.is_dir)
            .find(|e| internal_dir.join(&e.relative).exists())
            .map(|e| e.name.as_str())
    }
}

fn open_archive(path: &Path) -> Result<ZipArchive<BufReader<File>>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => source_not_found(path.display().to_string()),
        _ => read_failed(path, e),
    })?;
    ZipArchive::new(BufReader::new(file))
        .map_err(|e| corrupt(path.display().to_string(), e.to_string()))
}

fn read_manifest_from<R: std::io::Read + std::io::Seek>(
    archive: &mut ZipArchive<R>,
    path: &Path,
) -> Result<ArchiveManifest> {
    let mut entries = Vec::with_capacity(archive.len());
    for index in 0..archive.len() {
        let entry = archive
            .by_index_raw(index)
            .map_err(|e| corrupt(path.display().to_string(), e.to_string()))?;
        let name = entry.name().to_string();
        let Some(relative) = entry.enclosed_name() else {
            return Err(corrupt(
                path.display().to_string(),
                format!("entry '{name}' points outside the destination"),
            ));
        };
        entries.push(ManifestEntry {
            name,
            relative,
            is_dir: entry.is_dir(),
        });
    }
    Ok(ArchiveManifest { entries })
}

/// Read the manifest of an archive without extracting it
pub fn read_manifest(archive_path: &Path) -> Result<ArchiveManifest> {
    let mut archive = open_archive(archive_path)?;
    read_manifest_from(&mut archive, archive_path)
}

/// Install an archive into `destination`, unless it collides with SQX internal content
///
/// Existing user files at the same relative paths are overwritten.
pub fn install_archive(
    archive_path: &Path,
    primary: &Path,
    destination: &Path,
) -> Result<ArchiveInstall> {
    let mut archive = open_archive(archive_path)?;
    let manifest = read_manifest_from(&mut archive, archive_path)?;

    if manifest.is_empty() {
        tracing::warn!("{} contains no entries", archive_path.display());
    }

    if let Some(entry) = manifest.first_protected(&layout::internal_dir(primary)) {
        tracing::info!(
            "refusing {}: '{entry}' exists under {}",
            archive_path.display(),
            layout::INTERNAL_DIR
        );
        return Ok(ArchiveInstall::SkippedConflict {
            entry: entry.to_string(),
        });
    }

    for (index, entry) in manifest.entries.iter().enumerate() {
        let mut file = archive
            .by_index(index)
            .map_err(|e| corrupt(archive_path.display().to_string(), e.to_string()))?;
        let out_path = destination.join(&entry.relative);

        if file.is_dir() {
            ensure_dir(&out_path)?;
            continue;
        }

        ensure_parent_dir(&out_path)?;
        let mut out_file = File::create(&out_path).map_err(|e| write_failed(&out_path, e))?;
        std::io::copy(&mut file, &mut out_file).map_err(|e| {
            corrupt(
                archive_path.display().to_string(),
                format!("failed to extract '{}': {e}", entry.name),
            )
        })?;
    }

    tracing::debug!(
        "extracted {} entries from {} into {}",
        manifest.len(),
        archive_path.display(),
        destination.display()
    );
    Ok(ArchiveInstall::Installed {
        entries: manifest.len(),
    })
}
