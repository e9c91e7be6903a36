//! File system errors

use std::path::Path;

use super::InstallerError;

/// Creates a file read failed error
pub fn read_failed(path: &Path, err: impl ToString) -> InstallerError {
    InstallerError::FileReadFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: &Path, err: impl ToString) -> InstallerError {
    InstallerError::FileWriteFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a sync failed error
pub fn sync_failed(path: &Path, err: impl ToString) -> InstallerError {
    InstallerError::SyncFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}
