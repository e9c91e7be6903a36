//! Script archive errors

use super::InstallerError;

/// Creates a source not found error
pub fn source_not_found(path: impl Into<String>) -> InstallerError {
    InstallerError::SourceNotFound { path: path.into() }
}

/// Creates a corrupt archive error
pub fn corrupt(path: impl Into<String>, reason: impl Into<String>) -> InstallerError {
    InstallerError::CorruptArchive {
        path: path.into(),
        reason: reason.into(),
    }
}
