//! Configuration errors

use super::InstallerError;

/// Creates a config not found error
pub fn not_found(path: impl Into<String>) -> InstallerError {
    InstallerError::ConfigNotFound { path: path.into() }
}

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> InstallerError {
    InstallerError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> InstallerError {
    InstallerError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a fragment parse failed error
pub fn fragment_parse_failed(path: impl Into<String>, reason: impl Into<String>) -> InstallerError {
    InstallerError::FragmentParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a config document parse failed error
pub fn document_parse_failed(path: impl Into<String>, reason: impl Into<String>) -> InstallerError {
    InstallerError::DocumentParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
