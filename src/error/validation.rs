//! Source and target folder validation errors

use super::InstallerError;

/// Creates an invalid SQX folder error
pub fn invalid_primary(path: impl Into<String>, missing: &[&str]) -> InstallerError {
    InstallerError::InvalidPrimaryTarget {
        path: path.into(),
        missing: missing.join(", "),
    }
}

/// Creates an invalid MT5 folder error
pub fn invalid_secondary(path: impl Into<String>, missing: &[&str]) -> InstallerError {
    InstallerError::InvalidSecondaryTarget {
        path: path.into(),
        missing: missing.join(", "),
    }
}

/// Creates a missing path error
pub fn missing_path(name: impl Into<String>) -> InstallerError {
    InstallerError::MissingPath { name: name.into() }
}
