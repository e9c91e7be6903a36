//! Error types and handling for the installer
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`validation`]: Source and target folder shape errors
//! - [`archive`]: Script archive errors
//! - [`config`]: Installer configuration and config document errors
//! - [`fs`]: File system errors

pub mod archive;
pub mod config;
pub mod fs;
pub mod validation;


use miette::Diagnostic;
use thiserror::Error;

/// Main error type for installer operations
#[derive(Error, Diagnostic, Debug)]
pub enum InstallerError {
    // Validation errors
    #[error("Invalid SQX folder: {path} (missing {missing})")]
    #[diagnostic(
        code(sqx_installer::validation::invalid_primary_target),
        help(
            "Select the folder where StrategyQuant X is installed. It contains StrategyQuantX.exe, sqcli.exe and CodeEditor.exe"
        )
    )]
    InvalidPrimaryTarget { path: String, missing: String },

    #[error("Invalid MT5 folder: {path} (missing {missing})")]
    #[diagnostic(
        code(sqx_installer::validation::invalid_secondary_target),
        help(
            "In MetaTrader 5 use File > Open Data Folder and select that folder. It contains MQL5, bases and config"
        )
    )]
    InvalidSecondaryTarget { path: String, missing: String },

    #[error("No {name} folder given")]
    #[diagnostic(
        code(sqx_installer::validation::missing_path),
        help("Pass it on the command line, through the environment, or in sqx-installer.yaml")
    )]
    MissingPath { name: String },

    // Archive errors
    #[error("File not found: {path}")]
    #[diagnostic(code(sqx_installer::archive::source_not_found))]
    SourceNotFound { path: String },

    #[error("Invalid .sxp file format: {path}: {reason}")]
    #[diagnostic(
        code(sqx_installer::archive::corrupt),
        help("Download the script again, the archive is damaged or not a script package")
    )]
    CorruptArchive { path: String, reason: String },

    // Config document errors
    #[error("Failed to parse config fragment: {path}: {reason}")]
    #[diagnostic(code(sqx_installer::document::fragment_parse_failed))]
    FragmentParseFailed { path: String, reason: String },

    #[error("Failed to parse config document: {path}: {reason}")]
    #[diagnostic(
        code(sqx_installer::document::parse_failed),
        help("The existing document is left untouched, fix or remove it and install again")
    )]
    DocumentParseFailed { path: String, reason: String },

    // Installer configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(sqx_installer::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(sqx_installer::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(sqx_installer::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(sqx_installer::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(sqx_installer::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to sync into {path}: {reason}")]
    #[diagnostic(code(sqx_installer::fs::sync_failed))]
    SyncFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(sqx_installer::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for InstallerError {
    fn from(err: std::io::Error) -> Self {
        InstallerError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for InstallerError {
    fn from(err: serde_json::Error) -> Self {
        InstallerError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, InstallerError>;
