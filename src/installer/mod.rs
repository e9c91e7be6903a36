//! File installers
//!
//! Each submodule installs one kind of file into the SQX folder:
//! - [`classify`]: maps an extension to an [`Action`](crate::domain::Action)
//! - [`discovery`]: enumerates the scripts folder
//! - [`archive`]: extracts `.sxp` script archives, refusing internal collisions
//! - [`copy`]: copies indicator sources into the custom indicator folders
//! - [`merge`]: merges config fragments into `customBlocks.xml`
//! - [`sync`]: mirrors MT5 indicators into the MetaTrader 5 data folder
//!
//! Installers return structured results and never talk to the user; the
//! orchestrator in [`operations::install`](crate::operations::install) aggregates them.

pub mod archive;
pub mod classify;
pub mod copy;
pub mod discovery;
pub mod file_ops;
pub mod merge;
pub mod sync;

pub use archive::{ArchiveInstall, ArchiveManifest, install_archive, read_manifest};
pub use classify::classify;
pub use copy::copy_into;
pub use discovery::discover_files;
pub use merge::{MergeSummary, merge_config};
pub use sync::sync_to_secondary;
