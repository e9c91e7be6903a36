//! Domain models for the installer
//!
//! This module contains pure domain objects representing one installation run.
//! These types carry no I/O and are shared by the core and the presentation shell.

pub mod file;
pub mod outcome;
pub mod request;

pub use file::{Action, DiscoveredFile, ExternalPlatform, MetaTrader};
pub use outcome::{
    FileError, InstallOutcome, InstallPlan, OutcomeStatus, PlannedAction, RunResult, SyncSummary,
};
pub use request::InstallationRequest;
