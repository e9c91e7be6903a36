//! Install operation submodules
//! Validation gate, per-file dispatch and the final MT5 sync

pub mod execution;
pub mod orchestrator;


pub use orchestrator::{InstallOperation, InstallOptions, plan, run};
