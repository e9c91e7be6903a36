//! High-level operations invoked by the presentation shell

pub mod install;
