//! sqx-installer - StrategyQuant X add-on installer
//!
//! Installs a folder of downloaded StrategyQuant X add-ons into an SQX
//! installation and optionally mirrors the MetaTrader 5 indicators into an MT5
//! data folder.
//!
//! The core ([`operations::install`]) never prints. It takes an
//! [`InstallationRequest`](domain::InstallationRequest), reports per-file
//! progress through [`ui::ProgressReporter`] and returns a
//! [`RunResult`](domain::RunResult) for a presentation shell to render. The
//! `sqx-installer` binary is the command-line shell.

pub mod cli;
pub mod commands;
pub mod config;
pub mod document;
pub mod domain;
pub mod error;
pub mod installer;
pub mod layout;
pub mod operations;
pub mod ui;
pub mod validation;
