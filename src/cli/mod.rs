//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - install: Install command arguments
//! - validate: Validate command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::InstallerConfig;

pub mod install;
pub mod validate;

pub use install::InstallArgs;
pub use validate::ValidateArgs;

/// sqx-installer - StrategyQuant X add-on installer
///
/// Installs downloaded StrategyQuant X scripts and custom indicators, and mirrors
/// the MetaTrader 5 indicators into a MetaTrader 5 data folder.
#[derive(Parser, Debug)]
#[command(
    name = "sqx-installer",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Installs StrategyQuant X scripts and custom indicators",
    long_about = "Installs a folder of downloaded StrategyQuant X add-ons: .sxp archives are \
                  extracted into the user folder, .xml fragments are merged into customBlocks.xml \
                  and MetaTrader/TradeStation indicators are copied into custom_indicators. \
                  The MetaTrader 5 indicators can then be synced into a MetaTrader 5 data folder.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  sqx-installer install --scripts ~/Downloads/sqx --sqx /opt/StrategyQuantX\n   \
                  sqx-installer install --mt5 ~/.mt5/drive_c/MT5 --dry-run   \x1b[90m# Show the plan\x1b[0m\n   \
                  sqx-installer validate --sqx /opt/StrategyQuantX          \x1b[90m# Check folders only\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Configuration file (defaults to ./sqx-installer.yaml when present)
    #[arg(long, short = 'c', global = true, env = "SQX_INSTALLER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install every add-on found in the scripts folder
    Install(InstallArgs),

    /// Check the StrategyQuant X and MetaTrader 5 folders without installing
    Validate(ValidateArgs),

    /// Show version information
    #[command(hide = true)]
    Version,
}

/// Folders a run works on, shared by `install` and `validate`
#[derive(Args, Debug, Clone, Default)]
pub struct TargetArgs {
    /// Folder with the downloaded scripts
    #[arg(long, short = 's', value_name = "DIR", env = "SQX_SCRIPTS_DIR")]
    pub scripts: Option<PathBuf>,

    /// StrategyQuant X installation folder
    #[arg(long, value_name = "DIR", env = "SQX_DIR")]
    pub sqx: Option<PathBuf>,

    /// MetaTrader 5 data folder; omit to skip the sync
    #[arg(long, value_name = "DIR", env = "MT5_DIR")]
    pub mt5: Option<PathBuf>,
}

impl From<TargetArgs> for InstallerConfig {
    fn from(args: TargetArgs) -> Self {
        Self {
            scripts: args.scripts,
            sqx: args.sqx,
            mt5: args.mt5,
        }
    }
}
