//! sqx-installer - StrategyQuant X add-on installer
//!
//! Command-line shell over the `sqx_installer` library.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use sqx_installer::cli::{Cli, Commands};
use sqx_installer::commands;
use sqx_installer::ui::format_error;

/// Environment variable holding a tracing filter, e.g. `sqx_installer=trace`
const LOG_ENV: &str = "SQX_INSTALLER_LOG";

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "sqx_installer=debug"
    } else {
        "sqx_installer=warn"
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.config.as_deref();
    let result = match cli.command {
        Commands::Install(args) => commands::install::run(config, args),
        Commands::Validate(args) => commands::validate::run(config, args),
        Commands::Version => commands::version::run(),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{}", format_error(&e));
            std::process::exit(commands::EXIT_FAILURE);
        }
    }
}
