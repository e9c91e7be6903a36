use clap::Parser;

use super::TargetArgs;

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Install into StrategyQuant X:\n    \
                   sqx-installer install --scripts ./downloads --sqx /opt/StrategyQuantX\n\n\
                   Install and sync into MetaTrader 5:\n    \
                   sqx-installer install -s ./downloads --sqx /opt/SQX --mt5 /data/MT5\n\n\
                   Preview without writing anything:\n    \
                   sqx-installer install --dry-run")]
pub struct InstallArgs {
    #[command(flatten)]
    pub targets: TargetArgs,

    /// Show what would be installed without actually installing
    #[arg(long)]
    pub dry_run: bool,

    /// Print the result as JSON
    #[arg(long, conflicts_with = "quiet")]
    pub json: bool,

    /// Print nothing unless something went wrong
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::super::{Cli, Commands};
    use clap::Parser;
    use std::path::PathBuf;

    fn install_args(args: &[&str]) -> super::InstallArgs {
        let cli = Cli::try_parse_from(args).unwrap_or_else(|e| {
            panic!("Failed to parse CLI arguments: {}", e);
        });
        match cli.command {
            Commands::Install(args) => args,
            _ => panic!("Expected Install command"),
        }
    }

    #[test]
    fn test_cli_parsing_install_with_folders() {
        let args = install_args(&[
            "sqx-installer",
            "install",
            "--scripts",
            "/dl",
            "--sqx",
            "/opt/sqx",
            "--mt5",
            "/mt5",
        ]);
        assert_eq!(args.targets.scripts, Some(PathBuf::from("/dl")));
        assert_eq!(args.targets.sqx, Some(PathBuf::from("/opt/sqx")));
        assert_eq!(args.targets.mt5, Some(PathBuf::from("/mt5")));
        assert!(!args.dry_run);
        assert!(!args.json);
    }

    #[test]
    fn test_cli_parsing_install_flags() {
        let args = install_args(&["sqx-installer", "install", "--dry-run", "--json"]);
        assert!(args.dry_run);
        assert!(args.json);
        assert!(!args.quiet);
    }

    #[test]
    fn test_cli_json_conflicts_with_quiet() {
        let result = Cli::try_parse_from(["sqx-installer", "install", "--json", "--quiet"]);
        assert!(result.is_err());
    }
}
