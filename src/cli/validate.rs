use clap::Parser;

use super::TargetArgs;

/// Arguments for the validate command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub targets: TargetArgs,
}
