//! Fix command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::FromCommand;
use crate::config::FixConfig;
use crate::error::VersyncError;

impl FromCommand for FixConfig {
    fn from_command(command: Commands) -> Result<Self, VersyncError> {
        match command {
            Commands::Fix {
                common,
                write,
                dry_run,
            } => {
                let mut options = common.to_options();
                options.indent = write.indent;

                Ok(FixConfig { options, dry_run })
            }
            _ => Err(VersyncError::ConfigurationError {
                message: "Invalid command type for FixConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(FixConfig);

/// Execute the fix command for repairing version mismatches in place
pub fn execute_fix_command(command: Commands) -> Result<()> {
    let config =
        FixConfig::from_command(command).wrap_err("Failed to parse fix command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::fix::FixExecutor;
    FixExecutor::execute(config)
}
