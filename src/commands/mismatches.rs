//! Mismatches command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::FromCommand;
use crate::config::MismatchesConfig;
use crate::error::VersyncError;

impl FromCommand for MismatchesConfig {
    fn from_command(command: Commands) -> Result<Self, VersyncError> {
        match command {
            Commands::Mismatches {
                common,
                format,
                error_on_mismatches,
            } => Ok(MismatchesConfig {
                options: common.to_options(),
                format: format.format,
                error_on_mismatches,
            }),
            _ => Err(VersyncError::ConfigurationError {
                message: "Invalid command type for MismatchesConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(MismatchesConfig);

/// Execute the mismatches command for reporting disagreeing versions
pub fn execute_mismatches_command(command: Commands) -> Result<()> {
    let config = MismatchesConfig::from_command(command)
        .wrap_err("Failed to parse mismatches command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::mismatches::MismatchesExecutor;
    MismatchesExecutor::execute(config)
}
