//! Ranges command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::FromCommand;
use crate::config::RangesConfig;
use crate::error::VersyncError;

impl FromCommand for RangesConfig {
    fn from_command(command: Commands) -> Result<Self, VersyncError> {
        match command {
            Commands::Ranges {
                common,
                write,
                semver_range,
            } => {
                let mut options = common.to_options();
                options.indent = write.indent;
                options.semver_range = semver_range;

                Ok(RangesConfig { options })
            }
            _ => Err(VersyncError::ConfigurationError {
                message: "Invalid command type for RangesConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(RangesConfig);

/// Execute the ranges command for applying semver range styles
pub fn execute_ranges_command(command: Commands) -> Result<()> {
    let config = RangesConfig::from_command(command)
        .wrap_err("Failed to parse ranges command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::ranges::RangesExecutor;
    RangesExecutor::execute(config)
}
