//! Format command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::FromCommand;
use crate::config::FormatConfig;
use crate::error::VersyncError;

impl FromCommand for FormatConfig {
    fn from_command(command: Commands) -> Result<Self, VersyncError> {
        match command {
            Commands::Format { common, write } => {
                let mut options = common.to_options();
                options.indent = write.indent;

                Ok(FormatConfig { options })
            }
            _ => Err(VersyncError::ConfigurationError {
                message: "Invalid command type for FormatConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(FormatConfig);

/// Execute the format command for normalising package.json files
pub fn execute_format_command(command: Commands) -> Result<()> {
    let config = FormatConfig::from_command(command)
        .wrap_err("Failed to parse format command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::format::FormatExecutor;
    FormatExecutor::execute(config)
}
