//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

use crate::config::options::CliOptions;

/// Common arguments shared by every command
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Glob patterns for package.json files to inspect
    #[arg(short, long, value_name = "PATTERN", env = "VERSYNC_SOURCE")]
    pub source: Vec<String>,

    /// Only include dependencies whose name matches this regex
    #[arg(long, value_name = "REGEX", env = "VERSYNC_FILTER")]
    pub filter: Option<String>,

    /// Path to the configuration file to use instead of the default search
    #[arg(short, long, value_name = "PATH", env = "VERSYNC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Include dependencies
    #[arg(short = 'p', long)]
    pub prod: bool,

    /// Include devDependencies
    #[arg(short = 'd', long)]
    pub dev: bool,

    /// Include peerDependencies
    #[arg(short = 'P', long)]
    pub peer: bool,

    /// Include overrides
    #[arg(short = 'o', long)]
    pub overrides: bool,

    /// Include pnpm.overrides
    #[arg(short = 'O', long = "pnpm-overrides")]
    pub pnpm_overrides: bool,

    /// Include resolutions
    #[arg(short = 'R', long)]
    pub resolutions: bool,

    /// Include the version property of each package
    #[arg(short = 'w', long)]
    pub workspace: bool,
}

impl CommonArgs {
    /// Convert the parsed flags into the invocation layer of the
    /// configuration, leaving the write-time options unset.
    pub fn to_options(&self) -> CliOptions {
        CliOptions {
            source: self.source.clone(),
            filter: self.filter.clone(),
            indent: None,
            semver_range: None,
            config_path: self.config.clone(),
            dev: self.dev,
            overrides: self.overrides,
            peer: self.peer,
            pnpm_overrides: self.pnpm_overrides,
            prod: self.prod,
            resolutions: self.resolutions,
            workspace: self.workspace,
        }
    }
}

/// Common arguments for commands that write manifests back
#[derive(Args, Debug, Clone)]
pub struct WriteArgs {
    /// Indentation applied when writing package.json files
    #[arg(short, long, value_name = "STRING", env = "VERSYNC_INDENT")]
    pub indent: Option<String>,
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "VERSYNC_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

/// Trait for configurations that can be created from CLI commands
/// This trait simplifies command-to-config conversions
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands) -> Result<Self, crate::error::VersyncError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::VersyncError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}
