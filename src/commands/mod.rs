//! Command implementations for the versync CLI
//!
//! This module contains the implementations for each CLI command:
//! - list: List every dependency in use across your packages
//! - mismatches: Show the dependencies whose versions disagree
//! - fix: Rewrite every mismatched version to the highest version in use
//! - format: Sort and normalise the properties of every package.json
//! - ranges: Apply a consistent semver range style to every version

pub mod fix;
pub mod format;
pub mod list;
pub mod mismatches;
pub mod ranges;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::List { .. } => list::execute_list_command(command),
        Commands::Mismatches { .. } => mismatches::execute_mismatches_command(command),
        Commands::Fix { .. } => fix::execute_fix_command(command),
        Commands::Format { .. } => format::execute_format_command(command),
        Commands::Ranges { .. } => ranges::execute_ranges_command(command),
    }
}
