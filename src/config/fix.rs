//! Fix command configuration

use crate::config::options::CliOptions;

/// Configuration for the fix command
///
/// Rewrites every mismatched installation to the highest version specifier
/// in use within its version group.
#[derive(Debug, Clone)]
pub struct FixConfig {
    /// Shared invocation options
    pub options: CliOptions,
    /// Report the planned edits without writing any file
    pub dry_run: bool,
}
