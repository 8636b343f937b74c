//! List command configuration

use crate::cli::OutputFormat;
use crate::config::options::CliOptions;

/// Configuration for the list command
///
/// Lists every dependency name in use across the monorepo together with
/// each distinct version specifier declared for it.
#[derive(Debug, Clone)]
pub struct ListConfig {
    /// Shared invocation options
    pub options: CliOptions,
    /// Output format for the report
    pub format: OutputFormat,
}
