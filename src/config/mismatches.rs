//! Mismatches command configuration

use crate::cli::OutputFormat;
use crate::config::options::CliOptions;

/// Configuration for the mismatches command
///
/// Reports the dependencies whose version specifiers disagree within their
/// version group.
#[derive(Debug, Clone)]
pub struct MismatchesConfig {
    /// Shared invocation options
    pub options: CliOptions,
    /// Output format for the report
    pub format: OutputFormat,
    /// Whether to exit with error code if mismatches are found
    pub error_on_mismatches: bool,
}
