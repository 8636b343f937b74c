//! Format command configuration

use crate::config::options::CliOptions;

/// Configuration for the format command
///
/// Normalises each manifest in place: the `sortFirst` properties lead the
/// file and the members of each `sortAz` property are alphabetised.
#[derive(Debug, Clone)]
pub struct FormatConfig {
    /// Shared invocation options
    pub options: CliOptions,
}
