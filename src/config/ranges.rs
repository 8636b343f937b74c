//! Ranges command configuration

use crate::config::options::CliOptions;

/// Configuration for the ranges command
///
/// Rewrites each semver-shaped installation to carry the comparator range
/// of its semver group.
#[derive(Debug, Clone)]
pub struct RangesConfig {
    /// Shared invocation options
    pub options: CliOptions,
}
