//! Report generation modules for different output formats
//!
//! This module contains report generators for the supported output formats:
//! - human: Human-readable console output
//! - json: JSON format for programmatic use

pub mod human;
pub mod json;

use crate::error::VersyncError;
use crate::installations::InstallationIndex;

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a report from the bucketed installations
    fn generate_report(&self, index: &InstallationIndex) -> Result<String, VersyncError>;
}

// Re-export for convenience
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
