//! # Versync - Keep Dependency Versions in Sync Across JavaScript Monorepos
//!
//! Versync is a tool for finding and fixing version mismatches in JavaScript
//! and TypeScript monorepos. It inspects every package.json, groups the
//! version specifiers declared for each dependency, and reports or repairs
//! the places where the same dependency is installed under different
//! versions.
//!
//! ## Main Components
//!
//! - **Config**: Resolves defaults, the rcfile and the command line into one
//!   policy per invocation
//! - **Manifest**: Loads package.json files with their property order intact
//!   and mutates individual entries in place
//! - **Installations**: Harvests every version specifier in use and buckets
//!   them by version group and dependency name
//! - **Version**: Compares specifiers, picks the highest version in use and
//!   applies semver range styles
//! - **Reports**: Generates human-readable and machine-readable reports
//!
//! ## Usage
//!
//! ### Real-World Example: Checking a Monorepo for Mismatches
//!
//! ```no_run
//! use versync::config::options::CliOptions;
//! use versync::disk::FsDisk;
//! use versync::input::get_input;
//! use versync::installations::{InstallationIndex, collect_installations};
//! use versync::reports::{HumanReportGenerator, ReportGenerator};
//!
//! # fn main() -> miette::Result<()> {
//! // Step 1: Resolve configuration and load every manifest
//! let disk = FsDisk::with_cwd("/path/to/your/monorepo");
//! let input = get_input(&disk, &CliOptions::default())?;
//!
//! println!("Found {} packages", input.manifests.len());
//!
//! // Step 2: Bucket every installed version by dependency name
//! let index = InstallationIndex::new(
//!     collect_installations(&input.manifests, &input.resolved),
//!     &input.resolved,
//! );
//!
//! // Step 3: Report the buckets whose versions disagree
//! if index.has_mismatches() {
//!     println!("⚠️  Found {} version mismatches!", index.mismatch_count());
//!
//!     let report = HumanReportGenerator::new(true);
//!     println!("{}", report.generate_report(&index)?);
//! } else {
//!     println!("✅ All dependency versions match!");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Machine-Readable Output
//!
//! ```no_run
//! use miette::IntoDiagnostic;
//! use versync::config::options::CliOptions;
//! use versync::disk::FsDisk;
//! use versync::input::get_input;
//! use versync::installations::{InstallationIndex, collect_installations};
//! use versync::reports::{JsonReportGenerator, ReportGenerator};
//!
//! # fn main() -> miette::Result<()> {
//! let disk = FsDisk::new()?;
//! let input = get_input(&disk, &CliOptions::default())?;
//!
//! let index = InstallationIndex::new(
//!     collect_installations(&input.manifests, &input.resolved),
//!     &input.resolved,
//! );
//!
//! // JSON report for programmatic processing
//! let json_report = JsonReportGenerator::new(false);
//! let json_output = json_report.generate_report(&index)?;
//! std::fs::write("versions.json", json_output).into_diagnostic()?;
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Comparing Version Specifiers Directly
//!
//! ```
//! use versync::version::{coerce, range_score, select_highest};
//!
//! // The highest valid semver version in use wins
//! let highest = select_highest(["2.3.0", "^2.4.2", "2.4.2"]);
//! assert_eq!(highest, "^2.4.2");
//!
//! // Equal versions are ranked by how permissive their range is
//! assert!(range_score(">=1.0.0") > range_score("~1.0.0"));
//!
//! // Specifiers that are not semver-shaped have no version to compare
//! assert!(coerce("git+https://github.com/chalk/chalk.git").is_none());
//! ```

// Private modules
mod constants;
mod utils;
mod workspace_discovery;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod disk;
pub mod error;
pub mod executors;
pub mod input;
pub mod installations;
pub mod manifest;
pub mod reports;
pub mod version;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::commands::execute_command;

    let cli = cli::Cli::parse();
    execute_command(cli.command)
}
