//! Mismatches command executor

use console::style;
use miette::Result;

use crate::cli::OutputFormat;
use crate::config::MismatchesConfig;
use crate::disk::{Disk, FsDisk};
use crate::executors::CommandExecutor;
use crate::input::get_input;
use crate::installations::{InstallationIndex, collect_installations};
use crate::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};

pub struct MismatchesExecutor;

impl CommandExecutor for MismatchesExecutor {
    type Config = MismatchesConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let disk = FsDisk::new()?;
        run_with_disk(config, &disk)
    }
}

/// Run the mismatches command against the given disk
pub fn run_with_disk(config: MismatchesConfig, disk: &dyn Disk) -> Result<()> {
    eprintln!(
        "{} Checking for version mismatches...",
        style("🧷").cyan()
    );

    let input = get_input(disk, &config.options)?;

    if input.manifests.is_empty() {
        eprintln!(
            "{} No package.json files found to inspect",
            style("ℹ").blue()
        );
        return Ok(());
    }

    let index = InstallationIndex::new(
        collect_installations(&input.manifests, &input.resolved),
        &input.resolved,
    );

    let report = match config.format {
        OutputFormat::Human => HumanReportGenerator::new(true).generate_report(&index)?,
        OutputFormat::Json => JsonReportGenerator::new(true).generate_report(&index)?,
    };
    print!("{report}");

    // Exit with error code if mismatches found and requested
    if config.error_on_mismatches && index.has_mismatches() {
        std::process::exit(1);
    }

    Ok(())
}
