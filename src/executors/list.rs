//! List command executor

use console::style;
use miette::Result;

use crate::cli::OutputFormat;
use crate::config::ListConfig;
use crate::disk::{Disk, FsDisk};
use crate::executors::CommandExecutor;
use crate::input::get_input;
use crate::installations::{InstallationIndex, collect_installations};
use crate::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};

pub struct ListExecutor;

impl CommandExecutor for ListExecutor {
    type Config = ListConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let disk = FsDisk::new()?;
        run_with_disk(config, &disk)
    }
}

/// Run the list command against the given disk
pub fn run_with_disk(config: ListConfig, disk: &dyn Disk) -> Result<()> {
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
        OutputFormat::Human => HumanReportGenerator::new(false).generate_report(&index)?,
        OutputFormat::Json => JsonReportGenerator::new(false).generate_report(&index)?,
    };
    print!("{report}");

    Ok(())
}
