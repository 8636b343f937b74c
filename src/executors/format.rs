//! Format command executor

use console::style;
use miette::Result;

use crate::config::FormatConfig;
use crate::disk::{Disk, FsDisk};
use crate::executors::CommandExecutor;
use crate::input::get_input;
use crate::utils::string::pluralize;

pub struct FormatExecutor;

impl CommandExecutor for FormatExecutor {
    type Config = FormatConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let disk = FsDisk::new()?;
        run_with_disk(config, &disk)
    }
}

/// Run the format command against the given disk
pub fn run_with_disk(config: FormatConfig, disk: &dyn Disk) -> Result<()> {
    eprintln!("{} Formatting package.json files...", style("🧷").cyan());

    let input = get_input(disk, &config.options)?;
    let resolved = input.resolved;
    let mut manifests = input.manifests;

    if manifests.is_empty() {
        eprintln!(
            "{} No package.json files found to inspect",
            style("ℹ").blue()
        );
        return Ok(());
    }

    let mut written = 0usize;

    for manifest in &mut manifests {
        let before = manifest.to_pretty_string(&resolved.indent)?;

        manifest.sort_first_properties(&resolved.sort_first);
        manifest.sort_az_properties(&resolved.sort_az);

        if manifest.to_pretty_string(&resolved.indent)? != before {
            manifest.write(disk, &resolved.indent)?;
            written += 1;
            eprintln!(
                "  {} Formatted {}",
                style("✓").green(),
                style(manifest.file_path.display()).dim()
            );
        }
    }

    if written == 0 {
        eprintln!(
            "\n{} Every package.json is already formatted",
            style("✓").green().bold()
        );
    } else {
        eprintln!(
            "\n{} Formatted {} {}",
            style("✓").green().bold(),
            style(written).bold(),
            pluralize("file", written)
        );
    }

    Ok(())
}
