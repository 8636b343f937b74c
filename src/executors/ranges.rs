//! Ranges command executor

use std::collections::BTreeSet;

use console::style;
use miette::Result;

use crate::config::RangesConfig;
use crate::disk::{Disk, FsDisk};
use crate::executors::CommandExecutor;
use crate::input::get_input;
use crate::installations::collect_installations;
use crate::manifest::DependencyType;
use crate::utils::string::pluralize;
use crate::version::with_semver_range;

pub struct RangesExecutor;

impl CommandExecutor for RangesExecutor {
    type Config = RangesConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let disk = FsDisk::new()?;
        run_with_disk(config, &disk)
    }
}

/// Run the ranges command against the given disk
pub fn run_with_disk(config: RangesConfig, disk: &dyn Disk) -> Result<()> {
    eprintln!("{} Applying semver ranges...", style("🧷").cyan());

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

    let installations = collect_installations(&manifests, &resolved);
    let mut edits = 0usize;
    let mut dirty: BTreeSet<usize> = BTreeSet::new();

    for installation in &installations {
        // A package's own version property must stay a plain version.
        if installation.dependency_type == DependencyType::Workspace {
            continue;
        }

        let range = resolved
            .semver_groups
            .range_for(&installation.package_name, &installation.name);
        let replacement = with_semver_range(range, &installation.specifier);
        if replacement == installation.specifier {
            continue;
        }

        let manifest = &mut manifests[installation.manifest_index];
        if manifest.set_specifier(installation.dependency_type, &installation.name, &replacement) {
            edits += 1;
            dirty.insert(installation.manifest_index);
            eprintln!(
                "  {} {}: {} {} {} in {} of {}",
                style("•").dim(),
                style(&installation.name).bold(),
                style(&installation.specifier).red(),
                style("→").dim(),
                style(&replacement).green(),
                installation.dependency_type.property_name(),
                style(installation.file_path.display()).dim()
            );
        }
    }

    if edits == 0 {
        eprintln!(
            "\n{} Every version specifier already has the configured range",
            style("✓").green().bold()
        );
        return Ok(());
    }

    for manifest_index in &dirty {
        manifests[*manifest_index].write(disk, &resolved.indent)?;
    }

    eprintln!(
        "\n{} Updated {} {} across {} {}",
        style("✓").green().bold(),
        style(edits).bold(),
        pluralize("installation", edits),
        style(dirty.len()).bold(),
        pluralize("file", dirty.len())
    );

    Ok(())
}
