//! Fix command executor

use std::collections::BTreeSet;

use console::style;
use miette::Result;

use crate::config::FixConfig;
use crate::disk::{Disk, FsDisk};
use crate::executors::CommandExecutor;
use crate::input::get_input;
use crate::installations::{InstallationIndex, collect_installations};
use crate::utils::string::pluralize;

pub struct FixExecutor;

impl CommandExecutor for FixExecutor {
    type Config = FixConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let disk = FsDisk::new()?;
        run_with_disk(config, &disk)
    }
}

/// Run the fix command against the given disk
pub fn run_with_disk(config: FixConfig, disk: &dyn Disk) -> Result<()> {
    if config.dry_run {
        eprintln!(
            "{} Previewing version fixes (dry run)...",
            style("🧷").cyan()
        );
    } else {
        eprintln!("{} Fixing version mismatches...", style("🧷").cyan());
    }

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

    let index = InstallationIndex::new(collect_installations(&manifests, &resolved), &resolved);

    let mut edits = 0usize;
    let mut dirty: BTreeSet<usize> = BTreeSet::new();

    for bucket in index.mismatched() {
        let expected = bucket.expected();
        if expected.is_empty() {
            eprintln!(
                "{} Skipping {}: no valid semver version in use",
                style("⚠").yellow(),
                style(bucket.name()).bold()
            );
            continue;
        }

        for installation in bucket.installations() {
            if installation.specifier == expected {
                continue;
            }

            let manifest = &mut manifests[installation.manifest_index];
            if manifest.set_specifier(installation.dependency_type, &installation.name, &expected) {
                edits += 1;
                dirty.insert(installation.manifest_index);
                eprintln!(
                    "  {} {}: {} {} {} in {} of {}",
                    style("•").dim(),
                    style(&installation.name).bold(),
                    style(&installation.specifier).red(),
                    style("→").dim(),
                    style(&expected).green(),
                    installation.dependency_type.property_name(),
                    style(installation.file_path.display()).dim()
                );
            }
        }
    }

    if edits == 0 {
        eprintln!(
            "\n{} Nothing to fix! Every dependency already resolves to a single version.",
            style("✓").green().bold()
        );
        return Ok(());
    }

    if config.dry_run {
        eprintln!(
            "\n{} Dry run: {} {} would be updated",
            style("ℹ").blue(),
            style(edits).bold(),
            pluralize("installation", edits)
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
