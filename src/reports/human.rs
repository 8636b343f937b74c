//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::ReportGenerator;
use crate::error::VersyncError;
use crate::installations::{DependencyBucket, InstallationIndex};
use crate::utils::string::pluralize;

pub struct HumanReportGenerator {
    mismatches_only: bool,
}

impl HumanReportGenerator {
    pub fn new(mismatches_only: bool) -> Self {
        Self { mismatches_only }
    }

    fn write_listing(
        &self,
        output: &mut String,
        index: &InstallationIndex,
    ) -> Result<(), VersyncError> {
        let mut current_group = None;

        for bucket in index.buckets() {
            self.write_group_header(output, index, bucket, &mut current_group)?;

            let specifiers = bucket.specifiers().join(", ");
            if bucket.is_mismatched() {
                writeln!(
                    output,
                    "{} {} {}",
                    style("✗").red().bold(),
                    bucket.name(),
                    style(specifiers).red()
                )?;
            } else {
                writeln!(
                    output,
                    "{} {} {}",
                    style("✓").green(),
                    bucket.name(),
                    style(specifiers).dim()
                )?;
            }
        }

        Ok(())
    }

    fn write_mismatches(
        &self,
        output: &mut String,
        index: &InstallationIndex,
    ) -> Result<(), VersyncError> {
        if !index.has_mismatches() {
            writeln!(
                output,
                "\n{} No version mismatches detected! Every dependency resolves to a single \
                 specifier.",
                style("✓").green().bold()
            )?;
            return Ok(());
        }

        writeln!(
            output,
            "\n{} Found {} version {}:\n",
            style("✗").red().bold(),
            style(index.mismatch_count()).red().bold(),
            pluralize("mismatch", index.mismatch_count())
        )?;

        let mut current_group = None;

        for bucket in index.mismatched() {
            self.write_group_header(output, index, bucket, &mut current_group)?;

            let expected = bucket.expected();
            if expected.is_empty() {
                writeln!(
                    output,
                    "{} {} {}",
                    style("✗").red().bold(),
                    style(bucket.name()).bold(),
                    style("has no valid semver version in use").dim()
                )?;
            } else {
                writeln!(
                    output,
                    "{} {} {} {}",
                    style("✗").red().bold(),
                    style(bucket.name()).bold(),
                    style(&expected).green(),
                    style("is the highest valid semver version in use").dim()
                )?;
            }

            for installation in bucket.installations() {
                if installation.specifier != expected {
                    writeln!(
                        output,
                        "  {} {} in {} of {}",
                        style("•").dim(),
                        style(&installation.specifier).red(),
                        installation.dependency_type.property_name(),
                        style(installation.file_path.display()).dim()
                    )?;
                }
            }
            writeln!(output)?;
        }

        Ok(())
    }

    /// Group banners only matter when the configuration splits dependencies
    /// into more than the single catch-all group.
    fn write_group_header(
        &self,
        output: &mut String,
        index: &InstallationIndex,
        bucket: &DependencyBucket,
        current_group: &mut Option<usize>,
    ) -> Result<(), VersyncError> {
        if index.group_count() > 1 && *current_group != Some(bucket.group_index()) {
            writeln!(
                output,
                "{}",
                style(format!("Version group {}", bucket.group_index() + 1)).bold()
            )?;
            *current_group = Some(bucket.group_index());
        }

        Ok(())
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, index: &InstallationIndex) -> Result<String, VersyncError> {
        let mut output = String::new();

        if self.mismatches_only {
            self.write_mismatches(&mut output, index)?;
        } else {
            self.write_listing(&mut output, index)?;
        }

        Ok(output)
    }
}
