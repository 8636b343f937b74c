use clap::{Parser, Subcommand};

use crate::common::{CommonArgs, FormatArgs, WriteArgs};

#[derive(Parser)]
#[command(
    name = "versync",
    about = "🧷 Keep dependency versions in sync across a JavaScript monorepo",
    long_about = "versync inspects every package.json in your monorepo, groups the version \
                  specifiers declared for each dependency, and reports or repairs the places \
                  where they disagree. It reads all dependency types by default and never \
                  touches the network.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every dependency in use across your packages
    ///
    /// Prints one line per dependency name with each distinct version
    /// specifier declared for it, so you can see the whole monorepo's
    /// dependency surface at a glance.
    #[command(
        long_about = "Harvest the version specifiers declared in every discovered package.json \
                      and print one line per dependency name. Consistent dependencies show their \
                      single specifier; inconsistent ones show every specifier in use. Use \
                      --format json for programmatic consumption."
    )]
    List {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// Show the dependencies whose versions disagree
    ///
    /// Restricts the listing to dependencies installed under more than one
    /// version specifier within their version group, and names the specifier
    /// the other installations should move to.
    #[command(
        long_about = "List only the dependencies whose version specifiers disagree within their \
                      version group. Each entry names the highest valid semver version in use \
                      and the manifest locations that differ from it. Use --error-on-mismatches \
                      in CI to fail the build when versions drift apart."
    )]
    Mismatches {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: FormatArgs,

        /// Exit with error code if mismatches found
        #[arg(long, env = "VERSYNC_ERROR_ON_MISMATCHES")]
        error_on_mismatches: bool,
    },

    /// Rewrite every mismatched version to the highest version in use
    ///
    /// For each dependency whose installations disagree, picks the highest
    /// valid semver version already in use and rewrites every other
    /// installation to it. Dependencies with no valid semver version in use
    /// are skipped with a warning.
    #[command(
        long_about = "Repair version mismatches in place. For every dependency whose \
                      installations disagree within their version group, the highest valid \
                      semver version already in use wins and each differing manifest entry is \
                      rewritten to it. Manifests are only written when their contents changed. \
                      Use --dry-run to preview the edits without writing."
    )]
    Fix {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        write: WriteArgs,

        /// Report the planned edits without writing any file
        #[arg(long, env = "VERSYNC_DRY_RUN")]
        dry_run: bool,
    },

    /// Sort and normalise the properties of every package.json
    ///
    /// Hoists the configured `sortFirst` properties to the top of each
    /// manifest and alphabetises the members of each `sortAz` property,
    /// leaving everything else in its original order.
    #[command(
        long_about = "Normalise the shape of every discovered package.json. The properties named \
                      by sortFirst are moved to the front of the file in the configured order, \
                      the remaining properties keep their relative order, and the members of \
                      each property named by sortAz are alphabetised. Manifests are only written \
                      when their contents changed."
    )]
    Format {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        write: WriteArgs,
    },

    /// Apply a consistent semver range style to every version
    ///
    /// Rewrites each semver-shaped version specifier to carry the range
    /// style of its semver group, for example pinning everything exact or
    /// loosening everything to caret ranges.
    #[command(
        long_about = "Rewrite each semver-shaped version specifier to the comparator range of \
                      the first semver group matching its package and dependency name, for \
                      example `2.4.2` to `^2.4.2`. Specifiers that are not semver-shaped pass \
                      through untouched. The catch-all range comes from the semverRange option \
                      or --semver-range."
    )]
    Ranges {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        write: WriteArgs,

        /// Semver range to apply where no semver group matches
        #[arg(short = 'r', long, value_name = "RANGE", env = "VERSYNC_SEMVER_RANGE")]
        semver_range: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}
