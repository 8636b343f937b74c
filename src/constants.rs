//! Configuration constants for versync
//!
//! This module contains the fixed vocabulary used throughout the
//! application: semver range prefixes, default policy values, and the file
//! names probed during configuration and workspace discovery.

/// Semver range prefixes, named for the widest version component they allow
/// to drift.
pub mod ranges {
    /// The universal wildcard, satisfied by every version.
    pub const ANY: &str = "*";

    /// No prefix at all: an exact version such as `1.2.3`.
    pub const EXACT: &str = "";

    /// Strictly greater than, `>1.2.3`.
    pub const GT: &str = ">";

    /// Greater than or equal, `>=1.2.3`.
    pub const GTE: &str = ">=";

    /// The `x`-range marker: any specifier containing `.x`, such as `1.x.x`.
    pub const LOOSE: &str = ".x";

    /// Strictly less than, `<1.2.3`.
    pub const LT: &str = "<";

    /// Less than or equal, `<=1.2.3`.
    pub const LTE: &str = "<=";

    /// Caret range, `^1.2.3`: minor and patch may drift.
    pub const MINOR: &str = "^";

    /// Tilde range, `~1.2.3`: only patch may drift.
    pub const PATCH: &str = "~";
}

/// Hardcoded defaults for every field of the resolved policy. Persisted
/// configuration and invocation options override these per field.
pub mod default_config {
    /// Dependency names must match this regex to be harvested.
    pub const FILTER: &str = ".";

    /// Indentation applied when writing package.json files back to disk.
    pub const INDENT: &str = "  ";

    /// Semver range applied by the catch-all semver group (exact versions).
    pub const SEMVER_RANGE: &str = super::ranges::EXACT;

    /// package.json properties whose members are sorted alphabetically by
    /// the `format` command.
    pub const SORT_AZ: &[&str] = &[
        "contributors",
        "dependencies",
        "devDependencies",
        "files",
        "keywords",
        "peerDependencies",
        "resolutions",
        "scripts",
    ];

    /// package.json properties moved to the front of the file, in this
    /// order, by the `format` command.
    pub const SORT_FIRST: &[&str] = &["name", "description", "version", "author"];
}

/// File name conventions probed during discovery and configuration loading.
pub mod paths {
    /// The manifest file name every discovery pattern ultimately targets.
    pub const PACKAGE_JSON: &str = "package.json";

    /// Lerna's repo-level manifest, probed for a `packages` array.
    pub const LERNA_JSON: &str = "lerna.json";

    /// pnpm's workspace configuration, probed for a `packages` array.
    pub const PNPM_WORKSPACE_YAML: &str = "pnpm-workspace.yaml";

    /// Patterns used when no source patterns are given and no workspace
    /// manager declares its own package locations.
    pub const DEFAULT_SOURCES: &[&str] = &["package.json", "packages/*/package.json"];

    /// Root manifest pattern prepended to cascade-derived package patterns.
    pub const ROOT_SOURCE: &str = "./package.json";

    /// Configuration file names searched in the working directory, in order,
    /// when `--config` is not given.
    pub const RC_FILES: &[&str] = &[".versyncrc.json", ".versyncrc", "versync.json"];
}

/// Group matching configuration.
pub mod groups {
    /// Pattern matching every package or dependency name.
    pub const MATCH_ALL: &str = "**";
}

pub mod output {
    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "human";
}
