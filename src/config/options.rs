//! Invocation options shared across commands

use std::path::PathBuf;

use crate::manifest::DependencyType;

/// Everything the command line can say about an invocation, before it is
/// merged with the rcfile and the defaults.
///
/// Absent optional fields mean "not said", so that the persisted
/// configuration can speak instead.
#[derive(Debug, Clone, Default)]
pub struct CliOptions {
    /// Glob patterns for the package.json files to inspect
    pub source: Vec<String>,
    /// Regex that dependency names must match to be considered
    pub filter: Option<String>,
    /// Indent string used when writing manifests back
    pub indent: Option<String>,
    /// Default semver range applied by the ranges command
    pub semver_range: Option<String>,
    /// Explicit rcfile path instead of the default search
    pub config_path: Option<PathBuf>,
    /// Inspect devDependencies
    pub dev: bool,
    /// Inspect overrides
    pub overrides: bool,
    /// Inspect peerDependencies
    pub peer: bool,
    /// Inspect pnpm.overrides
    pub pnpm_overrides: bool,
    /// Inspect dependencies
    pub prod: bool,
    /// Inspect resolutions
    pub resolutions: bool,
    /// Inspect the version property of each package
    pub workspace: bool,
}

impl CliOptions {
    /// The dependency types explicitly switched on by flags, in canonical
    /// order. Empty when no flag was given.
    pub fn enabled_dependency_types(&self) -> Vec<DependencyType> {
        let flags = [
            (self.dev, DependencyType::Dev),
            (self.overrides, DependencyType::Overrides),
            (self.peer, DependencyType::Peer),
            (self.pnpm_overrides, DependencyType::PnpmOverrides),
            (self.prod, DependencyType::Prod),
            (self.resolutions, DependencyType::Resolutions),
            (self.workspace, DependencyType::Workspace),
        ];

        flags
            .into_iter()
            .filter_map(|(enabled, dependency_type)| enabled.then_some(dependency_type))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_enable_nothing_explicitly() {
        assert!(CliOptions::default().enabled_dependency_types().is_empty());
    }

    #[test]
    fn test_flags_enable_their_types_in_canonical_order() {
        let options = CliOptions {
            workspace: true,
            dev: true,
            prod: true,
            ..Default::default()
        };

        assert_eq!(
            options.enabled_dependency_types(),
            vec![
                DependencyType::Dev,
                DependencyType::Prod,
                DependencyType::Workspace,
            ]
        );
    }
}
