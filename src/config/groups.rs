//! Semver and version groups
//!
//! Groups carve the `(package, dependency)` space into policy regions: a
//! version group isolates which installations must agree with each other,
//! a semver group decides which comparator range its installations should
//! carry. Both lists always end in a catch-all group, so every installation
//! belongs somewhere and lookup never fails.

use crate::config::rcfile::{SemverGroupConfig, VersionGroupConfig};
use crate::error::VersyncError;

/// Which `(package, dependency)` pairs a group claims.
///
/// User-defined groups match on glob patterns over the declaring package's
/// name and the dependency name; the catch-all claims everything and is
/// kept as its own variant so reports can tell it apart.
#[derive(Debug)]
pub enum Selector {
    Patterns {
        packages: Vec<glob::Pattern>,
        dependencies: Vec<glob::Pattern>,
    },
    CatchAll,
}

impl Selector {
    fn from_patterns(packages: &[String], dependencies: &[String]) -> Result<Self, VersyncError> {
        Ok(Self::Patterns {
            packages: compile_patterns(packages, "packages")?,
            dependencies: compile_patterns(dependencies, "dependencies")?,
        })
    }

    pub fn matches(&self, package_name: &str, dependency_name: &str) -> bool {
        match self {
            Self::CatchAll => true,
            Self::Patterns {
                packages,
                dependencies,
            } => {
                packages.iter().any(|pattern| pattern.matches(package_name))
                    && dependencies
                        .iter()
                        .any(|pattern| pattern.matches(dependency_name))
            }
        }
    }

    pub fn is_catch_all(&self) -> bool {
        matches!(self, Self::CatchAll)
    }
}

fn compile_patterns(patterns: &[String], field: &str) -> Result<Vec<glob::Pattern>, VersyncError> {
    patterns
        .iter()
        .map(|pattern| {
            glob::Pattern::new(pattern).map_err(|e| VersyncError::ConfigurationError {
                message: format!("Invalid pattern '{pattern}' under '{field}': {e}"),
            })
        })
        .collect()
}

#[derive(Debug)]
pub struct SemverGroup {
    pub range: String,
    pub selector: Selector,
}

#[derive(Debug)]
pub struct VersionGroup {
    pub selector: Selector,
}

/// The ordered version-group list, catch-all included.
#[derive(Debug)]
pub struct VersionGroups(Vec<VersionGroup>);

impl VersionGroups {
    pub fn from_config(configs: &[VersionGroupConfig]) -> Result<Self, VersyncError> {
        let mut groups = configs
            .iter()
            .map(|config| {
                Ok(VersionGroup {
                    selector: Selector::from_patterns(&config.packages, &config.dependencies)?,
                })
            })
            .collect::<Result<Vec<_>, VersyncError>>()?;

        groups.push(VersionGroup {
            selector: Selector::CatchAll,
        });

        Ok(Self(groups))
    }

    pub fn group_count(&self) -> usize {
        self.0.len()
    }

    pub fn groups(&self) -> &[VersionGroup] {
        &self.0
    }

    /// The group claiming this installation: the first whose selector
    /// matches. The catch-all makes this total.
    pub fn index_for(&self, package_name: &str, dependency_name: &str) -> usize {
        self.0
            .iter()
            .position(|group| group.selector.matches(package_name, dependency_name))
            .unwrap_or(self.0.len() - 1)
    }
}

/// The ordered semver-group list, catch-all included.
#[derive(Debug)]
pub struct SemverGroups(Vec<SemverGroup>);

impl SemverGroups {
    /// The catch-all carries `default_range`, the resolved `semverRange`
    /// option, so ungrouped installations still get a policy.
    pub fn from_config(
        configs: &[SemverGroupConfig],
        default_range: &str,
    ) -> Result<Self, VersyncError> {
        let mut groups = configs
            .iter()
            .map(|config| {
                Ok(SemverGroup {
                    range: config.range.clone(),
                    selector: Selector::from_patterns(&config.packages, &config.dependencies)?,
                })
            })
            .collect::<Result<Vec<_>, VersyncError>>()?;

        groups.push(SemverGroup {
            range: default_range.to_string(),
            selector: Selector::CatchAll,
        });

        Ok(Self(groups))
    }

    pub fn group_count(&self) -> usize {
        self.0.len()
    }

    pub fn groups(&self) -> &[SemverGroup] {
        &self.0
    }

    /// The range this installation should carry: the first matching
    /// group's. The catch-all makes this total.
    pub fn range_for(&self, package_name: &str, dependency_name: &str) -> &str {
        self.0
            .iter()
            .find(|group| group.selector.matches(package_name, dependency_name))
            .map(|group| group.range.as_str())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn version_config(packages: &[&str], dependencies: &[&str]) -> VersionGroupConfig {
        VersionGroupConfig {
            packages: packages.iter().map(|s| s.to_string()).collect(),
            dependencies: dependencies.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn semver_config(range: &str, packages: &[&str], dependencies: &[&str]) -> SemverGroupConfig {
        SemverGroupConfig {
            range: range.to_string(),
            packages: packages.iter().map(|s| s.to_string()).collect(),
            dependencies: dependencies.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_version_groups_always_end_in_a_catch_all() {
        let groups = VersionGroups::from_config(&[]).unwrap();

        assert_eq!(groups.group_count(), 1);
        assert!(groups.groups()[0].selector.is_catch_all());
        assert!(groups.groups()[0].selector.matches("anything", "at-all"));

        let groups =
            VersionGroups::from_config(&[version_config(&["foo"], &["chalk"])]).unwrap();

        assert_eq!(groups.group_count(), 2);
        assert!(!groups.groups()[0].selector.is_catch_all());
        assert!(groups.groups()[1].selector.is_catch_all());
    }

    #[test]
    fn test_first_matching_group_claims_the_installation() {
        let groups = VersionGroups::from_config(&[
            version_config(&["foo", "bar"], &["chalk"]),
            version_config(&["**"], &["chalk"]),
        ])
        .unwrap();

        assert_eq!(groups.index_for("foo", "chalk"), 0);
        assert_eq!(groups.index_for("bar", "chalk"), 0);
        assert_eq!(groups.index_for("baz", "chalk"), 1);
        assert_eq!(groups.index_for("foo", "jest"), 2);
    }

    #[test]
    fn test_both_pattern_lists_must_match() {
        let groups =
            VersionGroups::from_config(&[version_config(&["@myrepo/*"], &["@alpha/*"])]).unwrap();

        assert_eq!(groups.index_for("@myrepo/library", "@alpha/core"), 0);
        assert_eq!(groups.index_for("@myrepo/library", "chalk"), 1);
        assert_eq!(groups.index_for("elsewhere", "@alpha/core"), 1);
    }

    #[test]
    fn test_semver_group_ranges_with_default_fallback() {
        let groups = SemverGroups::from_config(
            &[semver_config("~", &["@myrepo/library"], &["@alpha/*"])],
            "^",
        )
        .unwrap();

        assert_eq!(groups.range_for("@myrepo/library", "@alpha/core"), "~");
        assert_eq!(groups.range_for("other", "@alpha/core"), "^");
        assert_eq!(groups.range_for("@myrepo/library", "chalk"), "^");
    }

    #[test]
    fn test_empty_pattern_list_matches_nothing() {
        let groups = VersionGroups::from_config(&[version_config(&[], &["chalk"])]).unwrap();

        assert_eq!(groups.index_for("foo", "chalk"), 1);
    }

    #[test]
    fn test_invalid_pattern_is_a_configuration_error() {
        let result = VersionGroups::from_config(&[version_config(&["[oops"], &["**"])]);

        match result {
            Err(VersyncError::ConfigurationError { message }) => {
                assert!(message.contains("[oops"));
            }
            other => panic!("Expected ConfigurationError, got {other:?}"),
        }
    }
}
