//! The fully merged policy for one invocation
//!
//! Three layers feed every field: hardcoded defaults under the rcfile under
//! the command line, highest explicit value wins, field by field, with no
//! merging of scalars. Two fields bend the rule: dependency-type flags are
//! command-line-only and union into "all types" when no flag is given, and
//! the group lists come from the rcfile alone, each terminated by an
//! appended catch-all.

use regex::Regex;

use crate::config::groups::{SemverGroups, VersionGroups};
use crate::config::options::CliOptions;
use crate::config::rcfile::RcConfig;
use crate::constants::default_config;
use crate::error::VersyncError;
use crate::manifest::DependencyType;

#[derive(Debug)]
pub struct Resolved {
    /// Dependency types to harvest installations from
    pub dependency_types: Vec<DependencyType>,
    /// Compiled form of the `filter` option
    pub filter: Regex,
    /// Indent string for writing manifests back
    pub indent: String,
    /// Default semver range, carried by the semver catch-all group
    pub semver_range: String,
    /// Manifest properties whose members get alphabetised by `format`
    pub sort_az: Vec<String>,
    /// Manifest properties hoisted to the front by `format`
    pub sort_first: Vec<String>,
    /// Source patterns for discovery; empty means "use the cascade"
    pub source: Vec<String>,
    pub semver_groups: SemverGroups,
    pub version_groups: VersionGroups,
}

impl Resolved {
    pub fn from_layers(rc: &RcConfig, options: &CliOptions) -> Result<Self, VersyncError> {
        let filter = override_field(
            options.filter.clone(),
            rc.filter.clone(),
            default_config::FILTER.to_string(),
        );
        let filter = Regex::new(&filter).map_err(|e| VersyncError::ConfigurationError {
            message: format!("'{filter}' is not a valid filter regex: {e}"),
        })?;

        let semver_range = override_field(
            options.semver_range.clone(),
            rc.semver_range.clone(),
            default_config::SEMVER_RANGE.to_string(),
        );

        let semver_groups = SemverGroups::from_config(
            rc.semver_groups.as_deref().unwrap_or_default(),
            &semver_range,
        )?;
        let version_groups =
            VersionGroups::from_config(rc.version_groups.as_deref().unwrap_or_default())?;

        Ok(Self {
            dependency_types: resolve_dependency_types(options),
            filter,
            indent: override_field(
                options.indent.clone(),
                rc.indent.clone(),
                default_config::INDENT.to_string(),
            ),
            semver_range,
            sort_az: override_field(None, rc.sort_az.clone(), defaults(&default_config::SORT_AZ)),
            sort_first: override_field(
                None,
                rc.sort_first.clone(),
                defaults(&default_config::SORT_FIRST),
            ),
            source: override_field(
                Some(options.source.clone()).filter(|source| !source.is_empty()),
                rc.source.clone(),
                Vec::new(),
            ),
            semver_groups,
            version_groups,
        })
    }
}

/// One field's slice of the precedence contract: invocation beats rcfile
/// beats default.
fn override_field<T>(from_options: Option<T>, from_rc: Option<T>, default: T) -> T {
    from_options.or(from_rc).unwrap_or(default)
}

/// Flags name an exact subset; no flags at all means every type.
fn resolve_dependency_types(options: &CliOptions) -> Vec<DependencyType> {
    let enabled = options.enabled_dependency_types();
    if enabled.is_empty() {
        DependencyType::ALL.to_vec()
    } else {
        enabled
    }
}

fn defaults(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::rcfile::{SemverGroupConfig, VersionGroupConfig};

    fn resolve(rc: RcConfig, options: CliOptions) -> Resolved {
        Resolved::from_layers(&rc, &options).unwrap()
    }

    #[test]
    fn test_defaults_when_nothing_is_configured() {
        let resolved = resolve(RcConfig::default(), CliOptions::default());

        assert_eq!(resolved.dependency_types, DependencyType::ALL.to_vec());
        assert_eq!(resolved.filter.as_str(), ".");
        assert_eq!(resolved.indent, "  ");
        assert_eq!(resolved.semver_range, "");
        assert!(resolved.source.is_empty());
        assert_eq!(resolved.sort_first, vec!["name", "description", "version", "author"]);
        assert_eq!(resolved.semver_groups.group_count(), 1);
        assert_eq!(resolved.version_groups.group_count(), 1);
    }

    #[test]
    fn test_one_flag_narrows_types_to_that_flag() {
        let options = CliOptions {
            prod: true,
            ..Default::default()
        };

        let resolved = resolve(RcConfig::default(), options);

        assert_eq!(resolved.dependency_types, vec![DependencyType::Prod]);
    }

    #[test]
    fn test_several_flags_narrow_types_to_exactly_those() {
        let options = CliOptions {
            dev: true,
            prod: true,
            workspace: true,
            ..Default::default()
        };

        let resolved = resolve(RcConfig::default(), options);

        assert_eq!(
            resolved.dependency_types,
            vec![
                DependencyType::Dev,
                DependencyType::Prod,
                DependencyType::Workspace,
            ]
        );
    }

    #[test]
    fn test_rcfile_source_beats_the_default() {
        let rc = RcConfig {
            source: Some(vec!["./foo/package.json".to_string()]),
            ..Default::default()
        };

        let resolved = resolve(rc, CliOptions::default());

        assert_eq!(resolved.source, vec!["./foo/package.json"]);
    }

    #[test]
    fn test_invocation_source_beats_the_rcfile() {
        let rc = RcConfig {
            source: Some(vec!["./foo/package.json".to_string()]),
            ..Default::default()
        };
        let options = CliOptions {
            source: vec!["./bar/package.json".to_string()],
            ..Default::default()
        };

        let resolved = resolve(rc, options);

        assert_eq!(resolved.source, vec!["./bar/package.json"]);
    }

    #[test]
    fn test_scalar_overrides_take_the_highest_layer() {
        let rc = RcConfig {
            indent: Some("    ".to_string()),
            semver_range: Some("^".to_string()),
            ..Default::default()
        };
        let options = CliOptions {
            semver_range: Some("~".to_string()),
            ..Default::default()
        };

        let resolved = resolve(rc, options);

        assert_eq!(resolved.indent, "    ");
        assert_eq!(resolved.semver_range, "~");
    }

    #[test]
    fn test_group_lists_append_a_catch_all() {
        let rc = RcConfig {
            semver_range: Some("^".to_string()),
            semver_groups: Some(vec![SemverGroupConfig {
                range: "~".to_string(),
                packages: vec!["@myrepo/library".to_string()],
                dependencies: vec!["@alpha/*".to_string()],
            }]),
            version_groups: Some(vec![VersionGroupConfig {
                packages: vec!["foo".to_string(), "bar".to_string()],
                dependencies: vec!["chalk".to_string()],
            }]),
            ..Default::default()
        };

        let resolved = resolve(rc, CliOptions::default());

        assert_eq!(resolved.semver_groups.group_count(), 2);
        assert_eq!(resolved.version_groups.group_count(), 2);
        assert_eq!(
            resolved.semver_groups.range_for("@myrepo/library", "@alpha/core"),
            "~"
        );
        assert_eq!(resolved.semver_groups.range_for("other", "@alpha/core"), "^");
        assert_eq!(resolved.version_groups.index_for("foo", "chalk"), 0);
        assert_eq!(resolved.version_groups.index_for("baz", "jest"), 1);
    }

    #[test]
    fn test_invalid_filter_regex_is_a_configuration_error() {
        let options = CliOptions {
            filter: Some("[".to_string()),
            ..Default::default()
        };

        match Resolved::from_layers(&RcConfig::default(), &options) {
            Err(VersyncError::ConfigurationError { message }) => {
                assert!(message.contains("filter"));
            }
            other => panic!("Expected ConfigurationError, got {other:?}"),
        }
    }

    #[test]
    fn test_filter_narrows_matching_names() {
        let options = CliOptions {
            filter: Some("^@types/".to_string()),
            ..Default::default()
        };

        let resolved = resolve(RcConfig::default(), options);

        assert!(resolved.filter.is_match("@types/node"));
        assert!(!resolved.filter.is_match("chalk"));
    }
}
