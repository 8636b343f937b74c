//! Harvesting and grouping of version specifiers
//!
//! An installation is one `"name": "specifier"` entry inside one dependency
//! property of one manifest. Every command works over the same flattened
//! list of installations, bucketed by version group and dependency name, so
//! "is this dependency consistent" and "what should it become" are answered
//! in one place.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::config::resolved::Resolved;
use crate::manifest::{DependencyType, Manifest};
use crate::version::select_highest;

/// One usage of a dependency inside one manifest
#[derive(Debug, Clone, PartialEq)]
pub struct Installation {
    /// The `name` of the manifest this entry was found in, if it has one
    pub package_name: String,
    /// Path of the manifest this entry was found in
    pub file_path: PathBuf,
    /// Which dependency property the entry lives under
    pub dependency_type: DependencyType,
    /// Name of the installed dependency
    pub name: String,
    /// The raw version specifier, exactly as written
    pub specifier: String,
    /// Position of the manifest in the loaded set, for writing back
    pub manifest_index: usize,
}

/// Walk every enabled dependency property of every manifest and flatten the
/// entries whose names pass the filter.
pub fn collect_installations(manifests: &[Manifest], resolved: &Resolved) -> Vec<Installation> {
    let mut installations = Vec::new();

    for (manifest_index, manifest) in manifests.iter().enumerate() {
        let package_name = manifest.name().unwrap_or_default().to_string();

        for dependency_type in &resolved.dependency_types {
            for (name, specifier) in manifest.entries(*dependency_type) {
                if !resolved.filter.is_match(&name) {
                    continue;
                }

                installations.push(Installation {
                    package_name: package_name.clone(),
                    file_path: manifest.file_path.clone(),
                    dependency_type: *dependency_type,
                    name,
                    specifier,
                    manifest_index,
                });
            }
        }
    }

    installations
}

/// All installations of one dependency name within one version group
#[derive(Debug)]
pub struct DependencyBucket {
    group_index: usize,
    name: String,
    installations: Vec<Installation>,
}

impl DependencyBucket {
    pub fn group_index(&self) -> usize {
        self.group_index
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn installations(&self) -> &[Installation] {
        &self.installations
    }

    /// Distinct specifiers in first-seen order.
    pub fn specifiers(&self) -> Vec<&str> {
        let mut specifiers: Vec<&str> = Vec::new();
        for installation in &self.installations {
            if !specifiers.contains(&installation.specifier.as_str()) {
                specifiers.push(&installation.specifier);
            }
        }
        specifiers
    }

    pub fn is_mismatched(&self) -> bool {
        self.specifiers().len() > 1
    }

    /// The specifier every installation in the bucket should use.
    ///
    /// Empty when none of the specifiers in use has a semver shape to
    /// compare, in which case there is nothing to fix automatically.
    pub fn expected(&self) -> String {
        select_highest(self.specifiers())
    }
}

/// Installations bucketed by version group and dependency name
///
/// Buckets are ordered by group position first and dependency name second,
/// so reports walk groups in the order the configuration declares them and
/// dependencies alphabetically within each group.
pub struct InstallationIndex {
    buckets: Vec<DependencyBucket>,
    group_count: usize,
}

impl InstallationIndex {
    pub fn new(installations: Vec<Installation>, resolved: &Resolved) -> Self {
        let mut grouped: BTreeMap<(usize, String), Vec<Installation>> = BTreeMap::new();

        for installation in installations {
            let group_index = resolved
                .version_groups
                .index_for(&installation.package_name, &installation.name);
            grouped
                .entry((group_index, installation.name.clone()))
                .or_default()
                .push(installation);
        }

        let buckets = grouped
            .into_iter()
            .map(|((group_index, name), installations)| DependencyBucket {
                group_index,
                name,
                installations,
            })
            .collect();

        Self {
            buckets,
            group_count: resolved.version_groups.group_count(),
        }
    }

    /// Every bucket, in report order
    pub fn buckets(&self) -> &[DependencyBucket] {
        &self.buckets
    }

    /// How many version groups the configuration declares, catch-all included
    pub fn group_count(&self) -> usize {
        self.group_count
    }

    /// Only the buckets whose installations disagree
    pub fn mismatched(&self) -> Vec<&DependencyBucket> {
        self.buckets
            .iter()
            .filter(|bucket| bucket.is_mismatched())
            .collect()
    }

    pub fn mismatch_count(&self) -> usize {
        self.mismatched().len()
    }

    pub fn has_mismatches(&self) -> bool {
        self.buckets.iter().any(DependencyBucket::is_mismatched)
    }
}
