//! Discovery of every package.json in a monorepo
//!
//! When the user supplies source patterns those are expanded as given. When
//! they do not, the workspace layout is probed in a fixed order: the root
//! manifest's `workspaces` declaration (yarn/npm, array or object form),
//! then `lerna.json`, then `pnpm-workspace.yaml`, then a conventional
//! `packages/*` fallback. A probe whose file is missing or malformed simply
//! does not match; discovery never fails, it only finds fewer files.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::constants::paths;
use crate::disk::Disk;
use crate::manifest::Manifest;

pub struct WorkspaceDiscovery<'a> {
    disk: &'a dyn Disk,
}

impl<'a> WorkspaceDiscovery<'a> {
    pub fn new(disk: &'a dyn Disk) -> Self {
        Self { disk }
    }

    /// Expand the source patterns into manifest paths, in pattern order.
    ///
    /// An empty `source_patterns` means "no explicit sources": the workspace
    /// cascade decides the patterns instead. Patterns that match nothing
    /// contribute no paths.
    pub fn discover(&self, source_patterns: &[String]) -> Vec<PathBuf> {
        let patterns = if source_patterns.is_empty() {
            self.cascade_patterns()
        } else {
            source_patterns.to_vec()
        };

        patterns
            .iter()
            .flat_map(|pattern| self.disk.glob(pattern))
            .collect()
    }

    /// Run the workspace-manager probes in priority order and derive glob
    /// patterns from the first that yields any.
    fn cascade_patterns(&self) -> Vec<String> {
        let probes: [fn(&Self) -> Option<Vec<String>>; 3] = [
            Self::manifest_patterns,
            Self::lerna_patterns,
            Self::pnpm_patterns,
        ];

        probes
            .iter()
            .find_map(|probe| probe(self).filter(|patterns| !patterns.is_empty()))
            .map(with_root_pattern)
            .unwrap_or_else(|| {
                paths::DEFAULT_SOURCES
                    .iter()
                    .map(|pattern| pattern.to_string())
                    .collect()
            })
    }

    /// yarn and npm: `workspaces` in the root manifest, as a bare array or
    /// an object with a `packages` array.
    fn manifest_patterns(&self) -> Option<Vec<String>> {
        Manifest::load(self.disk, Path::new(paths::PACKAGE_JSON))
            .ok()?
            .workspace_patterns()
    }

    /// lerna: a `packages` array in `lerna.json`.
    fn lerna_patterns(&self) -> Option<Vec<String>> {
        let raw = self.disk.read_text(Path::new(paths::LERNA_JSON)).ok()?;
        let lerna: Value = serde_json::from_str(&raw).ok()?;

        lerna
            .get("packages")?
            .as_array()?
            .iter()
            .map(|pattern| pattern.as_str().map(str::to_string))
            .collect()
    }

    /// pnpm: a `packages` array in `pnpm-workspace.yaml`.
    fn pnpm_patterns(&self) -> Option<Vec<String>> {
        let workspace = self
            .disk
            .read_yaml(Path::new(paths::PNPM_WORKSPACE_YAML))
            .ok()?;

        workspace
            .get("packages")?
            .as_sequence()?
            .iter()
            .map(|pattern| pattern.as_str().map(str::to_string))
            .collect()
    }
}

/// Cascade-derived patterns name package directories; each becomes a
/// manifest pattern, and the root manifest itself joins the front.
fn with_root_pattern(patterns: Vec<String>) -> Vec<String> {
    std::iter::once(paths::ROOT_SOURCE.to_string())
        .chain(
            patterns
                .into_iter()
                .map(|pattern| format!("{pattern}/package.json")),
        )
        .collect()
}
