//! package.json loading, inspection and mutation
//!
//! A [`Manifest`] keeps the parsed JSON value alongside the raw text it was
//! parsed from. Property order is preserved end to end so that writing a
//! manifest back after an edit only changes the entries that were edited.

use std::path::{Path, PathBuf};

use miette::{NamedSource, SourceSpan};
use serde_json::Value;

use crate::disk::Disk;
use crate::error::{JsonParseError, VersyncError};
use crate::utils::json::to_json_string;

/// The places a version specifier can live in a package.json.
///
/// `Workspace` is the package's own `version` property: other packages in
/// the monorepo may depend on this package, so its declared version takes
/// part in version comparison like any dependency entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencyType {
    Dev,
    Overrides,
    Peer,
    PnpmOverrides,
    Prod,
    Resolutions,
    Workspace,
}

impl DependencyType {
    pub const ALL: [Self; 7] = [
        Self::Dev,
        Self::Overrides,
        Self::Peer,
        Self::PnpmOverrides,
        Self::Prod,
        Self::Resolutions,
        Self::Workspace,
    ];

    /// The manifest property this type reads from, as shown in reports.
    pub fn property_name(self) -> &'static str {
        match self {
            Self::Dev => "devDependencies",
            Self::Overrides => "overrides",
            Self::Peer => "peerDependencies",
            Self::PnpmOverrides => "pnpm.overrides",
            Self::Prod => "dependencies",
            Self::Resolutions => "resolutions",
            Self::Workspace => "version",
        }
    }
}

/// One package.json, parsed but order-preserving.
#[derive(Debug, Clone)]
pub struct Manifest {
    pub file_path: PathBuf,
    pub raw: String,
    pub contents: Value,
}

impl Manifest {
    pub fn load(disk: &dyn Disk, path: &Path) -> Result<Self, VersyncError> {
        let raw = disk.read_text(path)?;

        let contents = serde_json::from_str(&raw).map_err(|e| {
            let span = error_span(&raw, &e);

            VersyncError::JsonParseError(Box::new(JsonParseError {
                file: path.display().to_string(),
                source_code: NamedSource::new(path.display().to_string(), raw.clone()),
                span,
                source: e,
            }))
        })?;

        Ok(Self {
            file_path: path.to_path_buf(),
            raw,
            contents,
        })
    }

    pub fn load_all(disk: &dyn Disk, paths: &[PathBuf]) -> Result<Vec<Self>, VersyncError> {
        paths.iter().map(|path| Self::load(disk, path)).collect()
    }

    pub fn name(&self) -> Option<&str> {
        self.contents.get("name").and_then(Value::as_str)
    }

    pub fn version(&self) -> Option<&str> {
        self.contents.get("version").and_then(Value::as_str)
    }

    /// The glob patterns a root manifest declares for its workspace
    /// packages, from `workspaces` as an array or `workspaces.packages`.
    ///
    /// A declaration containing anything other than strings does not count
    /// as a pattern list.
    pub fn workspace_patterns(&self) -> Option<Vec<String>> {
        let workspaces = self.contents.get("workspaces")?;
        let patterns = match workspaces {
            Value::Array(_) => workspaces,
            Value::Object(_) => workspaces.get("packages")?,
            _ => return None,
        };

        patterns
            .as_array()?
            .iter()
            .map(|pattern| pattern.as_str().map(str::to_string))
            .collect()
    }

    /// The `(name, specifier)` pairs declared under one dependency type.
    ///
    /// Entries whose value is not a string (npm allows nested objects under
    /// `overrides`) are skipped.
    pub fn entries(&self, dependency_type: DependencyType) -> Vec<(String, String)> {
        if dependency_type == DependencyType::Workspace {
            return match (self.name(), self.version()) {
                (Some(name), Some(version)) => vec![(name.to_string(), version.to_string())],
                _ => Vec::new(),
            };
        }

        self.block(dependency_type)
            .and_then(Value::as_object)
            .map(|block| {
                block
                    .iter()
                    .filter_map(|(name, specifier)| {
                        specifier
                            .as_str()
                            .map(|specifier| (name.clone(), specifier.to_string()))
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn block(&self, dependency_type: DependencyType) -> Option<&Value> {
        match dependency_type {
            DependencyType::PnpmOverrides => self.contents.get("pnpm")?.get("overrides"),
            DependencyType::Workspace => None,
            other => self.contents.get(other.property_name()),
        }
    }

    /// Point an existing entry at a new specifier.
    ///
    /// Returns whether the manifest changed; entries that are absent or
    /// already at the target specifier are left alone.
    pub fn set_specifier(
        &mut self,
        dependency_type: DependencyType,
        name: &str,
        specifier: &str,
    ) -> bool {
        let slot = match dependency_type {
            DependencyType::Workspace => {
                if self.name() != Some(name) {
                    return false;
                }
                self.contents.get_mut("version")
            }
            DependencyType::PnpmOverrides => self
                .contents
                .get_mut("pnpm")
                .and_then(|pnpm| pnpm.get_mut("overrides"))
                .and_then(|overrides| overrides.get_mut(name)),
            other => self
                .contents
                .get_mut(other.property_name())
                .and_then(|block| block.get_mut(name)),
        };

        match slot {
            Some(value) if value.as_str() != Some(specifier) => {
                *value = Value::String(specifier.to_string());
                true
            }
            _ => false,
        }
    }

    /// Serialise `contents` with the given indent, property order intact.
    pub fn to_pretty_string(&self, indent: &str) -> Result<String, VersyncError> {
        to_json_string(&self.contents, indent)
    }

    pub fn write(&self, disk: &dyn Disk, indent: &str) -> Result<(), VersyncError> {
        disk.write_text(&self.file_path, &self.to_pretty_string(indent)?)
    }

    /// Hoist the named top-level properties to the front, in the given
    /// order. Every other property keeps its original relative order.
    pub fn sort_first_properties(&mut self, properties: &[String]) {
        let Some(object) = self.contents.as_object_mut() else {
            return;
        };

        let mut front: Vec<(String, Value)> = Vec::new();
        let mut rest: Vec<(String, Value)> = Vec::new();
        for (key, value) in std::mem::take(object) {
            if properties.contains(&key) {
                front.push((key, value));
            } else {
                rest.push((key, value));
            }
        }
        front.sort_by_key(|(key, _)| properties.iter().position(|property| property == key));

        object.extend(front);
        object.extend(rest);
    }

    /// Alphabetise the members of each named top-level property: object
    /// members by key, string arrays by value. Other shapes are left alone.
    pub fn sort_az_properties(&mut self, properties: &[String]) {
        for property in properties {
            match self.contents.get_mut(property) {
                Some(Value::Object(members)) => {
                    let mut entries: Vec<(String, Value)> =
                        std::mem::take(members).into_iter().collect();
                    entries.sort_by(|(a, _), (b, _)| a.cmp(b));
                    members.extend(entries);
                }
                Some(Value::Array(members)) if members.iter().all(Value::is_string) => {
                    members.sort_by(|a, b| a.as_str().cmp(&b.as_str()));
                }
                _ => {}
            }
        }
    }
}

/// Locate a JSON syntax error within the raw text for the diagnostic label.
fn error_span(raw: &str, error: &serde_json::Error) -> Option<SourceSpan> {
    let line = error.line();
    if line == 0 || raw.is_empty() {
        return None;
    }

    let offset = raw
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum::<usize>()
        + error.column().saturating_sub(1);
    let offset = offset.min(raw.len() - 1);

    Some(SourceSpan::new(offset.into(), 1))
}
