//! The persisted configuration file
//!
//! Loaded from `.versyncrc.json`, `.versyncrc` or `versync.json` in the
//! working directory, or from an explicit `--config` path. Every field is
//! optional; a missing file is simply the empty configuration. A file that
//! exists but cannot be read or parsed is a hard error, because resolution
//! must not proceed with a policy the user did not write.

use std::io;
use std::path::Path;

use serde::Deserialize;

use crate::constants::paths;
use crate::disk::Disk;
use crate::error::VersyncError;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RcConfig {
    pub source: Option<Vec<String>>,
    pub filter: Option<String>,
    pub indent: Option<String>,
    pub semver_range: Option<String>,
    pub sort_az: Option<Vec<String>>,
    pub sort_first: Option<Vec<String>>,
    pub semver_groups: Option<Vec<SemverGroupConfig>>,
    pub version_groups: Option<Vec<VersionGroupConfig>>,
}

/// One semver group as written in the rcfile: which packages and dependency
/// names it claims, and the range they should carry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemverGroupConfig {
    pub range: String,
    pub packages: Vec<String>,
    pub dependencies: Vec<String>,
}

/// One version group as written in the rcfile: which packages and dependency
/// names must agree with each other, isolated from everything else.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionGroupConfig {
    pub packages: Vec<String>,
    pub dependencies: Vec<String>,
}

impl RcConfig {
    /// Load the persisted configuration.
    ///
    /// With an explicit path, any failure is fatal. Otherwise the default
    /// locations are searched in order, where only "file does not exist"
    /// moves the search along.
    pub fn load(disk: &dyn Disk, explicit_path: Option<&Path>) -> Result<Self, VersyncError> {
        if let Some(path) = explicit_path {
            let raw = disk.read_text(path)?;
            return Self::parse(path, &raw);
        }

        for candidate in paths::RC_FILES {
            let path = Path::new(candidate);
            match disk.read_text(path) {
                Ok(raw) => return Self::parse(path, &raw),
                Err(VersyncError::FileReadError { ref source, .. })
                    if source.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(e),
            }
        }

        Ok(Self::default())
    }

    fn parse(path: &Path, raw: &str) -> Result<Self, VersyncError> {
        serde_json::from_str(raw).map_err(|e| VersyncError::ConfigurationError {
            message: format!("'{}' is not a valid configuration file: {e}", path.display()),
        })
    }
}
