//! Filesystem access for the resolution pipeline
//!
//! Every read the pipeline performs goes through the [`Disk`] trait so that
//! discovery and configuration loading can be exercised against an in-memory
//! disk in tests. The production implementation resolves relative paths and
//! glob patterns against a fixed working directory.

use std::path::{Path, PathBuf};

use crate::error::VersyncError;

/// Read-mostly filesystem capability used by the resolution pipeline.
pub trait Disk {
    /// Expand a glob pattern into the ordered list of matching paths.
    ///
    /// A pattern that matches nothing contributes an empty list; an invalid
    /// pattern is reported on stderr and likewise contributes nothing.
    fn glob(&self, pattern: &str) -> Vec<PathBuf>;

    /// Read a file as UTF-8 text.
    fn read_text(&self, path: &Path) -> Result<String, VersyncError>;

    /// Read and parse a YAML file.
    fn read_yaml(&self, path: &Path) -> Result<serde_yaml::Value, VersyncError>;

    /// Write text to a file, replacing any existing contents.
    fn write_text(&self, path: &Path, contents: &str) -> Result<(), VersyncError>;
}

/// The real filesystem, rooted at a working directory.
pub struct FsDisk {
    cwd: PathBuf,
}

impl FsDisk {
    /// A disk rooted at the process working directory.
    pub fn new() -> Result<Self, VersyncError> {
        Ok(Self {
            cwd: std::env::current_dir()?,
        })
    }

    /// A disk rooted at an explicit directory.
    pub fn with_cwd(cwd: impl Into<PathBuf>) -> Self {
        Self { cwd: cwd.into() }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }
}

impl Disk for FsDisk {
    fn glob(&self, pattern: &str) -> Vec<PathBuf> {
        let full_pattern = self.cwd.join(pattern);
        let full_pattern = full_pattern.to_string_lossy();

        match glob::glob(&full_pattern) {
            Ok(paths) => paths.flatten().filter(|path| path.is_file()).collect(),
            Err(e) => {
                eprintln!(
                    "{} Invalid glob pattern '{}': {}",
                    console::style("⚠").yellow(),
                    pattern,
                    e
                );
                Vec::new()
            }
        }
    }

    fn read_text(&self, path: &Path) -> Result<String, VersyncError> {
        let full_path = self.resolve(path);
        std::fs::read_to_string(&full_path).map_err(|e| VersyncError::FileReadError {
            path: full_path,
            source: e,
        })
    }

    fn read_yaml(&self, path: &Path) -> Result<serde_yaml::Value, VersyncError> {
        let full_path = self.resolve(path);
        let text = self.read_text(path)?;
        serde_yaml::from_str(&text).map_err(|e| VersyncError::YamlParseError {
            path: full_path,
            source: e,
        })
    }

    fn write_text(&self, path: &Path, contents: &str) -> Result<(), VersyncError> {
        let full_path = self.resolve(path);
        std::fs::write(&full_path, contents).map_err(|e| VersyncError::FileWriteError {
            path: full_path,
            source: e,
        })
    }
}
