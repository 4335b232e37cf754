//! Project-root-confined file access.
//!
//! Every path declared in the registry is relative to the project root. A
//! malformed registry entry must not be able to read or write outside that
//! root, so absolute paths and `..` traversal are rejected before any
//! filesystem call is made.

use std::path::{Component, Path, PathBuf};

use crate::error::{FhevmExamplesError, Result};

/// Handle to the project root directory all registry paths resolve under.
#[derive(Debug, Clone)]
pub struct ProjectRoot {
    root: PathBuf,
}

impl ProjectRoot {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Resolve a registry-relative path, rejecting anything that would
    /// escape the root.
    pub fn resolve(&self, relative: &Path) -> Result<PathBuf> {
        if relative.is_absolute() {
            return Err(FhevmExamplesError::OutsideRoot(relative.to_path_buf()));
        }
        if relative
            .components()
            .any(|c| matches!(c, Component::ParentDir))
        {
            return Err(FhevmExamplesError::OutsideRoot(relative.to_path_buf()));
        }
        Ok(self.root.join(relative))
    }

    /// Read a source file declared in the registry.
    ///
    /// Missing files are reported as [`FhevmExamplesError::SourceNotFound`]
    /// with the registry-relative path, which is what batch reports show.
    pub fn read(&self, relative: &Path) -> Result<String> {
        let full = self.resolve(relative)?;
        if !full.is_file() {
            return Err(FhevmExamplesError::SourceNotFound(relative.to_path_buf()));
        }
        Ok(std::fs::read_to_string(&full)?)
    }

    /// Write a generated file, creating parent directories as needed.
    /// Overwrites in place; generated documents are last-write-wins.
    pub fn write(&self, relative: &Path, contents: &str) -> Result<()> {
        let full = self.resolve(relative)?;
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&full, contents)?;
        Ok(())
    }
}
