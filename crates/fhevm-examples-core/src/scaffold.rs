//! Scaffold mode: turn one example into a standalone Hardhat project.
//!
//! Copies the base template tree to a fresh destination, clears the
//! template's stock example files, overlays the selected entry's contract
//! and test, and patches the generated `package.json` so the new project
//! identifies itself. The template tree is otherwise opaque; nothing in it
//! is rewritten or validated.

use std::path::{Path, PathBuf};

use serde_json::Value;
use walkdir::WalkDir;

use crate::error::{FhevmExamplesError, Result};
use crate::loader::ProjectRoot;
use crate::registry::ExampleEntry;

/// Template subdirectories whose top-level files are example-specific
/// placeholders, cleared before the overlay.
const PLACEHOLDER_DIRS: [&str; 2] = ["contracts", "test"];

/// Directories never copied out of the template.
const SKIP_DIRS: [&str; 2] = ["node_modules", ".git"];

/// Files written by a scaffold run, for reporting.
#[derive(Debug, Clone)]
pub struct ScaffoldOutput {
    pub dest: PathBuf,
    pub contract_file: PathBuf,
    pub test_file: PathBuf,
}

/// Create a standalone project for `entry` at `dest`.
///
/// Fails with [`FhevmExamplesError::DestinationExists`] rather than
/// overwriting; scaffold targets are meant to be fresh project roots. The
/// example sources are read before anything is created, so a missing source
/// leaves no partial destination behind.
pub fn scaffold(
    entry: &ExampleEntry,
    root: &ProjectRoot,
    template_dir: &Path,
    dest: &Path,
) -> Result<ScaffoldOutput> {
    if !template_dir.is_dir() {
        return Err(FhevmExamplesError::TemplateNotFound(
            template_dir.to_path_buf(),
        ));
    }
    if dest.exists() {
        return Err(FhevmExamplesError::DestinationExists(dest.to_path_buf()));
    }

    let contract_content = root.read(&entry.contract_path)?;
    let test_content = root.read(&entry.test_path)?;

    copy_tree(template_dir, dest)?;
    clear_placeholders(dest)?;

    let contract_file = overlay(dest, "contracts", &entry.contract_path, &contract_content)?;
    let test_file = overlay(dest, "test", &entry.test_path, &test_content)?;

    patch_manifest(dest, entry)?;

    tracing::info!(id = %entry.id, dest = %dest.display(), "scaffolded project");
    Ok(ScaffoldOutput {
        dest: dest.to_path_buf(),
        contract_file,
        test_file,
    })
}

/// Copy the template tree, skipping `node_modules` and `.git`.
fn copy_tree(template_dir: &Path, dest: &Path) -> Result<()> {
    let walker = WalkDir::new(template_dir).into_iter().filter_entry(|e| {
        !SKIP_DIRS
            .iter()
            .any(|skip| e.file_name() == std::ffi::OsStr::new(skip))
    });

    for item in walker {
        let item = item.map_err(|e| {
            FhevmExamplesError::Io(e.into_io_error().unwrap_or_else(|| {
                std::io::Error::other("walkdir loop while copying template")
            }))
        })?;
        let relative = item
            .path()
            .strip_prefix(template_dir)
            .expect("walkdir yields paths under its root");
        let target = dest.join(relative);

        if item.file_type().is_dir() {
            std::fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::copy(item.path(), &target)?;
        }
    }
    Ok(())
}

/// Remove the template's stock example files from the copy.
///
/// Only regular files directly under `contracts/` and `test/` are removed;
/// the base template keeps exactly its stock example pair there.
fn clear_placeholders(dest: &Path) -> Result<()> {
    for dir in PLACEHOLDER_DIRS {
        let dir = dest.join(dir);
        if !dir.is_dir() {
            continue;
        }
        for item in std::fs::read_dir(&dir)? {
            let path = item?.path();
            if path.is_file() {
                tracing::debug!(file = %path.display(), "removing template placeholder");
                std::fs::remove_file(&path)?;
            }
        }
    }
    Ok(())
}

/// Write one overlaid source file into the scaffold, keeping its base name.
fn overlay(dest: &Path, subdir: &str, source_path: &Path, content: &str) -> Result<PathBuf> {
    let file_name = source_path
        .file_name()
        .ok_or_else(|| FhevmExamplesError::SourceNotFound(source_path.to_path_buf()))?;
    let target_dir = dest.join(subdir);
    std::fs::create_dir_all(&target_dir)?;
    let target = target_dir.join(file_name);
    std::fs::write(&target, content)?;
    Ok(target)
}

/// Rewrite the scaffold's `package.json` name and description, preserving
/// every other field.
fn patch_manifest(dest: &Path, entry: &ExampleEntry) -> Result<()> {
    let manifest_path = dest.join("package.json");
    if !manifest_path.is_file() {
        tracing::warn!(path = %manifest_path.display(), "template has no package.json to patch");
        return Ok(());
    }

    let raw = std::fs::read_to_string(&manifest_path)?;
    let mut manifest: Value =
        serde_json::from_str(&raw).map_err(|e| FhevmExamplesError::ManifestParse {
            path: manifest_path.clone(),
            source: e,
        })?;

    if let Some(obj) = manifest.as_object_mut() {
        obj.insert("name".into(), Value::String(format!("fhevm-example-{}", entry.id)));
        let description = if entry.description.is_empty() {
            entry.title.clone()
        } else {
            entry.description.clone()
        };
        obj.insert("description".into(), Value::String(description));
    }

    let mut pretty = serde_json::to_string_pretty(&manifest)
        .map_err(|e| FhevmExamplesError::ManifestParse {
            path: manifest_path.clone(),
            source: e,
        })?;
    pretty.push('\n');
    std::fs::write(&manifest_path, pretty)?;
    Ok(())
}
