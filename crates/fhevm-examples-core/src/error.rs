//! Unified error types for the fhevm-examples toolkit.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur during fhevm-examples operations.
#[derive(Error, Debug)]
pub enum FhevmExamplesError {
    // --- Registry configuration ---

    /// A registry file was requested but does not exist.
    #[error("registry file not found at {path}")]
    RegistryNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The registry file exists but contains invalid JSON.
    #[error("failed to parse registry at {path}")]
    RegistryParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Two registry entries share the same `id`.
    #[error("duplicate example id in registry: {0}")]
    DuplicateId(String),

    /// Two registry entries share the same `output_path`, which would
    /// silently overwrite one document with the other.
    #[error("duplicate output path in registry: {0}")]
    DuplicateOutputPath(PathBuf),

    // --- Lookup ---

    /// The requested id is not registered.
    #[error("unknown example: {0}")]
    UnknownExample(String),

    // --- File loading ---

    /// A contract or test file declared in the registry is missing on disk.
    #[error("source file not found: {0}")]
    SourceNotFound(PathBuf),

    /// A registry path is absolute or traverses outside the project root.
    #[error("path escapes the project root: {0}")]
    OutsideRoot(PathBuf),

    // --- Scaffolding ---

    /// The scaffold destination already exists; it is never overwritten.
    #[error("destination directory already exists: {0}")]
    DestinationExists(PathBuf),

    /// The base template directory to copy from is missing.
    #[error("template directory not found: {0}")]
    TemplateNotFound(PathBuf),

    /// The copied template's package.json could not be parsed for patching.
    #[error("failed to parse manifest at {path}")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // --- Rendering ---

    /// Handlebars template rendering failed (strict mode: missing variables).
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    // --- General ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A catch-all for errors from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Alias for `Result<T, FhevmExamplesError>`.
pub type Result<T> = std::result::Result<T, FhevmExamplesError>;
