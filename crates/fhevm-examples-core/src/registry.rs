//! The example registry: a static mapping from example id to source files,
//! output location, and index metadata.
//!
//! The registry is fixed at process start. [`Registry::builtin`] covers the
//! stock fhevm examples shipped with this repository; a fork can supply its
//! own entries as a JSON array via [`Registry::load`]. Either way the
//! registry is validated once at load time — duplicate ids or output paths
//! abort before any file I/O happens, so a collision can never surface as a
//! half-written docs tree.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FhevmExamplesError, Result};

/// One registered example: a contract/test source pair plus the metadata
/// needed to render and index its document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExampleEntry {
    /// Unique key, stable across runs (`fhe-counter`, `encrypt-single-value`, ...).
    pub id: String,
    /// Human-readable display name, used as the index link title.
    pub title: String,
    /// Free-text summary, used verbatim as the document lead-in. May be
    /// empty, in which case the renderer falls back to a NatSpec heuristic.
    #[serde(default)]
    pub description: String,
    /// Relative path to the Solidity contract under the project root.
    pub contract_path: PathBuf,
    /// Relative path to the TypeScript test under the project root.
    pub test_path: PathBuf,
    /// Relative path of the generated document; also the anchor used for
    /// duplicate detection in the index.
    pub output_path: PathBuf,
    /// Index grouping key; order of first appearance defines section order.
    pub category: String,
}

/// Ordered, validated collection of [`ExampleEntry`] values.
#[derive(Debug, Clone)]
pub struct Registry {
    entries: Vec<ExampleEntry>,
}

impl Registry {
    /// Build a registry from entries, rejecting duplicate ids and duplicate
    /// output paths.
    pub fn from_entries(entries: Vec<ExampleEntry>) -> Result<Self> {
        for (i, entry) in entries.iter().enumerate() {
            for earlier in &entries[..i] {
                if earlier.id == entry.id {
                    return Err(FhevmExamplesError::DuplicateId(entry.id.clone()));
                }
                if earlier.output_path == entry.output_path {
                    return Err(FhevmExamplesError::DuplicateOutputPath(
                        entry.output_path.clone(),
                    ));
                }
            }
        }
        Ok(Self { entries })
    }

    /// Load a registry from a JSON file containing an array of entries.
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| FhevmExamplesError::RegistryNotFound {
                path: path.to_path_buf(),
                source: e,
            })?;
        let entries: Vec<ExampleEntry> =
            serde_json::from_str(&contents).map_err(|e| FhevmExamplesError::RegistryParse {
                path: path.to_path_buf(),
                source: e,
            })?;
        Self::from_entries(entries)
    }

    /// The built-in registry covering the stock fhevm examples.
    pub fn builtin() -> Self {
        let entries = vec![
            ExampleEntry {
                id: "fhe-counter".into(),
                title: "FHE Counter".into(),
                description: "A basic example of an encrypted counter that can be \
                              incremented and decremented without revealing its value."
                    .into(),
                contract_path: "contracts/FHECounter.sol".into(),
                test_path: "test/FHECounter.ts".into(),
                output_path: "docs/examples/fhe-counter.md".into(),
                category: "Basic".into(),
            },
            ExampleEntry {
                id: "fhe-add".into(),
                title: "FHE Add".into(),
                description: "Adding two encrypted numbers and storing the encrypted sum."
                    .into(),
                contract_path: "contracts/FHEAdd.sol".into(),
                test_path: "test/FHEAdd.ts".into(),
                output_path: "docs/examples/fhe-add.md".into(),
                category: "Basic".into(),
            },
            ExampleEntry {
                id: "encrypt-single-value".into(),
                title: "Encrypt Single Value".into(),
                description: "How to submit a single encrypted input to a contract."
                    .into(),
                contract_path: "contracts/EncryptSingleValue.sol".into(),
                test_path: "test/EncryptSingleValue.ts".into(),
                output_path: "docs/examples/encrypt-single-value.md".into(),
                category: "Encryption".into(),
            },
            ExampleEntry {
                id: "encrypt-multiple-values".into(),
                title: "Encrypt Multiple Values".into(),
                description: "How to pack several encrypted inputs into one transaction."
                    .into(),
                contract_path: "contracts/EncryptMultipleValues.sol".into(),
                test_path: "test/EncryptMultipleValues.ts".into(),
                output_path: "docs/examples/encrypt-multiple-values.md".into(),
                category: "Encryption".into(),
            },
            ExampleEntry {
                id: "user-decrypt-single-value".into(),
                title: "User Decrypt Single Value".into(),
                description: "Granting a user permission to decrypt a single ciphertext \
                              off-chain."
                    .into(),
                contract_path: "contracts/UserDecryptSingleValue.sol".into(),
                test_path: "test/UserDecryptSingleValue.ts".into(),
                output_path: "docs/examples/user-decrypt-single-value.md".into(),
                category: "Decryption".into(),
            },
            ExampleEntry {
                id: "public-decrypt-single-value".into(),
                title: "Public Decrypt Single Value".into(),
                description: "Requesting a public decryption through the decryption oracle."
                    .into(),
                contract_path: "contracts/PublicDecryptSingleValue.sol".into(),
                test_path: "test/PublicDecryptSingleValue.ts".into(),
                output_path: "docs/examples/public-decrypt-single-value.md".into(),
                category: "Decryption".into(),
            },
            ExampleEntry {
                id: "access-control".into(),
                title: "FHE Access Control".into(),
                description: "Using the ACL to control which accounts and contracts may \
                              operate on a ciphertext."
                    .into(),
                contract_path: "contracts/AccessControl.sol".into(),
                test_path: "test/AccessControl.ts".into(),
                output_path: "docs/examples/access-control.md".into(),
                category: "Access Control".into(),
            },
        ];

        // The built-in table is validated in tests; construction cannot fail.
        Self { entries }
    }

    /// Look up an entry by id.
    pub fn lookup(&self, id: &str) -> Result<&ExampleEntry> {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| FhevmExamplesError::UnknownExample(id.to_string()))
    }

    /// All registered ids, in insertion order.
    pub fn all_ids(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.id.as_str()).collect()
    }

    /// All entries, in insertion order.
    pub fn entries(&self) -> &[ExampleEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, output: &str) -> ExampleEntry {
        ExampleEntry {
            id: id.into(),
            title: id.to_uppercase(),
            description: String::new(),
            contract_path: format!("contracts/{id}.sol").into(),
            test_path: format!("test/{id}.ts").into(),
            output_path: output.into(),
            category: "Basic".into(),
        }
    }

    #[test]
    fn test_builtin_is_valid() {
        let reg = Registry::builtin();
        // Re-validate through the constructor to catch table edits.
        assert!(Registry::from_entries(reg.entries.clone()).is_ok());
        assert!(!reg.all_ids().is_empty());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Registry::from_entries(vec![
            entry("a", "docs/a.md"),
            entry("a", "docs/b.md"),
        ]);
        assert!(matches!(result, Err(FhevmExamplesError::DuplicateId(id)) if id == "a"));
    }

    #[test]
    fn test_duplicate_output_path_rejected() {
        let result = Registry::from_entries(vec![
            entry("a", "docs/same.md"),
            entry("b", "docs/same.md"),
        ]);
        assert!(matches!(
            result,
            Err(FhevmExamplesError::DuplicateOutputPath(_))
        ));
    }

    #[test]
    fn test_lookup_unknown() {
        let reg = Registry::builtin();
        assert!(matches!(
            reg.lookup("no-such-example"),
            Err(FhevmExamplesError::UnknownExample(_))
        ));
    }

    #[test]
    fn test_all_ids_insertion_order() {
        let reg = Registry::from_entries(vec![
            entry("z", "docs/z.md"),
            entry("a", "docs/a.md"),
            entry("m", "docs/m.md"),
        ])
        .unwrap();
        assert_eq!(reg.all_ids(), vec!["z", "a", "m"]);
    }

    #[test]
    fn test_load_from_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registry.json");
        let json = serde_json::to_string_pretty(&vec![
            entry("custom", "docs/custom.md"),
        ])
        .unwrap();
        std::fs::write(&path, json).unwrap();

        let reg = Registry::load(&path).unwrap();
        assert_eq!(reg.all_ids(), vec!["custom"]);
        assert_eq!(reg.lookup("custom").unwrap().category, "Basic");
    }

    #[test]
    fn test_load_missing_file() {
        let result = Registry::load(Path::new("/tmp/nonexistent_fhevm_registry.json"));
        assert!(matches!(
            result,
            Err(FhevmExamplesError::RegistryNotFound { .. })
        ));
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registry.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            Registry::load(&path),
            Err(FhevmExamplesError::RegistryParse { .. })
        ));
    }
}
