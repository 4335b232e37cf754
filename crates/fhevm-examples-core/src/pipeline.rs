//! Orchestration of document generation runs.
//!
//! A single-id run is lookup → load → render → write → index. A batch run
//! renders and writes every document first, then applies all index updates,
//! so a failure partway through can never leave the index pointing at a
//! document that was never written.

use std::path::{Path, PathBuf};

use crate::docgen;
use crate::error::{FhevmExamplesError, Result};
use crate::index;
use crate::loader::ProjectRoot;
use crate::registry::Registry;

/// Default location of the summary index, relative to the project root.
pub const DEFAULT_INDEX_PATH: &str = "docs/SUMMARY.md";

/// One successfully written document.
#[derive(Debug, Clone)]
pub struct GeneratedDoc {
    pub id: String,
    pub title: String,
    pub category: String,
    pub output_path: PathBuf,
}

/// Outcome of a batch run. Failures are per-item; nothing short-circuits.
#[derive(Debug)]
pub struct RunReport {
    pub succeeded: Vec<GeneratedDoc>,
    pub failed: Vec<(String, FhevmExamplesError)>,
}

impl RunReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Drives the registry, loader, renderer, and index updater for one
/// invocation.
pub struct Generator<'a> {
    root: &'a ProjectRoot,
    registry: &'a Registry,
    index_path: PathBuf,
}

impl<'a> Generator<'a> {
    pub fn new(root: &'a ProjectRoot, registry: &'a Registry) -> Self {
        Self {
            root,
            registry,
            index_path: PathBuf::from(DEFAULT_INDEX_PATH),
        }
    }

    /// Override the project-relative index location.
    pub fn with_index_path(mut self, index_path: impl Into<PathBuf>) -> Self {
        self.index_path = index_path.into();
        self
    }

    /// Render one example's document and write it to its output path.
    /// Does not touch the index.
    fn render_one(&self, id: &str) -> Result<GeneratedDoc> {
        let entry = self.registry.lookup(id)?;
        let contract_content = self.root.read(&entry.contract_path)?;
        let test_content = self.root.read(&entry.test_path)?;

        let document = docgen::render_document(entry, &contract_content, &test_content)?;
        self.root.write(&entry.output_path, &document)?;

        tracing::info!(id, output = %entry.output_path.display(), "wrote document");
        Ok(GeneratedDoc {
            id: entry.id.clone(),
            title: entry.title.clone(),
            category: entry.category.clone(),
            output_path: entry.output_path.clone(),
        })
    }

    /// Add a written document to the summary index (idempotent).
    fn update_index(&self, doc: &GeneratedDoc) -> Result<()> {
        let index_path = self.root.resolve(&self.index_path)?;
        let output_path = self.root.resolve(&doc.output_path)?;
        index::upsert(&index_path, &doc.category, &doc.title, &output_path)
    }

    /// Generate one example end to end: document plus index entry.
    pub fn generate(&self, id: &str) -> Result<GeneratedDoc> {
        let doc = self.render_one(id)?;
        self.update_index(&doc)?;
        Ok(doc)
    }

    /// Generate every registered example, render-all-then-index-all.
    ///
    /// Per-item failures are recorded and iteration continues; the index is
    /// only updated for documents that were actually written.
    pub fn generate_all(&self) -> RunReport {
        let mut rendered = Vec::new();
        let mut failed = Vec::new();

        for id in self.registry.all_ids() {
            match self.render_one(id) {
                Ok(doc) => rendered.push(doc),
                Err(err) => {
                    tracing::warn!(id, error = %err, "document generation failed");
                    failed.push((id.to_string(), err));
                }
            }
        }

        let mut succeeded = Vec::new();
        for doc in rendered {
            match self.update_index(&doc) {
                Ok(()) => succeeded.push(doc),
                Err(err) => {
                    // The document itself is written and valid.
                    tracing::warn!(id = %doc.id, error = %err, "index update failed");
                    failed.push((doc.id.clone(), err));
                }
            }
        }

        RunReport { succeeded, failed }
    }

    /// Project-relative path of the summary index.
    pub fn index_path(&self) -> &Path {
        &self.index_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ExampleEntry;

    fn entry(id: &str, category: &str) -> ExampleEntry {
        let pascal: String = id
            .split('-')
            .map(|w| {
                let mut c = w.chars();
                c.next().map(|f| f.to_ascii_uppercase()).into_iter().chain(c).collect::<String>()
            })
            .collect();
        ExampleEntry {
            id: id.into(),
            title: pascal.clone(),
            description: format!("Example {id}."),
            contract_path: format!("contracts/{pascal}.sol").into(),
            test_path: format!("test/{pascal}.ts").into(),
            output_path: format!("docs/examples/{id}.md").into(),
            category: category.into(),
        }
    }

    fn write_sources(root: &ProjectRoot, e: &ExampleEntry) {
        let contract = root.path().join(&e.contract_path);
        std::fs::create_dir_all(contract.parent().unwrap()).unwrap();
        std::fs::write(&contract, format!("contract {} {{}}\n", e.title)).unwrap();
        let test = root.path().join(&e.test_path);
        std::fs::create_dir_all(test.parent().unwrap()).unwrap();
        std::fs::write(&test, format!("// test for {}\n", e.id)).unwrap();
    }

    fn fixture(dir: &tempfile::TempDir, entries: Vec<ExampleEntry>) -> (ProjectRoot, Registry) {
        let root = ProjectRoot::new(dir.path());
        for e in &entries {
            write_sources(&root, e);
        }
        (root, Registry::from_entries(entries).unwrap())
    }

    #[test]
    fn test_single_generation_writes_doc_and_index() {
        let dir = tempfile::tempdir().unwrap();
        let (root, registry) = fixture(&dir, vec![entry("fhe-counter", "Basic")]);
        let generator = Generator::new(&root, &registry);

        let doc = generator.generate("fhe-counter").unwrap();
        assert_eq!(doc.id, "fhe-counter");
        assert!(dir.path().join("docs/examples/fhe-counter.md").is_file());

        let index = std::fs::read_to_string(dir.path().join("docs/SUMMARY.md")).unwrap();
        assert!(index.contains("* [FheCounter](examples/fhe-counter.md)"));
    }

    #[test]
    fn test_unknown_id_fails() {
        let dir = tempfile::tempdir().unwrap();
        let (root, registry) = fixture(&dir, vec![entry("fhe-counter", "Basic")]);
        let generator = Generator::new(&root, &registry);
        assert!(matches!(
            generator.generate("nope"),
            Err(FhevmExamplesError::UnknownExample(_))
        ));
    }

    #[test]
    fn test_regeneration_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let (root, registry) = fixture(&dir, vec![entry("fhe-counter", "Basic")]);
        let generator = Generator::new(&root, &registry);

        generator.generate("fhe-counter").unwrap();
        let doc_first =
            std::fs::read_to_string(dir.path().join("docs/examples/fhe-counter.md")).unwrap();
        generator.generate("fhe-counter").unwrap();
        let doc_second =
            std::fs::read_to_string(dir.path().join("docs/examples/fhe-counter.md")).unwrap();

        assert_eq!(doc_first, doc_second);
        let index = std::fs::read_to_string(dir.path().join("docs/SUMMARY.md")).unwrap();
        assert_eq!(index.matches("fhe-counter.md").count(), 1);
    }

    #[test]
    fn test_batch_continues_past_failures() {
        let dir = tempfile::tempdir().unwrap();
        let (root, registry) = fixture(
            &dir,
            vec![
                entry("fhe-counter", "Basic"),
                entry("fhe-add", "Basic"),
                entry("access-control", "Access Control"),
            ],
        );
        // Delete the middle example's contract.
        std::fs::remove_file(dir.path().join("contracts/FheAdd.sol")).unwrap();

        let generator = Generator::new(&root, &registry);
        let report = generator.generate_all();

        assert!(!report.is_clean());
        assert_eq!(report.succeeded.len(), 2);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, "fhe-add");
        assert!(matches!(
            report.failed[0].1,
            FhevmExamplesError::SourceNotFound(_)
        ));

        assert!(dir.path().join("docs/examples/fhe-counter.md").is_file());
        assert!(!dir.path().join("docs/examples/fhe-add.md").exists());
        assert!(dir.path().join("docs/examples/access-control.md").is_file());

        let index = std::fs::read_to_string(dir.path().join("docs/SUMMARY.md")).unwrap();
        assert_eq!(index.matches("](examples/").count(), 2);
        assert!(!index.contains("fhe-add.md"));
    }

    #[test]
    fn test_batch_groups_categories_in_registry_order() {
        let dir = tempfile::tempdir().unwrap();
        let (root, registry) = fixture(
            &dir,
            vec![
                entry("fhe-counter", "Basic"),
                entry("encrypt-single-value", "Encryption"),
                entry("fhe-add", "Basic"),
            ],
        );
        let generator = Generator::new(&root, &registry);
        let report = generator.generate_all();
        assert!(report.is_clean());

        let index = std::fs::read_to_string(dir.path().join("docs/SUMMARY.md")).unwrap();
        assert_eq!(index.matches("## Basic").count(), 1);
        let basic = index.find("## Basic").unwrap();
        let encryption = index.find("## Encryption").unwrap();
        let counter = index.find("fhe-counter.md").unwrap();
        let add = index.find("fhe-add.md").unwrap();
        // Both Basic links sit inside the Basic section.
        assert!(basic < counter && counter < add);
        assert!(basic < encryption);
    }

    #[test]
    fn test_custom_index_path() {
        let dir = tempfile::tempdir().unwrap();
        let (root, registry) = fixture(&dir, vec![entry("fhe-counter", "Basic")]);
        let generator = Generator::new(&root, &registry).with_index_path("docs/INDEX.md");
        generator.generate("fhe-counter").unwrap();
        assert!(dir.path().join("docs/INDEX.md").is_file());
        assert!(!dir.path().join("docs/SUMMARY.md").exists());
    }
}
