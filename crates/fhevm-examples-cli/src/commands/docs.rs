//! `fhevm-examples docs` — generate documentation for one or all examples.

use std::path::Path;

use anyhow::Result;

use fhevm_examples_core::error::FhevmExamplesError;
use fhevm_examples_core::loader::ProjectRoot;
use fhevm_examples_core::pipeline::Generator;
use fhevm_examples_core::registry::Registry;

use crate::commands::print_valid_ids;
use crate::output;

pub fn run(
    root: &Path,
    registry: &Registry,
    example: Option<&str>,
    all: bool,
    index: &Path,
) -> Result<()> {
    let root = ProjectRoot::new(root);
    let generator = Generator::new(&root, registry).with_index_path(index.to_path_buf());

    if all {
        return run_all(registry, &generator);
    }

    let Some(id) = example else {
        output::print_error("no example given (pass an id or --all)");
        print_valid_ids(registry);
        anyhow::bail!("missing example id");
    };

    output::print_header(&format!("fhevm-examples docs: {id}"));
    match generator.generate(id) {
        Ok(doc) => {
            output::print_success(&format!("wrote {}", doc.output_path.display()));
            output::print_key_value("index", &generator.index_path().display().to_string());
            Ok(())
        }
        Err(FhevmExamplesError::UnknownExample(id)) => {
            output::print_error(&format!("unknown example: {id}"));
            print_valid_ids(registry);
            anyhow::bail!("unknown example: {id}");
        }
        Err(err) => Err(err.into()),
    }
}

fn run_all(registry: &Registry, generator: &Generator<'_>) -> Result<()> {
    output::print_header("fhevm-examples docs: all examples");
    let total = registry.all_ids().len();

    let report = generator.generate_all();
    for doc in &report.succeeded {
        output::print_success(&format!("{} -> {}", doc.id, doc.output_path.display()));
    }
    for (id, err) in &report.failed {
        output::print_error(&format!("{id}: {err}"));
    }

    println!();
    output::print_key_value("generated", &format!("{}/{total}", report.succeeded.len()));
    if report.is_clean() {
        output::print_success("all documents generated");
        Ok(())
    } else {
        let failed_ids: Vec<&str> = report.failed.iter().map(|(id, _)| id.as_str()).collect();
        anyhow::bail!("{} example(s) failed: {}", report.failed.len(), failed_ids.join(", "));
    }
}
