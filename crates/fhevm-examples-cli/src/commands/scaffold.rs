//! `fhevm-examples scaffold` — create a standalone Hardhat project for one
//! example.
//!
//! With no id on the command line, prompts interactively over the
//! registered examples.

use std::path::Path;

use anyhow::Result;
use dialoguer::Select;

use fhevm_examples_core::error::FhevmExamplesError;
use fhevm_examples_core::loader::ProjectRoot;
use fhevm_examples_core::registry::Registry;
use fhevm_examples_core::scaffold;

use crate::commands::print_valid_ids;
use crate::output;

pub fn run(
    root: &Path,
    registry: &Registry,
    example: Option<&str>,
    template: &Path,
    dest: &Path,
) -> Result<()> {
    let id = match example {
        Some(id) => id.to_string(),
        None => {
            let labels: Vec<String> = registry
                .entries()
                .iter()
                .map(|e| format!("{} — {}", e.id, e.title))
                .collect();
            let selection = Select::new()
                .with_prompt("Select an example")
                .items(&labels)
                .default(0)
                .interact()?;
            registry.entries()[selection].id.clone()
        }
    };

    output::print_header(&format!("fhevm-examples scaffold: {id}"));

    let entry = match registry.lookup(&id) {
        Ok(entry) => entry,
        Err(FhevmExamplesError::UnknownExample(id)) => {
            output::print_error(&format!("unknown example: {id}"));
            print_valid_ids(registry);
            anyhow::bail!("unknown example: {id}");
        }
        Err(err) => return Err(err.into()),
    };

    let root = ProjectRoot::new(root);
    output::print_step(1, 2, &format!("Copying template from {}", template.display()));
    output::print_step(2, 2, &format!("Overlaying {} sources", entry.id));
    let out = scaffold::scaffold(entry, &root, template, dest)?;

    output::print_success(&format!(
        "Project '{}' created at {}",
        entry.title,
        out.dest.display()
    ));
    output::print_key_value("contract", &out.contract_file.display().to_string());
    output::print_key_value("test", &out.test_file.display().to_string());
    println!();
    println!("  Next steps:");
    println!("    cd {}", out.dest.display());
    println!("    npm install");
    println!("    npx hardhat test");
    println!();

    Ok(())
}
