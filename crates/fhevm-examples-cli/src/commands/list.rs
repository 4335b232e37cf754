//! `fhevm-examples list` — show the registered examples by category.

use fhevm_examples_core::registry::Registry;

use crate::output;

pub fn run(registry: &Registry) {
    output::print_header("Registered examples");

    // Categories in order of first appearance, matching the index layout.
    let mut categories: Vec<&str> = Vec::new();
    for entry in registry.entries() {
        if !categories.contains(&entry.category.as_str()) {
            categories.push(&entry.category);
        }
    }

    for category in categories {
        println!("\n{category}:");
        for entry in registry.entries().iter().filter(|e| e.category == category) {
            output::print_key_value(&entry.id, &entry.title);
        }
    }
    println!();
}
