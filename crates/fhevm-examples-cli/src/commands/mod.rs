//! CLI command implementations.
//!
//! Each submodule exposes a `run` function driven by `main`. Commands print
//! human-readable progress via the [`crate::output`] helpers and delegate
//! all real work to `fhevm-examples-core`.

pub mod docs;
pub mod list;
pub mod scaffold;

use fhevm_examples_core::registry::Registry;

use crate::output;

/// Print the full set of valid example ids, used whenever an unknown id is
/// given on the command line.
pub fn print_valid_ids(registry: &Registry) {
    println!("\nValid examples:");
    for entry in registry.entries() {
        output::print_key_value(&entry.id, &entry.title);
    }
}
