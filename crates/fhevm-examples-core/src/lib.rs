//! Core library for the fhevm-examples toolkit.
//!
//! Implements the documentation-and-scaffolding pipeline for fhevm
//! smart-contract examples: a validated [`registry::Registry`] of example
//! entries, root-confined file loading, GitBook-style document rendering,
//! summary-index upkeep, and standalone-project scaffolding, all driven by
//! the [`pipeline::Generator`] orchestrator.
//!
//! The CLI in the `fhevm-examples` crate is a thin shell over this library.

pub mod docgen;
pub mod error;
pub mod index;
pub mod loader;
pub mod pipeline;
pub mod registry;
pub mod scaffold;
pub mod templates;
