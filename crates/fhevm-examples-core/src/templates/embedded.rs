//! Compile-time embedded templates.
//!
//! Each constant loads a template file from `templates/` via [`include_str!`].
//! The paths are relative to this source file
//! (`crates/fhevm-examples-core/src/templates/embedded.rs`).
//!
//! ## Adding a new template
//!
//! 1. Place the template file under the appropriate `templates/` subdirectory
//! 2. Add a `pub const` here with `include_str!("../../../../templates/<path>")`
//! 3. Run `cargo build` — if the path is wrong, compilation will fail
//!
//! ## Warning
//!
//! Do NOT rename or move template files without updating the `include_str!`
//! path here, and keep the Handlebars variables in sync with what
//! `docgen::render_document` passes in.

/// GitBook-style document skeleton: lead-in, hint callout, two code tabs.
pub const EXAMPLE_DOC: &str = include_str!("../../../../templates/docs/example.md.tmpl");
