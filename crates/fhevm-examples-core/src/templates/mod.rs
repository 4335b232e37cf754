//! Template system for document generation.
//!
//! Templates are embedded into the binary at compile-time via [`include_str!`]
//! in the [`embedded`] module, then rendered at runtime with Handlebars via
//! the [`renderer::TemplateRenderer`].
//!
//! ## Template variables
//!
//! Templates use Handlebars syntax with triple-stache (`{{{var}}}`) so that
//! embedded Solidity/TypeScript source is injected raw, never HTML-escaped.
//! Variables for the document template:
//! - `{{{description}}}` — lead-in text
//! - `{{{contract_tab}}}` / `{{{test_tab}}}` — tab titles
//! - `{{{contract_code}}}` / `{{{test_code}}}` — full source contents
//!
//! The GitBook `{% hint %}` / `{% tabs %}` markers in the template are plain
//! text to Handlebars and pass through untouched.

pub mod embedded;
pub mod renderer;
