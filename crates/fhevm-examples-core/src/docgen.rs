//! Document-mode rendering: one example's contract/test pair into a
//! GitBook-style tabbed markdown document.
//!
//! The embedded sources are reproduced byte-for-byte between the code
//! fences; the only normalization is appending a trailing newline to a
//! source that lacks one, so the closing fence stays on its own line.
//!
//! The contract-name and description extractors are best-effort line scans,
//! not parsers. Their output is cosmetic (tab titles and a fallback
//! lead-in); a miss falls back to a generic placeholder, never an error.

use crate::error::Result;
use crate::registry::ExampleEntry;
use crate::templates::{embedded, renderer::TemplateRenderer};

/// Placeholder tab title when no type declaration is found in the contract.
const DEFAULT_CONTRACT_NAME: &str = "Contract";

/// Render the documentation markdown for one example.
pub fn render_document(
    entry: &ExampleEntry,
    contract_content: &str,
    test_content: &str,
) -> Result<String> {
    let description = if entry.description.is_empty() {
        extract_description(contract_content).unwrap_or_default()
    } else {
        entry.description.clone()
    };

    let contract_name =
        extract_contract_name(contract_content).unwrap_or_else(|| DEFAULT_CONTRACT_NAME.into());
    let test_tab = entry
        .test_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| entry.test_path.display().to_string());

    let data = serde_json::json!({
        "description": description,
        "contract_tab": format!("{contract_name}.sol"),
        "test_tab": test_tab,
        "contract_code": ensure_trailing_newline(contract_content),
        "test_code": ensure_trailing_newline(test_content),
    });

    let renderer = TemplateRenderer::new();
    renderer.render(embedded::EXAMPLE_DOC, &data)
}

fn ensure_trailing_newline(content: &str) -> String {
    if content.is_empty() || content.ends_with('\n') {
        content.to_string()
    } else {
        format!("{content}\n")
    }
}

/// Extract the declared type name from Solidity source.
///
/// Scans for the first `contract`, `abstract contract`, `interface`, or
/// `library` declaration and returns the identifier that follows it.
pub fn extract_contract_name(source: &str) -> Option<String> {
    for line in source.lines() {
        let trimmed = line.trim_start();
        let rest = if let Some(rest) = trimmed.strip_prefix("abstract contract ") {
            rest
        } else if let Some(rest) = trimmed.strip_prefix("contract ") {
            rest
        } else if let Some(rest) = trimmed.strip_prefix("interface ") {
            rest
        } else if let Some(rest) = trimmed.strip_prefix("library ") {
            rest
        } else {
            continue;
        };

        let name: String = rest
            .chars()
            .take_while(|c| c.is_alphanumeric() || *c == '_')
            .collect();
        if !name.is_empty() {
            return Some(name);
        }
    }
    None
}

/// Extract a one-line summary from Solidity NatSpec comments.
///
/// Prefers the first `@notice` line (either `///` or block-comment style),
/// then falls back to the first untagged `///` doc line.
pub fn extract_description(source: &str) -> Option<String> {
    let mut plain_doc_line = None;

    for line in source.lines() {
        let trimmed = line.trim_start();

        let body = if let Some(body) = trimmed.strip_prefix("///") {
            body.trim()
        } else if let Some(body) = trimmed.strip_prefix('*') {
            // Block-comment continuation; skip the `*/` terminator.
            if body.starts_with('/') {
                continue;
            }
            body.trim()
        } else {
            continue;
        };

        if let Some(notice) = body.strip_prefix("@notice") {
            let notice = notice.trim();
            if !notice.is_empty() {
                return Some(notice.to_string());
            }
        }

        if plain_doc_line.is_none() && !body.is_empty() && !body.starts_with('@') {
            plain_doc_line = Some(body.to_string());
        }
    }

    plain_doc_line
}
