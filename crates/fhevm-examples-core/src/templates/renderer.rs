//! Handlebars-based template renderer.
//!
//! Wraps the [`handlebars::Handlebars`] engine with **strict mode** enabled.
//! Strict mode ensures that any `{{variable}}` referenced in a template must
//! be present in the data context — otherwise rendering returns an error
//! instead of silently producing a document with a hole in it.

use handlebars::Handlebars;
use serde_json::Value;

use crate::error::{FhevmExamplesError, Result};

/// Template renderer using Handlebars for generating documents.
pub struct TemplateRenderer {
    hbs: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Create a new renderer with strict mode enabled.
    ///
    /// Strict mode means `{{missing_var}}` in a template returns an error
    /// rather than an empty string, so a template/context mismatch is caught
    /// at generation time instead of shipping a broken document.
    pub fn new() -> Self {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        Self { hbs }
    }

    /// Render a template string with the given data context.
    pub fn render(&self, template: &str, data: &Value) -> Result<String> {
        self.hbs
            .render_template(template, data)
            .map_err(|e| FhevmExamplesError::TemplateRender(e.to_string()))
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}
