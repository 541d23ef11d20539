//! JSON rendering of the document viewer payload.

use crate::error::{Error, Result};
use crate::model::Document;
use serde::{Deserialize, Serialize};

use super::{extract_text, to_html, RenderOptions};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// What a viewer needs to display one document and index it for search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentView {
    /// Document ID
    pub id: Option<String>,

    /// Document title
    pub title: Option<String>,

    /// Rendered HTML body
    pub html: String,

    /// Plain text of the body paragraphs
    pub text: String,
}

impl DocumentView {
    /// Build the view of a document.
    pub fn new(doc: &Document, options: &RenderOptions) -> Self {
        Self {
            id: doc.document_id.clone(),
            title: doc.title.clone(),
            html: to_html(doc, options),
            text: extract_text(doc),
        }
    }
}

/// Convert a document to its JSON view.
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    to_json_with_options(doc, &RenderOptions::default(), format)
}

/// Convert a document to its JSON view with custom render options.
pub fn to_json_with_options(
    doc: &Document,
    options: &RenderOptions,
    format: JsonFormat,
) -> Result<String> {
    let view = DocumentView::new(doc, options);
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(&view),
        JsonFormat::Compact => serde_json::to_string(&view),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
