//! Plain text extraction for search and indexing.

use crate::model::Document;

/// Extract the raw text of a document.
///
/// Concatenates the unescaped content of every text run of every top-level
/// paragraph, in order, with nothing inserted between runs or paragraphs.
/// Tables are not descended into. A document without a body yields an
/// empty string.
pub fn extract_text(doc: &Document) -> String {
    doc.plain_text()
}
