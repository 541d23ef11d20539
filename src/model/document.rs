//! Document-level types.

use super::{Paragraph, StructuralElement};
use serde::{Deserialize, Serialize};

/// A Google Docs document as returned by the Docs API `documents.get`.
///
/// Only the fields the converter reads are modeled; anything else on the
/// wire is ignored during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Document ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,

    /// Document title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Revision the content was read at
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision_id: Option<String>,

    /// Main body of the document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,
}

impl Document {
    /// Create a new document without a body.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document whose body holds the given elements.
    pub fn with_content(content: Vec<StructuralElement>) -> Self {
        Self {
            body: Some(Body {
                content: Some(content),
            }),
            ..Self::default()
        }
    }

    /// Set the document title.
    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the document ID.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.document_id = Some(id.into());
        self
    }

    /// Append an element to the body, creating the body if needed.
    pub fn push(&mut self, element: impl Into<StructuralElement>) {
        self.body
            .get_or_insert_with(Body::default)
            .content
            .get_or_insert_with(Vec::new)
            .push(element.into());
    }

    /// Whether the document carries a body content collection at all.
    pub fn has_body(&self) -> bool {
        self.body.as_ref().is_some_and(|b| b.content.is_some())
    }

    /// Top-level body elements, or an empty slice if there is no body.
    pub fn blocks(&self) -> &[StructuralElement] {
        self.body
            .as_ref()
            .and_then(|b| b.content.as_deref())
            .unwrap_or_default()
    }

    /// Top-level paragraphs in document order.
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.blocks().iter().filter_map(StructuralElement::as_paragraph)
    }

    /// Raw text of every top-level paragraph, concatenated without separators.
    ///
    /// Tables are not descended into.
    pub fn plain_text(&self) -> String {
        self.paragraphs().map(Paragraph::plain_text).collect()
    }
}

/// Document body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Ordered block elements
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<StructuralElement>>,
}
