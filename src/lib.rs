//! # ungdoc
//!
//! Google Docs content conversion library for Rust.
//!
//! This library reads the structured document returned by the Google Docs
//! API (`documents.get`) and converts it to an HTML fragment for a document
//! viewer, a plain-text corpus for search indexing, or a JSON payload
//! carrying both.
//!
//! ## Quick Start
//!
//! ```no_run
//! use ungdoc::{parse_file, render_html, extract_text};
//!
//! fn main() -> ungdoc::Result<()> {
//!     let doc = parse_file("handbook.json")?;
//!
//!     println!("{}", render_html(&doc));
//!     println!("{}", extract_text(&doc));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Faithful HTML**: Headings, titles, list items, tables, bold/italic/underline, links
//! - **Safe text**: Every text run and link URL is HTML-escaped
//! - **Graceful degradation**: Missing bodies, elements, rows and cells never fail
//! - **Search corpus**: Raw paragraph text for indexing
//! - **Parallel batches**: Uses Rayon to convert many exports at once

pub mod convert;
pub mod error;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use convert::{ConvertOptions, ConvertResult, GoogleDocConverter, OutputFormat};
pub use error::{Error, Result};
pub use model::{
    Body, Bullet, Document, Link, NamedStyleType, Paragraph, ParagraphElement, ParagraphStyle,
    StructuralElement, Table, TableCell, TableRow, TextRun, TextStyle,
};
pub use render::{
    escape_html, DocumentView, ExtractionStats, HtmlRenderer, JsonFormat, RenderOptions,
    RenderResult,
};

use std::io::Read;
use std::path::Path;

/// Parse a Docs API document from a JSON string.
///
/// # Example
///
/// ```
/// let doc = ungdoc::parse_str(r#"{"title": "Empty"}"#).unwrap();
/// assert_eq!(doc.title.as_deref(), Some("Empty"));
/// ```
pub fn parse_str(json: &str) -> Result<Document> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a Docs API document from bytes.
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    Ok(serde_json::from_slice(data)?)
}

/// Parse a Docs API document from a reader.
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    Ok(serde_json::from_reader(reader)?)
}

/// Parse a Docs API document from a JSON file.
///
/// # Example
///
/// ```no_run
/// let doc = ungdoc::parse_file("handbook.json").unwrap();
/// println!("Blocks: {}", doc.blocks().len());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let data = std::fs::read(path)?;
    parse_bytes(&data)
}

/// Render a document to HTML with default options.
///
/// A document without body content renders as `<p>Document is empty</p>`;
/// a body that produces no markup renders as `<p>No content available</p>`.
pub fn render_html(doc: &Document) -> String {
    render::to_html(doc, &RenderOptions::default())
}

/// Extract the raw paragraph text of a document for search.
pub fn extract_text(doc: &Document) -> String {
    render::extract_text(doc)
}

/// Convert a Docs API JSON file to HTML.
///
/// # Example
///
/// ```no_run
/// let html = ungdoc::to_html("handbook.json").unwrap();
/// std::fs::write("handbook.html", html).unwrap();
/// ```
pub fn to_html<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = parse_file(path)?;
    Ok(render_html(&doc))
}

/// Convert a Docs API JSON file to HTML with custom options.
pub fn to_html_with_options<P: AsRef<Path>>(path: P, options: &RenderOptions) -> Result<String> {
    let doc = parse_file(path)?;
    Ok(render::to_html(&doc, options))
}

/// Convert a Docs API JSON file to plain text.
pub fn to_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = parse_file(path)?;
    Ok(extract_text(&doc))
}

/// Convert a Docs API JSON file to the JSON viewer payload.
///
/// # Example
///
/// ```no_run
/// use ungdoc::{to_json, JsonFormat};
///
/// let json = to_json("handbook.json", JsonFormat::Pretty).unwrap();
/// std::fs::write("view.json", json).unwrap();
/// ```
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_json(&doc, format)
}

/// Builder for parsing and converting Google Docs documents.
///
/// # Example
///
/// ```no_run
/// use ungdoc::Ungdoc;
///
/// let html = Ungdoc::new()
///     .links_in_same_tab()
///     .without_table_styles()
///     .parse("handbook.json")?
///     .to_html();
/// # Ok::<(), ungdoc::Error>(())
/// ```
pub struct Ungdoc {
    render_options: RenderOptions,
}

impl Ungdoc {
    /// Create a new Ungdoc builder.
    pub fn new() -> Self {
        Self {
            render_options: RenderOptions::default(),
        }
    }

    /// Emit links without `target="_blank"`.
    pub fn links_in_same_tab(mut self) -> Self {
        self.render_options = self.render_options.with_links_in_new_tab(false);
        self
    }

    /// Emit tables without inline styling.
    pub fn without_table_styles(mut self) -> Self {
        self.render_options = self.render_options.with_table_styles(false);
        self
    }

    /// Use the given render options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// Parse a Docs API JSON file and return a result wrapper.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<UngdocResult> {
        Ok(self.wrap(parse_file(path)?))
    }

    /// Parse a Docs API document from bytes.
    pub fn parse_bytes(self, data: &[u8]) -> Result<UngdocResult> {
        Ok(self.wrap(parse_bytes(data)?))
    }

    /// Wrap an already parsed document.
    pub fn wrap(self, document: Document) -> UngdocResult {
        UngdocResult {
            document,
            render_options: self.render_options,
        }
    }
}

impl Default for Ungdoc {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing a Google Docs document.
pub struct UngdocResult {
    /// The parsed document
    pub document: Document,
    /// Render options to use
    render_options: RenderOptions,
}

impl UngdocResult {
    /// Convert to HTML.
    pub fn to_html(&self) -> String {
        render::to_html(&self.document, &self.render_options)
    }

    /// Convert to HTML with statistics.
    pub fn to_html_with_stats(&self) -> RenderResult {
        render::to_html_with_stats(&self.document, &self.render_options)
    }

    /// Extract plain text.
    pub fn to_text(&self) -> String {
        extract_text(&self.document)
    }

    /// Convert to the JSON viewer payload.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json_with_options(&self.document, &self.render_options, format)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}
