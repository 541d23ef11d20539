//! Conversion of Docs API exports into viewer output.
//!
//! A [`GoogleDocConverter`] reads the JSON returned by `documents.get` and
//! produces HTML, plain text, or the JSON viewer payload, one file at a time
//! or as a parallel batch.
//!
//! # Example
//!
//! ```no_run
//! use ungdoc::convert::{ConvertOptions, GoogleDocConverter, OutputFormat};
//! use std::path::Path;
//!
//! fn main() -> ungdoc::Result<()> {
//!     let converter = GoogleDocConverter::new();
//!     let options = ConvertOptions::new().with_format(OutputFormat::Text);
//!
//!     let result = converter.convert(Path::new("handbook.json"), &options)?;
//!     println!("{}", result.content);
//!     Ok(())
//! }
//! ```

mod gdoc;

pub use gdoc::GoogleDocConverter;

use crate::model::Document;
use crate::render::{ExtractionStats, RenderOptions};

/// Options for document conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Rendering options; `render.collect_stats` also controls statistics
    pub render: RenderOptions,

    /// Output format
    pub output_format: OutputFormat,
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set rendering options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render = options;
        self
    }

    /// Enable statistics collection.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.render.collect_stats = collect;
        self
    }

    /// Set output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }
}

/// Output format for conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// HTML fragment for embedding in a viewer page
    #[default]
    Html,

    /// Plain text search corpus
    Text,

    /// JSON viewer payload
    Json,
}

impl OutputFormat {
    /// All formats, in the order the CLI writes them.
    pub const ALL: [OutputFormat; 3] = [
        OutputFormat::Html,
        OutputFormat::Text,
        OutputFormat::Json,
    ];

    /// MIME type of output in this format.
    pub fn mime_type(self) -> &'static str {
        match self {
            OutputFormat::Html => "text/html",
            OutputFormat::Text => "text/plain",
            OutputFormat::Json => "application/json",
        }
    }

    /// File extension for output in this format.
    ///
    /// The JSON view uses `view.json` so it never overwrites a `.json` export.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Text => "txt",
            OutputFormat::Json => "view.json",
        }
    }
}

/// Result of document conversion.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    /// Converted content
    pub content: String,

    /// Source document title
    pub title: Option<String>,

    /// Source document ID
    pub document_id: Option<String>,

    /// Extraction statistics (if collected)
    pub stats: Option<ExtractionStats>,

    /// Format of `content`
    pub format: OutputFormat,
}

impl ConvertResult {
    /// Create a new conversion result for the given source document.
    pub fn new(content: String, source: &Document, format: OutputFormat) -> Self {
        Self {
            content,
            title: source.title.clone(),
            document_id: source.document_id.clone(),
            stats: None,
            format,
        }
    }

    /// Set extraction statistics.
    pub fn with_stats(mut self, stats: ExtractionStats) -> Self {
        self.stats = Some(stats);
        self
    }

    /// MIME type of `content`.
    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    /// Output file name for a source file stem.
    pub fn file_name(&self, stem: &str) -> String {
        format!("{}.{}", stem, self.format.extension())
    }
}
