//! Rendering module for converting documents to various output formats.

mod escape;
mod html;
mod json;
mod options;
mod result;
mod text;
pub mod visitor;

pub use escape::escape_html;
pub use html::{
    to_html, to_html_with_stats, HtmlRenderer, EMPTY_DOCUMENT_HTML, NO_CONTENT_HTML,
};
pub use json::{to_json, to_json_with_options, DocumentView, JsonFormat};
pub use options::RenderOptions;
pub use result::{ExtractionStats, RenderResult};
pub use text::extract_text;
pub use visitor::{
    CompositeVisitor, DefaultVisitor, DocumentVisitor, MaxHeadingDepthVisitor, SkipTablesVisitor,
    VisitorAction,
};
