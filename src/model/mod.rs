//! Document model types for Google Docs content.
//!
//! This module mirrors the structured document returned by the Docs API
//! (`documents.get`) closely enough to deserialize it directly. Every wire
//! field is optional; absent collections read as empty. Block and inline
//! kinds the converter does not handle are kept as explicit `Unsupported`
//! variants instead of being dropped at parse time.

mod document;
mod element;
mod paragraph;
mod table;

pub use document::{Body, Document};
pub use element::StructuralElement;
pub use paragraph::{
    Bullet, Link, NamedStyleType, Paragraph, ParagraphElement, ParagraphStyle, TextRun, TextStyle,
};
pub use table::{Table, TableCell, TableRow};
