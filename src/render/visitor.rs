//! Visitor pattern for customizing document rendering.
//!
//! The visitor pattern allows users to customize how different document
//! elements are rendered without modifying the core rendering logic.
//! Visitors are consulted for top-level body blocks only; paragraphs inside
//! table cells are always rendered as-is.
//!
//! # Example
//!
//! ```
//! use ungdoc::render::visitor::{DocumentVisitor, VisitorAction};
//! use ungdoc::model::Table;
//!
//! struct CustomTableVisitor;
//!
//! impl DocumentVisitor for CustomTableVisitor {
//!     fn visit_table(&mut self, _table: &Table) -> VisitorAction {
//!         VisitorAction::Replace("<!-- table omitted -->".to_string())
//!     }
//! }
//! ```

use crate::model::{Paragraph, Table};

/// Action returned by visitor methods to control rendering behavior.
#[derive(Debug, Clone, Default)]
pub enum VisitorAction {
    /// Continue with default rendering.
    #[default]
    Continue,

    /// Replace the element with custom output.
    Replace(String),

    /// Skip this element entirely (produce no output).
    Skip,
}

/// Trait for visiting document elements during rendering.
///
/// All methods return `VisitorAction::Continue` by default.
pub trait DocumentVisitor: Send + Sync {
    /// Called before rendering a normal-text paragraph.
    fn visit_paragraph(&mut self, para: &Paragraph) -> VisitorAction {
        let _ = para;
        VisitorAction::Continue
    }

    /// Called before rendering a heading.
    ///
    /// # Arguments
    /// * `inner_html` - The already styled and escaped heading content
    /// * `level` - Resolved heading level (1-6)
    fn visit_heading(&mut self, inner_html: &str, level: u8) -> VisitorAction {
        let _ = (inner_html, level);
        VisitorAction::Continue
    }

    /// Called before rendering a list item.
    fn visit_list_item(&mut self, para: &Paragraph) -> VisitorAction {
        let _ = para;
        VisitorAction::Continue
    }

    /// Called before rendering a table.
    fn visit_table(&mut self, table: &Table) -> VisitorAction {
        let _ = table;
        VisitorAction::Continue
    }

    /// Called before the first block is rendered.
    fn on_document_start(&mut self, title: Option<&str>) {
        let _ = title;
    }

    /// Called after the last block is rendered.
    fn on_document_end(&mut self) {}
}

/// Default visitor that performs no customization.
#[derive(Debug, Clone, Default)]
pub struct DefaultVisitor;

impl DocumentVisitor for DefaultVisitor {}

/// Visitor that drops all tables.
#[derive(Debug, Clone, Default)]
pub struct SkipTablesVisitor;

impl DocumentVisitor for SkipTablesVisitor {
    fn visit_table(&mut self, _table: &Table) -> VisitorAction {
        VisitorAction::Skip
    }
}

/// Visitor that limits heading depth.
#[derive(Debug, Clone)]
pub struct MaxHeadingDepthVisitor {
    max_level: u8,
}

impl MaxHeadingDepthVisitor {
    /// Create a visitor that limits headings to the specified max level.
    pub fn new(max_level: u8) -> Self {
        Self {
            max_level: max_level.clamp(1, 6),
        }
    }
}

impl DocumentVisitor for MaxHeadingDepthVisitor {
    fn visit_heading(&mut self, inner_html: &str, level: u8) -> VisitorAction {
        if level <= self.max_level {
            return VisitorAction::Continue;
        }
        let level = self.max_level;
        VisitorAction::Replace(format!("<h{}>{}</h{}>", level, inner_html, level))
    }
}

/// Composite visitor that chains multiple visitors.
///
/// Visitors are called in order. The first visitor that returns
/// a non-Continue action determines the result.
pub struct CompositeVisitor {
    visitors: Vec<Box<dyn DocumentVisitor>>,
}

impl CompositeVisitor {
    /// Create a new composite visitor.
    pub fn new() -> Self {
        Self {
            visitors: Vec::new(),
        }
    }

    /// Add a visitor to the chain.
    pub fn with_visitor<V: DocumentVisitor + 'static>(mut self, visitor: V) -> Self {
        self.visitors.push(Box::new(visitor));
        self
    }

    fn first_action(
        &mut self,
        mut visit: impl FnMut(&mut dyn DocumentVisitor) -> VisitorAction,
    ) -> VisitorAction {
        for visitor in &mut self.visitors {
            let action = visit(visitor.as_mut());
            if !matches!(action, VisitorAction::Continue) {
                return action;
            }
        }
        VisitorAction::Continue
    }
}

impl Default for CompositeVisitor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentVisitor for CompositeVisitor {
    fn visit_paragraph(&mut self, para: &Paragraph) -> VisitorAction {
        self.first_action(|v| v.visit_paragraph(para))
    }

    fn visit_heading(&mut self, inner_html: &str, level: u8) -> VisitorAction {
        self.first_action(|v| v.visit_heading(inner_html, level))
    }

    fn visit_list_item(&mut self, para: &Paragraph) -> VisitorAction {
        self.first_action(|v| v.visit_list_item(para))
    }

    fn visit_table(&mut self, table: &Table) -> VisitorAction {
        self.first_action(|v| v.visit_table(table))
    }

    fn on_document_start(&mut self, title: Option<&str>) {
        for visitor in &mut self.visitors {
            visitor.on_document_start(title);
        }
    }

    fn on_document_end(&mut self) {
        for visitor in &mut self.visitors {
            visitor.on_document_end();
        }
    }
}
