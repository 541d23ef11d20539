//! HTML rendering for Google Docs documents.

use crate::model::{
    Document, NamedStyleType, Paragraph, ParagraphElement, StructuralElement, Table, TextRun,
};

use super::escape::escape_html;
use super::visitor::{DocumentVisitor, VisitorAction};
use super::{ExtractionStats, RenderOptions, RenderResult};

/// Markup returned when the document has no body content collection.
pub const EMPTY_DOCUMENT_HTML: &str = "<p>Document is empty</p>";

/// Markup returned when the body renders to nothing.
pub const NO_CONTENT_HTML: &str = "<p>No content available</p>";

const TABLE_OPEN_STYLED: &str =
    r#"<table border="1" style="border-collapse: collapse; width: 100%; margin: 1em 0;">"#;
const CELL_OPEN_STYLED: &str = r#"<td style="padding: 8px; border: 1px solid #ddd;">"#;

/// Convert a document to HTML.
pub fn to_html(doc: &Document, options: &RenderOptions) -> String {
    HtmlRenderer::new(options.clone()).render(doc)
}

/// Convert a document to HTML with statistics.
pub fn to_html_with_stats(doc: &Document, options: &RenderOptions) -> RenderResult {
    let mut options = options.clone();
    options.collect_stats = true;
    HtmlRenderer::new(options).render_with_stats(doc)
}

/// How a paragraph is emitted, decided by its named style and bullet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParagraphKind {
    Heading(u8),
    ListItem,
    Normal,
}

impl ParagraphKind {
    fn of(para: &Paragraph) -> Self {
        match para.named_style() {
            NamedStyleType::Title => ParagraphKind::Heading(1),
            NamedStyleType::Subtitle => ParagraphKind::Heading(2),
            style @ NamedStyleType::Heading(_) => {
                ParagraphKind::Heading(style.heading_level().unwrap_or(1))
            }
            NamedStyleType::NormalText | NamedStyleType::Other(_) => {
                if para.is_list_item() {
                    ParagraphKind::ListItem
                } else {
                    ParagraphKind::Normal
                }
            }
        }
    }
}

/// HTML renderer.
///
/// Block elements are concatenated in document order with no separators.
/// List items are emitted as bare `<li>` siblings without a `<ul>`/`<ol>`
/// container, and only paragraphs are rendered inside table cells.
pub struct HtmlRenderer {
    options: RenderOptions,
    stats: ExtractionStats,
    visitor: Option<Box<dyn DocumentVisitor>>,
}

impl HtmlRenderer {
    /// Create a new HTML renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            stats: ExtractionStats::new(),
            visitor: None,
        }
    }

    /// Consult a visitor before rendering each top-level block.
    pub fn with_visitor<V: DocumentVisitor + 'static>(mut self, visitor: V) -> Self {
        self.visitor = Some(Box::new(visitor));
        self
    }

    /// Render a document to HTML.
    pub fn render(mut self, doc: &Document) -> String {
        self.render_internal(doc)
    }

    /// Render a document to HTML with extraction statistics.
    pub fn render_with_stats(mut self, doc: &Document) -> RenderResult {
        self.options.collect_stats = true;
        let content = self.render_internal(doc);
        self.stats.count_text(&doc.plain_text());
        RenderResult::new(content, doc.title.clone(), self.stats)
    }

    fn render_internal(&mut self, doc: &Document) -> String {
        let Some(content) = doc.body.as_ref().and_then(|b| b.content.as_ref()) else {
            return EMPTY_DOCUMENT_HTML.to_string();
        };

        if let Some(visitor) = self.visitor.as_mut() {
            visitor.on_document_start(doc.title.as_deref());
        }

        let mut output = String::new();
        for element in content {
            self.render_block(&mut output, element);
        }

        if let Some(visitor) = self.visitor.as_mut() {
            visitor.on_document_end();
        }

        if output.is_empty() {
            return NO_CONTENT_HTML.to_string();
        }
        output
    }

    fn render_block(&mut self, output: &mut String, element: &StructuralElement) {
        match element {
            StructuralElement::Paragraph(p) => self.render_top_paragraph(output, p),
            StructuralElement::Table(t) => match self.visit(|v| v.visit_table(t)) {
                VisitorAction::Continue => self.render_table(output, t),
                VisitorAction::Replace(html) => {
                    self.count(ExtractionStats::add_table);
                    output.push_str(&html);
                }
                VisitorAction::Skip => {}
            },
            StructuralElement::Unsupported { kind } => {
                log::debug!("Ignoring unsupported block element: {}", kind);
                self.count(ExtractionStats::add_ignored);
            }
        }
    }

    fn render_top_paragraph(&mut self, output: &mut String, para: &Paragraph) {
        if self.visitor.is_none() {
            self.render_paragraph(output, para);
            return;
        }

        // Inline counts only stick if the visitor keeps the block.
        let counted = self.options.collect_stats.then(|| self.stats.clone());
        let Some(inner) = self.render_inline(para) else {
            return;
        };
        let kind = ParagraphKind::of(para);
        let action = match kind {
            ParagraphKind::Heading(level) => self.visit(|v| v.visit_heading(&inner, level)),
            ParagraphKind::ListItem => self.visit(|v| v.visit_list_item(para)),
            ParagraphKind::Normal => self.visit(|v| v.visit_paragraph(para)),
        };
        match action {
            VisitorAction::Continue => self.wrap_paragraph(output, para, &inner),
            VisitorAction::Replace(html) => {
                self.count_block(kind);
                output.push_str(&html);
            }
            VisitorAction::Skip => {
                if let Some(stats) = counted {
                    self.stats = stats;
                }
            }
        }
    }

    fn render_paragraph(&mut self, output: &mut String, para: &Paragraph) {
        if let Some(inner) = self.render_inline(para) {
            self.wrap_paragraph(output, para, &inner);
        }
    }

    /// Styled inline content, or `None` when the paragraph has no element list.
    fn render_inline(&mut self, para: &Paragraph) -> Option<String> {
        let elements = para.elements.as_ref()?;
        let mut inner = String::new();
        for element in elements {
            match element {
                ParagraphElement::TextRun(run) => self.render_text_run(&mut inner, run),
                ParagraphElement::Unsupported { kind } => {
                    log::debug!("Ignoring unsupported inline element: {}", kind);
                    self.count(ExtractionStats::add_ignored);
                }
            }
        }
        Some(inner)
    }

    fn wrap_paragraph(&mut self, output: &mut String, para: &Paragraph, inner: &str) {
        let kind = ParagraphKind::of(para);
        self.count_block(kind);
        match kind {
            ParagraphKind::Heading(level) => {
                output.push_str(&format!("<h{}>{}</h{}>", level, inner, level));
            }
            ParagraphKind::ListItem => output.push_str(&format!("<li>{}</li>", inner)),
            ParagraphKind::Normal => output.push_str(&format!("<p>{}</p>", inner)),
        }
    }

    fn count_block(&mut self, kind: ParagraphKind) {
        self.count(match kind {
            ParagraphKind::Heading(_) => ExtractionStats::add_heading,
            ParagraphKind::ListItem => ExtractionStats::add_list_item,
            ParagraphKind::Normal => ExtractionStats::add_paragraph,
        });
    }

    fn render_text_run(&mut self, output: &mut String, run: &TextRun) {
        if run.is_empty() {
            return;
        }
        let style = run.style();
        let url = style.link_url();
        if self.options.collect_stats {
            self.stats.add_text_run(url.is_some());
        }

        // Wrap innermost first: link, underline, italic, then bold outermost.
        let mut html = escape_html(run.text());
        if let Some(url) = url {
            html = if self.options.open_links_in_new_tab {
                format!(
                    r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
                    escape_html(url),
                    html
                )
            } else {
                format!(r#"<a href="{}">{}</a>"#, escape_html(url), html)
            };
        }
        if style.underline {
            html = format!("<u>{}</u>", html);
        }
        if style.italic {
            html = format!("<em>{}</em>", html);
        }
        if style.bold {
            html = format!("<strong>{}</strong>", html);
        }

        output.push_str(&html);
    }

    fn render_table(&mut self, output: &mut String, table: &Table) {
        let Some(rows) = table.table_rows.as_ref() else {
            log::debug!("Table has no rows collection, skipping");
            return;
        };
        self.count(ExtractionStats::add_table);

        output.push_str(if self.options.table_styles {
            TABLE_OPEN_STYLED
        } else {
            "<table>"
        });

        for row in rows {
            output.push_str("<tr>");
            for cell in row.cells() {
                self.count(ExtractionStats::add_cell);
                output.push_str(if self.options.table_styles {
                    CELL_OPEN_STYLED
                } else {
                    "<td>"
                });
                for element in cell.elements() {
                    match element {
                        StructuralElement::Paragraph(p) => self.render_paragraph(output, p),
                        other => {
                            log::debug!("Ignoring {} inside table cell", other.kind());
                            self.count(ExtractionStats::add_ignored);
                        }
                    }
                }
                output.push_str("</td>");
            }
            output.push_str("</tr>");
        }

        output.push_str("</table>");
    }

    fn visit(
        &mut self,
        f: impl FnOnce(&mut dyn DocumentVisitor) -> VisitorAction,
    ) -> VisitorAction {
        match self.visitor.as_mut() {
            Some(visitor) => f(visitor.as_mut()),
            None => VisitorAction::Continue,
        }
    }

    fn count(&mut self, add: fn(&mut ExtractionStats)) {
        if self.options.collect_stats {
            add(&mut self.stats);
        }
    }
}
