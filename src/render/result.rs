//! Rendering result with document identity and statistics.

use serde::{Deserialize, Serialize};

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered content
    pub content: String,

    /// Document title, if the source declared one
    pub title: Option<String>,

    /// Extraction statistics
    pub stats: ExtractionStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, title: Option<String>, stats: ExtractionStats) -> Self {
        Self {
            content,
            title,
            stats,
        }
    }
}

/// Statistics collected while rendering a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Paragraphs rendered as `<p>`
    pub paragraph_count: u32,

    /// Paragraphs rendered as `<h1>`..`<h6>`
    pub heading_count: u32,

    /// Paragraphs rendered as `<li>`
    pub list_item_count: u32,

    /// Tables rendered
    pub table_count: u32,

    /// Table cells rendered
    pub cell_count: u32,

    /// Non-empty text runs rendered
    pub text_run_count: u32,

    /// Text runs wrapped in a link
    pub link_count: u32,

    /// Block and inline elements of unsupported kinds
    pub ignored_count: u32,

    /// Approximate word count of the plain text (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count of the plain text (excluding whitespace)
    pub char_count: u32,
}

impl ExtractionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment paragraph count.
    pub fn add_paragraph(&mut self) {
        self.paragraph_count += 1;
    }

    /// Increment heading count.
    pub fn add_heading(&mut self) {
        self.heading_count += 1;
    }

    /// Increment list item count.
    pub fn add_list_item(&mut self) {
        self.list_item_count += 1;
    }

    /// Increment table count.
    pub fn add_table(&mut self) {
        self.table_count += 1;
    }

    /// Increment cell count.
    pub fn add_cell(&mut self) {
        self.cell_count += 1;
    }

    /// Increment text run count, and link count when linked.
    pub fn add_text_run(&mut self, linked: bool) {
        self.text_run_count += 1;
        if linked {
            self.link_count += 1;
        }
    }

    /// Increment ignored element count.
    pub fn add_ignored(&mut self) {
        self.ignored_count += 1;
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &ExtractionStats) {
        self.paragraph_count += other.paragraph_count;
        self.heading_count += other.heading_count;
        self.list_item_count += other.list_item_count;
        self.table_count += other.table_count;
        self.cell_count += other.cell_count;
        self.text_run_count += other.text_run_count;
        self.link_count += other.link_count;
        self.ignored_count += other.ignored_count;
        self.word_count += other.word_count;
        self.char_count += other.char_count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_stats_count_text() {
        let mut stats = ExtractionStats::new();
        stats.count_text("Hello, world! This is a test.");

        assert_eq!(stats.word_count, 6);
        assert_eq!(stats.char_count, 24);
    }

    #[test]
    fn test_extraction_stats_merge() {
        let mut stats1 = ExtractionStats::new();
        stats1.paragraph_count = 5;
        stats1.table_count = 2;

        let stats2 = ExtractionStats {
            paragraph_count: 3,
            table_count: 1,
            link_count: 4,
            ..Default::default()
        };

        stats1.merge(&stats2);

        assert_eq!(stats1.paragraph_count, 8);
        assert_eq!(stats1.table_count, 3);
        assert_eq!(stats1.link_count, 4);
    }

    #[test]
    fn test_add_text_run_counts_links() {
        let mut stats = ExtractionStats::new();
        stats.add_text_run(false);
        stats.add_text_run(true);
        assert_eq!(stats.text_run_count, 2);
        assert_eq!(stats.link_count, 1);
    }
}
