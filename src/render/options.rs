//! Rendering options and configuration.

/// Options for rendering document content.
///
/// The defaults produce the viewer markup: links open in a new tab and
/// tables carry inline border styling.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Emit `target="_blank" rel="noopener noreferrer"` on links
    pub open_links_in_new_tab: bool,

    /// Emit inline border/padding styling on tables and cells
    pub table_styles: bool,

    /// Collect extraction statistics during rendering
    pub collect_stats: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable opening links in a new tab.
    pub fn with_links_in_new_tab(mut self, new_tab: bool) -> Self {
        self.open_links_in_new_tab = new_tab;
        self
    }

    /// Enable or disable inline table styling.
    pub fn with_table_styles(mut self, styles: bool) -> Self {
        self.table_styles = styles;
        self
    }

    /// Enable statistics collection.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            open_links_in_new_tab: true,
            table_styles: true,
            collect_stats: false,
        }
    }
}
