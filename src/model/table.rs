//! Table types.

use super::{Paragraph, StructuralElement};
use serde::{Deserialize, Serialize};

/// A table structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    /// Declared number of rows
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<u32>,

    /// Declared number of columns
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<u32>,

    /// Rows in the table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_rows: Option<Vec<TableRow>>,
}

impl Table {
    /// Create a new table with no rows.
    pub fn new() -> Self {
        Self {
            table_rows: Some(Vec::new()),
            ..Self::default()
        }
    }

    /// Create a table from rows, filling in the declared dimensions.
    pub fn from_rows(rows: Vec<TableRow>) -> Self {
        let mut table = Self::new();
        for row in rows {
            table.add_row(row);
        }
        table
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: TableRow) {
        let rows = self.table_rows.get_or_insert_with(Vec::new);
        rows.push(row);
        self.rows = Some(rows.len() as u32);
        self.columns = Some(self.column_count() as u32);
    }

    /// Rows in order, or an empty slice when absent.
    pub fn rows(&self) -> &[TableRow] {
        self.table_rows.as_deref().unwrap_or_default()
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows().len()
    }

    /// Get the number of columns (widest row).
    pub fn column_count(&self) -> usize {
        self.rows().iter().map(|r| r.cells().len()).max().unwrap_or(0)
    }
}

/// A table row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    /// Cells in the row
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_cells: Option<Vec<TableCell>>,
}

impl TableRow {
    /// Create a new row with cells.
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self {
            table_cells: Some(cells),
        }
    }

    /// Create a row of single-paragraph cells from text values.
    pub fn from_strings<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self::new(values.into_iter().map(TableCell::text).collect())
    }

    /// Cells in order, or an empty slice when absent.
    pub fn cells(&self) -> &[TableCell] {
        self.table_cells.as_deref().unwrap_or_default()
    }
}

/// A table cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    /// Cell content; in practice only paragraphs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<StructuralElement>>,
}

impl TableCell {
    /// Create a cell holding one plain paragraph.
    pub fn text(text: impl Into<String>) -> Self {
        Self::with_content(vec![Paragraph::with_text(text).into()])
    }

    /// Create a cell with the given elements.
    pub fn with_content(content: Vec<StructuralElement>) -> Self {
        Self {
            content: Some(content),
        }
    }

    /// Elements in order, or an empty slice when absent.
    pub fn elements(&self) -> &[StructuralElement] {
        self.content.as_deref().unwrap_or_default()
    }
}
