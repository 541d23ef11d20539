//! Block-level structural elements.

use super::{Paragraph, Table};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Wire keys that carry positions rather than an element kind.
const POSITION_KEYS: [&str; 2] = ["startIndex", "endIndex"];

/// A block-level element of a document body or table cell.
///
/// On the wire this is an object with exactly one kind key (`paragraph`,
/// `table`, `sectionBreak`, `tableOfContents`, ...). Kinds other than
/// paragraphs and tables are kept as [`StructuralElement::Unsupported`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawElement", into = "RawElement")]
pub enum StructuralElement {
    /// A paragraph
    Paragraph(Paragraph),

    /// A table
    Table(Table),

    /// Any other block kind (section break, table of contents, ...)
    Unsupported {
        /// Wire key of the element kind
        kind: String,
    },
}

impl StructuralElement {
    /// Create an element of an unsupported kind.
    pub fn unsupported(kind: impl Into<String>) -> Self {
        StructuralElement::Unsupported { kind: kind.into() }
    }

    /// Get the paragraph if this is one.
    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            StructuralElement::Paragraph(p) => Some(p),
            _ => None,
        }
    }

    /// Get the table if this is one.
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            StructuralElement::Table(t) => Some(t),
            _ => None,
        }
    }

    /// Wire name of this element's kind.
    pub fn kind(&self) -> &str {
        match self {
            StructuralElement::Paragraph(_) => "paragraph",
            StructuralElement::Table(_) => "table",
            StructuralElement::Unsupported { kind } => kind,
        }
    }
}

impl From<Paragraph> for StructuralElement {
    fn from(p: Paragraph) -> Self {
        StructuralElement::Paragraph(p)
    }
}

impl From<Table> for StructuralElement {
    fn from(t: Table) -> Self {
        StructuralElement::Table(t)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RawElement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    paragraph: Option<Paragraph>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    table: Option<Table>,

    #[serde(flatten)]
    rest: Map<String, Value>,
}

impl From<RawElement> for StructuralElement {
    fn from(raw: RawElement) -> Self {
        if let Some(p) = raw.paragraph {
            return StructuralElement::Paragraph(p);
        }
        if let Some(t) = raw.table {
            return StructuralElement::Table(t);
        }
        let kind = raw
            .rest
            .keys()
            .find(|k| !POSITION_KEYS.contains(&k.as_str()))
            .cloned()
            .unwrap_or_else(|| "unknown".to_string());
        StructuralElement::Unsupported { kind }
    }
}

impl From<StructuralElement> for RawElement {
    fn from(element: StructuralElement) -> Self {
        match element {
            StructuralElement::Paragraph(p) => RawElement {
                paragraph: Some(p),
                ..Default::default()
            },
            StructuralElement::Table(t) => RawElement {
                table: Some(t),
                ..Default::default()
            },
            StructuralElement::Unsupported { kind } => {
                let mut rest = Map::new();
                rest.insert(kind, Value::Object(Map::new()));
                RawElement {
                    rest,
                    ..Default::default()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> StructuralElement {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_paragraph_element() {
        let el = parse(r#"{"startIndex": 1, "paragraph": {"elements": []}}"#);
        assert!(el.as_paragraph().is_some());
        assert_eq!(el.kind(), "paragraph");
    }

    #[test]
    fn test_table_element() {
        let el = parse(r#"{"table": {"rows": 1, "columns": 1, "tableRows": []}}"#);
        assert!(el.as_table().is_some());
    }

    #[test]
    fn test_unsupported_kind_is_recorded() {
        let el = parse(r#"{"startIndex": 0, "endIndex": 1, "sectionBreak": {}}"#);
        assert_eq!(el, StructuralElement::unsupported("sectionBreak"));
    }

    #[test]
    fn test_positions_only() {
        let el = parse(r#"{"endIndex": 4}"#);
        assert_eq!(el.kind(), "unknown");
    }

    #[test]
    fn test_unsupported_serializes_under_its_kind() {
        let el = StructuralElement::unsupported("tableOfContents");
        let json = serde_json::to_string(&el).unwrap();
        assert_eq!(json, r#"{"tableOfContents":{}}"#);
        assert_eq!(parse(&json), el);
    }
}
