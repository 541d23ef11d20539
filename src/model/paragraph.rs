//! Paragraph and text-level types.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A paragraph of text content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paragraph {
    /// Inline elements in the paragraph
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elements: Option<Vec<ParagraphElement>>,

    /// Paragraph style
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paragraph_style: Option<ParagraphStyle>,

    /// Bullet membership; present when the paragraph is a list item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bullet: Option<Bullet>,
}

impl Paragraph {
    /// Create a new paragraph with an empty element list.
    pub fn new() -> Self {
        Self {
            elements: Some(Vec::new()),
            ..Self::default()
        }
    }

    /// Create a paragraph with plain text.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut p = Self::new();
        p.add_run(TextRun::new(text));
        p
    }

    /// Create a heading paragraph (`HEADING_<level>`).
    pub fn heading(text: impl Into<String>, level: u8) -> Self {
        Self::with_text(text).with_style(NamedStyleType::Heading(level.to_string()))
    }

    /// Create a bulleted list item.
    pub fn list_item(text: impl Into<String>) -> Self {
        let mut p = Self::with_text(text);
        p.bullet = Some(Bullet::default());
        p
    }

    /// Set the named style and return self.
    pub fn with_style(mut self, style: NamedStyleType) -> Self {
        self.paragraph_style = Some(ParagraphStyle {
            named_style_type: Some(style),
        });
        self
    }

    /// Add a styled text run.
    pub fn add_run(&mut self, run: TextRun) {
        self.elements
            .get_or_insert_with(Vec::new)
            .push(ParagraphElement::TextRun(run));
    }

    /// Effective named style; `NORMAL_TEXT` when none is declared.
    pub fn named_style(&self) -> NamedStyleType {
        self.paragraph_style
            .as_ref()
            .and_then(|s| s.named_style_type.clone())
            .unwrap_or_default()
    }

    /// Check if this paragraph carries a bullet.
    pub fn is_list_item(&self) -> bool {
        self.bullet.is_some()
    }

    /// Text runs in order, skipping other inline kinds.
    pub fn text_runs(&self) -> impl Iterator<Item = &TextRun> {
        self.elements
            .as_deref()
            .unwrap_or_default()
            .iter()
            .filter_map(ParagraphElement::as_text_run)
    }

    /// Raw content of every text run, concatenated.
    pub fn plain_text(&self) -> String {
        self.text_runs().map(TextRun::text).collect()
    }
}

/// Inline element within a paragraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawParagraphElement", into = "RawParagraphElement")]
pub enum ParagraphElement {
    /// A run of text with one style set
    TextRun(TextRun),

    /// Inline objects, auto text, page breaks and other inline kinds
    Unsupported {
        /// Wire key of the element kind
        kind: String,
    },
}

impl ParagraphElement {
    /// Get the text run if this is one.
    pub fn as_text_run(&self) -> Option<&TextRun> {
        match self {
            ParagraphElement::TextRun(run) => Some(run),
            ParagraphElement::Unsupported { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawParagraphElement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text_run: Option<TextRun>,

    #[serde(flatten)]
    rest: Map<String, Value>,
}

impl From<RawParagraphElement> for ParagraphElement {
    fn from(raw: RawParagraphElement) -> Self {
        match raw.text_run {
            Some(run) => ParagraphElement::TextRun(run),
            None => ParagraphElement::Unsupported {
                kind: raw
                    .rest
                    .keys()
                    .find(|k| !matches!(k.as_str(), "startIndex" | "endIndex"))
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
            },
        }
    }
}

impl From<ParagraphElement> for RawParagraphElement {
    fn from(element: ParagraphElement) -> Self {
        match element {
            ParagraphElement::TextRun(run) => RawParagraphElement {
                text_run: Some(run),
                rest: Map::new(),
            },
            ParagraphElement::Unsupported { kind } => {
                let mut rest = Map::new();
                rest.insert(kind, Value::Object(Map::new()));
                RawParagraphElement {
                    text_run: None,
                    rest,
                }
            }
        }
    }
}

/// A run of text with consistent styling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRun {
    /// The raw text content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Text styling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_style: Option<TextStyle>,
}

impl TextRun {
    /// Create a new text run with default style.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            content: Some(text.into()),
            text_style: None,
        }
    }

    /// Create a text run with the given style.
    pub fn styled(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            content: Some(text.into()),
            text_style: Some(style),
        }
    }

    /// Create a bold text run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self::styled(
            text,
            TextStyle {
                bold: true,
                ..Default::default()
            },
        )
    }

    /// Create an italic text run.
    pub fn italic(text: impl Into<String>) -> Self {
        Self::styled(
            text,
            TextStyle {
                italic: true,
                ..Default::default()
            },
        )
    }

    /// Create a hyperlinked text run.
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::styled(
            text,
            TextStyle {
                link: Some(Link::new(url)),
                ..Default::default()
            },
        )
    }

    /// Raw content, or an empty string when absent.
    pub fn text(&self) -> &str {
        self.content.as_deref().unwrap_or_default()
    }

    /// Check if this run has no text.
    pub fn is_empty(&self) -> bool {
        self.text().is_empty()
    }

    /// Style of this run, defaulting to unstyled.
    pub fn style(&self) -> TextStyle {
        self.text_style.clone().unwrap_or_default()
    }
}

/// Inline character styling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    /// Bold text
    #[serde(
        default,
        deserialize_with = "null_as_false",
        skip_serializing_if = "is_false"
    )]
    pub bold: bool,

    /// Italic text
    #[serde(
        default,
        deserialize_with = "null_as_false",
        skip_serializing_if = "is_false"
    )]
    pub italic: bool,

    /// Underlined text
    #[serde(
        default,
        deserialize_with = "null_as_false",
        skip_serializing_if = "is_false"
    )]
    pub underline: bool,

    /// Hyperlink target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
}

impl TextStyle {
    /// Link URL, if the run links somewhere non-empty.
    pub fn link_url(&self) -> Option<&str> {
        self.link
            .as_ref()
            .and_then(|l| l.url.as_deref())
            .filter(|url| !url.is_empty())
    }
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// Reads an absent, `null` or boolean flag; only `true` turns it on.
fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_default())
}

/// Hyperlink of a text run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// External URL; absent for in-document heading/bookmark links
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Link {
    /// Create a link to an external URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
        }
    }
}

/// Paragraph styling properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphStyle {
    /// Semantic role of the paragraph
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub named_style_type: Option<NamedStyleType>,
}

/// Bullet attached to a list item paragraph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bullet {
    /// ID of the list the item belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_id: Option<String>,

    /// Nesting level (0 = top level)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nesting_level: Option<u32>,
}

/// Named paragraph style.
///
/// Parses any wire string losslessly; `HEADING_<n>` keeps its raw suffix so
/// unparseable levels survive a round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NamedStyleType {
    /// `NORMAL_TEXT`
    #[default]
    NormalText,
    /// `TITLE`
    Title,
    /// `SUBTITLE`
    Subtitle,
    /// `HEADING_<suffix>`
    Heading(String),
    /// Any other style name
    Other(String),
}

impl NamedStyleType {
    /// Heading level for `HEADING_<n>`.
    ///
    /// `n` is read from the leading digits of the suffix. HTML only has
    /// levels 1 through 6, so anything else resolves to 1.
    pub fn heading_level(&self) -> Option<u8> {
        match self {
            NamedStyleType::Heading(suffix) => {
                let level = parse_heading_suffix(suffix).unwrap_or_else(|| {
                    log::debug!("HEADING_{} has no usable level, using 1", suffix);
                    1
                });
                Some(level)
            }
            _ => None,
        }
    }
}

fn parse_heading_suffix(suffix: &str) -> Option<u8> {
    let digits = suffix.bytes().take_while(u8::is_ascii_digit).count();
    suffix[..digits]
        .parse::<u8>()
        .ok()
        .filter(|level| (1..=6).contains(level))
}

impl From<String> for NamedStyleType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "NORMAL_TEXT" => NamedStyleType::NormalText,
            "TITLE" => NamedStyleType::Title,
            "SUBTITLE" => NamedStyleType::Subtitle,
            _ => match s.strip_prefix("HEADING_") {
                Some(suffix) => NamedStyleType::Heading(suffix.to_string()),
                None => NamedStyleType::Other(s),
            },
        }
    }
}

impl From<&str> for NamedStyleType {
    fn from(s: &str) -> Self {
        NamedStyleType::from(s.to_string())
    }
}

impl From<NamedStyleType> for String {
    fn from(style: NamedStyleType) -> Self {
        style.to_string()
    }
}

impl fmt::Display for NamedStyleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamedStyleType::NormalText => f.write_str("NORMAL_TEXT"),
            NamedStyleType::Title => f.write_str("TITLE"),
            NamedStyleType::Subtitle => f.write_str("SUBTITLE"),
            NamedStyleType::Heading(suffix) => write!(f, "HEADING_{}", suffix),
            NamedStyleType::Other(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_plain_text() {
        let mut p = Paragraph::with_text("Hello ");
        p.add_run(TextRun::bold("world"));
        p.add_run(TextRun::new("!"));

        assert_eq!(p.plain_text(), "Hello world!");
    }

    #[test]
    fn test_named_style_defaults_to_normal() {
        let p = Paragraph::with_text("x");
        assert_eq!(p.named_style(), NamedStyleType::NormalText);
    }

    #[test]
    fn test_named_style_parse() {
        assert_eq!(NamedStyleType::from("TITLE"), NamedStyleType::Title);
        assert_eq!(NamedStyleType::from("SUBTITLE"), NamedStyleType::Subtitle);
        assert_eq!(
            NamedStyleType::from("HEADING_2"),
            NamedStyleType::Heading("2".into())
        );
        assert_eq!(
            NamedStyleType::from("CAPTION"),
            NamedStyleType::Other("CAPTION".into())
        );
        assert_eq!(NamedStyleType::from("HEADING_abc").to_string(), "HEADING_abc");
    }

    #[test]
    fn test_heading_level() {
        assert_eq!(NamedStyleType::from("HEADING_3").heading_level(), Some(3));
        assert_eq!(NamedStyleType::from("HEADING_6").heading_level(), Some(6));
        assert_eq!(NamedStyleType::from("HEADING_99").heading_level(), Some(1));
        assert_eq!(NamedStyleType::from("HEADING_abc").heading_level(), Some(1));
        assert_eq!(NamedStyleType::from("HEADING_0").heading_level(), Some(1));
        assert_eq!(NamedStyleType::from("HEADING_").heading_level(), Some(1));
        assert_eq!(NamedStyleType::from("HEADING_4x").heading_level(), Some(4));
        assert_eq!(NamedStyleType::Title.heading_level(), None);
    }

    #[test]
    fn test_link_url_ignores_empty() {
        let style = TextStyle {
            link: Some(Link::new("")),
            ..Default::default()
        };
        assert_eq!(style.link_url(), None);
    }

    #[test]
    fn test_null_style_flags_read_as_false() {
        let style: TextStyle = serde_json::from_str(
            r#"{"bold": null, "italic": true, "underline": null, "link": null}"#,
        )
        .unwrap();
        assert!(!style.bold);
        assert!(style.italic);
        assert!(!style.underline);
        assert_eq!(style.link_url(), None);
    }

    #[test]
    fn test_deserialize_text_run() {
        let p: Paragraph = serde_json::from_str(
            r#"{
                "elements": [
                    { "startIndex": 1, "textRun": {
                        "content": "docs",
                        "textStyle": { "bold": true, "link": { "url": "https://example.com" } }
                    } },
                    { "inlineObjectElement": { "inlineObjectId": "kix.1" } }
                ],
                "paragraphStyle": { "namedStyleType": "HEADING_2", "direction": "LEFT_TO_RIGHT" },
                "bullet": { "listId": "kix.list", "nestingLevel": 1 }
            }"#,
        )
        .unwrap();

        let runs: Vec<_> = p.text_runs().collect();
        assert_eq!(runs.len(), 1);
        assert!(runs[0].style().bold);
        assert_eq!(runs[0].style().link_url(), Some("https://example.com"));
        assert!(p.is_list_item());
        assert_eq!(p.named_style().heading_level(), Some(2));
        assert!(matches!(
            &p.elements.as_ref().unwrap()[1],
            ParagraphElement::Unsupported { kind } if kind == "inlineObjectElement"
        ));
    }
}
