//! Integration tests for HTML rendering of Docs API documents.

use serde_json::{json, Value};
use ungdoc::render::{EMPTY_DOCUMENT_HTML, NO_CONTENT_HTML};
use ungdoc::{render_html, Document, RenderOptions};

fn doc(value: Value) -> Document {
    serde_json::from_value(value).unwrap()
}

fn body(content: Value) -> Document {
    doc(json!({ "documentId": "d", "title": "T", "body": { "content": content } }))
}

fn text_para(text: &str) -> Value {
    json!({ "paragraph": { "elements": [ { "textRun": { "content": text } } ] } })
}

fn styled_para(style: &str, text: &str) -> Value {
    json!({ "paragraph": {
        "paragraphStyle": { "namedStyleType": style },
        "elements": [ { "textRun": { "content": text } } ]
    } })
}

fn list_para(text: &str) -> Value {
    json!({ "paragraph": {
        "bullet": { "listId": "kix.list1" },
        "elements": [ { "textRun": { "content": text } } ]
    } })
}

fn cell(text: &str) -> Value {
    json!({ "content": [ text_para(text) ] })
}

// ==================== Fallback Tests ====================

#[test]
fn test_document_without_body() {
    assert_eq!(render_html(&doc(json!({ "title": "Untitled" }))), EMPTY_DOCUMENT_HTML);
    assert_eq!(EMPTY_DOCUMENT_HTML, "<p>Document is empty</p>");
}

#[test]
fn test_body_without_content() {
    assert_eq!(render_html(&doc(json!({ "body": {} }))), EMPTY_DOCUMENT_HTML);
}

#[test]
fn test_only_ignored_blocks() {
    let d = body(json!([
        { "sectionBreak": { "sectionStyle": {} } },
        { "tableOfContents": { "content": [] } }
    ]));
    assert_eq!(render_html(&d), NO_CONTENT_HTML);
    assert_eq!(NO_CONTENT_HTML, "<p>No content available</p>");
}

#[test]
fn test_ignored_blocks_between_paragraphs() {
    let d = body(json!([
        text_para("one"),
        { "sectionBreak": {} },
        text_para("two")
    ]));
    assert_eq!(render_html(&d), "<p>one</p><p>two</p>");
}

// ==================== Escaping Tests ====================

#[test]
fn test_text_is_escaped() {
    let html = render_html(&body(json!([text_para("<b>")])));
    assert!(html.contains("&lt;b&gt;"));
    assert!(!html.contains("<b>"));
}

#[test]
fn test_all_special_characters_escaped() {
    let html = render_html(&body(json!([text_para(r#"Tom & "Jerry's" <tag>"#)])));
    assert_eq!(
        html,
        "<p>Tom &amp; &quot;Jerry&#039;s&quot; &lt;tag&gt;</p>"
    );
}

// ==================== Inline Style Tests ====================

#[test]
fn test_bold_is_outermost() {
    let d = body(json!([
        { "paragraph": { "elements": [ { "textRun": {
            "content": "x",
            "textStyle": { "italic": true, "bold": true }
        } } ] } }
    ]));
    assert_eq!(render_html(&d), "<p><strong><em>x</em></strong></p>");
}

#[test]
fn test_link_is_innermost() {
    let d = body(json!([
        { "paragraph": { "elements": [ { "textRun": {
            "content": "go",
            "textStyle": {
                "link": { "url": "https://example.com/?q=a&b=\"c\"" },
                "underline": true,
                "bold": true
            }
        } } ] } }
    ]));
    assert_eq!(
        render_html(&d),
        r#"<p><strong><u><a href="https://example.com/?q=a&amp;b=&quot;c&quot;" target="_blank" rel="noopener noreferrer">go</a></u></strong></p>"#
    );
}

#[test]
fn test_runs_keep_document_order() {
    let d = body(json!([
        { "paragraph": { "elements": [
            { "textRun": { "content": "a" } },
            { "inlineObjectElement": { "inlineObjectId": "img" } },
            { "textRun": { "content": "b", "textStyle": { "italic": true } } },
            { "textRun": { "content": "c" } }
        ] } }
    ]));
    assert_eq!(render_html(&d), "<p>a<em>b</em>c</p>");
}

#[test]
fn test_empty_link_url_is_plain_text() {
    let d = body(json!([
        { "paragraph": { "elements": [ { "textRun": {
            "content": "plain",
            "textStyle": { "link": { "url": "" } }
        } } ] } }
    ]));
    assert_eq!(render_html(&d), "<p>plain</p>");
}

// ==================== Heading Tests ====================

#[test]
fn test_heading_levels() {
    let d = body(json!([styled_para("HEADING_3", "Title")]));
    assert_eq!(render_html(&d), "<h3>Title</h3>");

    let d = body(json!([styled_para("HEADING_6", "Deep")]));
    assert_eq!(render_html(&d), "<h6>Deep</h6>");
}

#[test]
fn test_out_of_range_heading_falls_back_to_h1() {
    let d = body(json!([styled_para("HEADING_99", "Title")]));
    assert_eq!(render_html(&d), "<h1>Title</h1>");

    let d = body(json!([styled_para("HEADING_abc", "Title")]));
    assert_eq!(render_html(&d), "<h1>Title</h1>");

    let d = body(json!([styled_para("HEADING_0", "Title")]));
    assert_eq!(render_html(&d), "<h1>Title</h1>");
}

#[test]
fn test_title_and_subtitle() {
    let d = body(json!([
        styled_para("TITLE", "Main"),
        styled_para("SUBTITLE", "Sub")
    ]));
    assert_eq!(render_html(&d), "<h1>Main</h1><h2>Sub</h2>");
}

#[test]
fn test_unrecognized_style_is_normal_text() {
    let d = body(json!([styled_para("CUSTOM_STYLE", "body")]));
    assert_eq!(render_html(&d), "<p>body</p>");
}

// ==================== List Tests ====================

#[test]
fn test_list_items_are_bare_siblings() {
    let d = body(json!([list_para("one"), list_para("two")]));
    let html = render_html(&d);
    assert_eq!(html, "<li>one</li><li>two</li>");
    assert!(!html.contains("<ul>"));
    assert!(!html.contains("<ol>"));
}

#[test]
fn test_heading_with_bullet_renders_as_heading() {
    let d = body(json!([
        { "paragraph": {
            "paragraphStyle": { "namedStyleType": "HEADING_2" },
            "bullet": { "listId": "kix.list1" },
            "elements": [ { "textRun": { "content": "Numbered heading" } } ]
        } }
    ]));
    assert_eq!(render_html(&d), "<h2>Numbered heading</h2>");
}

// ==================== Table Tests ====================

#[test]
fn test_two_by_two_table() {
    let d = body(json!([
        { "table": {
            "rows": 2,
            "columns": 2,
            "tableRows": [
                { "tableCells": [ cell("A"), cell("B") ] },
                { "tableCells": [ cell("C"), cell("D") ] }
            ]
        } }
    ]));
    let html = render_html(&d);

    let td = r#"<td style="padding: 8px; border: 1px solid #ddd;">"#;
    let expected = format!(
        r#"<table border="1" style="border-collapse: collapse; width: 100%; margin: 1em 0;"><tr>{td}<p>A</p></td>{td}<p>B</p></td></tr><tr>{td}<p>C</p></td>{td}<p>D</p></td></tr></table>"#
    );
    assert_eq!(html, expected);
    assert_eq!(html.matches("<tr>").count(), 2);
    assert_eq!(html.matches("<td ").count(), 4);
}

#[test]
fn test_table_missing_collections() {
    let d = body(json!([
        { "table": { "tableRows": [
            {},
            { "tableCells": [ {} ] }
        ] } }
    ]));
    let html = ungdoc::render::to_html(&d, &RenderOptions::new().with_table_styles(false));
    assert_eq!(html, "<table><tr></tr><tr><td></td></tr></table>");
}

#[test]
fn test_nested_table_in_cell_is_dropped() {
    let d = body(json!([
        { "table": { "tableRows": [ { "tableCells": [ { "content": [
            text_para("outer"),
            { "table": { "tableRows": [ { "tableCells": [ cell("inner") ] } ] } }
        ] } ] } ] } }
    ]));
    let html = ungdoc::render::to_html(&d, &RenderOptions::new().with_table_styles(false));
    assert_eq!(html, "<table><tr><td><p>outer</p></td></tr></table>");
}

#[test]
fn test_mixed_document() {
    let d = body(json!([
        styled_para("TITLE", "Onboarding"),
        text_para("Welcome"),
        list_para("Laptop"),
        list_para("Badge"),
        { "table": { "tableRows": [ { "tableCells": [ cell("k"), cell("v") ] } ] } }
    ]));
    let html = ungdoc::render::to_html(&d, &RenderOptions::new().with_table_styles(false));
    assert_eq!(
        html,
        "<h1>Onboarding</h1><p>Welcome</p><li>Laptop</li><li>Badge</li>\
         <table><tr><td><p>k</p></td><td><p>v</p></td></tr></table>"
    );
}

// ==================== Null Field Tests ====================

#[test]
fn test_null_style_flags_render_unstyled() {
    let d = body(json!([
        { "paragraph": { "elements": [
            { "textRun": {
                "content": "x",
                "textStyle": { "bold": null, "italic": null, "underline": null }
            } },
            { "textRun": {
                "content": "y",
                "textStyle": { "bold": true, "italic": null, "link": null }
            } }
        ] } }
    ]));
    assert_eq!(render_html(&d), "<p>x<strong>y</strong></p>");
}

#[test]
fn test_null_collections_and_styles() {
    let d = body(json!([
        { "paragraph": {
            "paragraphStyle": { "namedStyleType": null },
            "bullet": null,
            "elements": [ { "textRun": { "content": "plain", "textStyle": null } } ]
        } },
        { "paragraph": { "elements": null } },
        { "table": { "tableRows": [ { "tableCells": null } ] } }
    ]));
    let html = ungdoc::render::to_html(&d, &RenderOptions::new().with_table_styles(false));
    assert_eq!(html, "<p>plain</p><table><tr></tr></table>");
}
