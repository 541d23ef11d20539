//! Integration tests for plain text extraction.

use serde_json::json;
use ungdoc::{extract_text, Document};

fn doc(value: serde_json::Value) -> Document {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_no_body_is_empty() {
    assert_eq!(extract_text(&doc(json!({ "title": "x" }))), "");
    assert_eq!(extract_text(&doc(json!({ "body": {} }))), "");
}

#[test]
fn test_tables_are_excluded() {
    let d = doc(json!({ "body": { "content": [
        { "table": { "tableRows": [ { "tableCells": [ { "content": [
            { "paragraph": { "elements": [ { "textRun": { "content": "cell text" } } ] } }
        ] } ] } ] } },
        { "paragraph": { "elements": [ { "textRun": { "content": "paragraph text" } } ] } }
    ] } }));
    assert_eq!(extract_text(&d), "paragraph text");
}

#[test]
fn test_runs_concatenate_without_separators() {
    let d = doc(json!({ "body": { "content": [
        { "paragraph": { "elements": [
            { "textRun": { "content": "Hello", "textStyle": { "bold": true } } },
            { "textRun": { "content": " world" } }
        ] } },
        { "paragraph": { "elements": [ { "textRun": { "content": "next" } } ] } }
    ] } }));
    assert_eq!(extract_text(&d), "Hello worldnext");
}

#[test]
fn test_text_is_not_escaped() {
    let d = doc(json!({ "body": { "content": [
        { "paragraph": {
            "paragraphStyle": { "namedStyleType": "HEADING_1" },
            "elements": [ { "textRun": { "content": "<a & b>\n" } } ]
        } }
    ] } }));
    assert_eq!(extract_text(&d), "<a & b>\n");
}

#[test]
fn test_ignored_elements_contribute_nothing() {
    let d = doc(json!({ "body": { "content": [
        { "sectionBreak": {} },
        { "paragraph": { "elements": [
            { "inlineObjectElement": { "inlineObjectId": "x" } },
            { "textRun": {} },
            { "textRun": { "content": "kept" } }
        ] } },
        { "paragraph": {} }
    ] } }));
    assert_eq!(extract_text(&d), "kept");
}
