//! HTML escaping for text content and attribute values.

/// Escape `&`, `<`, `>`, `"` and `'` in a single pass.
///
/// Each input character is inspected once, so the `&` of an entity produced
/// here is never escaped again.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#039;"),
            _ => result.push(c),
        }
    }
    result
}
