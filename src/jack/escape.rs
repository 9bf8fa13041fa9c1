//! XML escaping for symbol payloads
//!
//! Four Jack symbols collide with XML markup and must be entity-escaped in
//! the output stream. Escaping applies only to Symbol payloads: keyword,
//! identifier, and constant lexemes cannot contain these characters by
//! construction. A `"` can also never reach symbol emission because the
//! scanner always intercepts it as a string-literal delimiter, but the map
//! stays total over chars.

/// Escape a single symbol character for XML output.
pub fn escape_symbol(c: char) -> String {
    match c {
        '<' => "&lt;".to_string(),
        '>' => "&gt;".to_string(),
        '"' => "&quot;".to_string(),
        '&' => "&amp;".to_string(),
        _ => c.to_string(),
    }
}
