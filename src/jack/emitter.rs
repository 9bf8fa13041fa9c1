//! Markup emission
//!
//! Renders a token sequence as the standard Jack token stream: a `<tokens>`
//! envelope with one `<kind> text </kind>` record per token, in scan order,
//! with no buffering or reordering. Symbol payloads are XML-escaped; all
//! other payloads are emitted verbatim (their lexemes cannot contain the
//! unsafe characters by grammar construction). A JSON rendering of the same
//! sequence is provided for tooling.

use crate::jack::escape::escape_symbol;
use crate::jack::token::{Token, TokenKind};
use std::io::{self, Write};

/// Write the XML token stream to a sink.
pub fn write_xml<W: Write>(tokens: &[Token], sink: &mut W) -> io::Result<()> {
    writeln!(sink, "<tokens>")?;
    for token in tokens {
        write_record(token, sink)?;
    }
    writeln!(sink, "</tokens>")
}

/// Write one `<kind> text </kind>` record.
fn write_record<W: Write>(token: &Token, sink: &mut W) -> io::Result<()> {
    let name = token.kind.xml_name();
    let payload = match token.kind {
        TokenKind::Symbol => token.text.chars().map(escape_symbol).collect(),
        _ => token.text.clone(),
    };
    writeln!(sink, "<{}> {} </{}>", name, payload, name)
}

/// Render the XML token stream as a string.
pub fn render_xml(tokens: &[Token]) -> String {
    let mut buffer = Vec::new();
    // Writing to a Vec cannot fail
    write_xml(tokens, &mut buffer).expect("writing to an in-memory buffer failed");
    String::from_utf8(buffer).expect("emitted markup is valid UTF-8")
}

/// Render the token sequence as pretty-printed JSON.
pub fn render_json(tokens: &[Token]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(tokens)
}
