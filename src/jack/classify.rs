//! Lexeme classification
//!
//! Pure decision functions over complete, delimiter-bounded lexemes. The
//! scanner hands every non-empty span between delimiters to
//! [classify_lexeme]; symbols and string constants never reach this module
//! because they are recognized positionally during the scan.

use crate::jack::error::LexError;
use crate::jack::token::TokenKind;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// The 21 reserved words of the Jack grammar.
pub const KEYWORDS: [&str; 21] = [
    "class",
    "constructor",
    "function",
    "method",
    "int",
    "boolean",
    "char",
    "void",
    "var",
    "static",
    "field",
    "let",
    "do",
    "if",
    "else",
    "while",
    "return",
    "true",
    "false",
    "null",
    "this",
];

static KEYWORD_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| KEYWORDS.iter().copied().collect());

/// Check if a lexeme is a reserved word (case-sensitive, exact match).
pub fn is_keyword(text: &str) -> bool {
    KEYWORD_SET.contains(text)
}

/// Classify a non-empty lexeme bounded by delimiters.
///
/// Precedence: all-digit lexemes are integer constants, exact keyword matches
/// are keywords, and anything starting with a letter or underscore is an
/// identifier (subsequent characters are accepted without further checks).
/// Everything else is an invalid token, e.g. `3x`, which starts like an
/// integer but is not one.
pub fn classify_lexeme(text: &str) -> Result<TokenKind, LexError> {
    if text.chars().all(|c| c.is_ascii_digit()) {
        Ok(TokenKind::IntegerConstant)
    } else if is_keyword(text) {
        Ok(TokenKind::Keyword)
    } else if text
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
    {
        Ok(TokenKind::Identifier)
    } else {
        Err(LexError::InvalidToken {
            lexeme: text.to_string(),
        })
    }
}
