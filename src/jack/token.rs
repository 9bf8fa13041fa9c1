//! Token types for the Jack language
//!
//! This module defines the token kinds produced by the scanner, the fixed
//! symbol set, and the character predicates that drive token boundaries.
//! Jack tokens never span lines, so a token is fully described by its kind
//! and its lexeme text.

use serde::Serialize;

/// The 19 one-character operators and punctuation marks of the Jack grammar.
pub const SYMBOLS: [char; 19] = [
    '{', '}', '(', ')', '[', ']', '.', ',', ';', '+', '-', '*', '/', '&', '|', '<', '>', '=', '~',
];

/// Check if a character is one of the Jack symbol characters.
pub fn is_symbol_char(c: char) -> bool {
    SYMBOLS.contains(&c)
}

/// Check if a character terminates a pending lexeme.
///
/// Delimiters are the symbol characters plus space and tab. They are never
/// part of a keyword, identifier, or integer-constant lexeme.
pub fn is_delimiter(c: char) -> bool {
    is_symbol_char(c) || c == ' ' || c == '\t'
}

/// The five token classifications of the Jack grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenKind {
    Keyword,
    Symbol,
    Identifier,
    IntegerConstant,
    StringConstant,
}

impl TokenKind {
    /// The tag name used for this kind in the XML token stream.
    pub fn xml_name(&self) -> &'static str {
        match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Symbol => "symbol",
            TokenKind::Identifier => "identifier",
            TokenKind::IntegerConstant => "integerConstant",
            TokenKind::StringConstant => "stringConstant",
        }
    }
}

/// A classified lexeme.
///
/// `text` is the exact source lexeme. For string constants it excludes the
/// enclosing quotes; for symbols it is the raw character (XML escaping is
/// applied at emission, not here).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
        }
    }

    pub fn keyword(text: impl Into<String>) -> Self {
        Token::new(TokenKind::Keyword, text)
    }

    pub fn symbol(c: char) -> Self {
        Token::new(TokenKind::Symbol, c.to_string())
    }

    pub fn identifier(text: impl Into<String>) -> Self {
        Token::new(TokenKind::Identifier, text)
    }

    pub fn integer_constant(text: impl Into<String>) -> Self {
        Token::new(TokenKind::IntegerConstant, text)
    }

    pub fn string_constant(text: impl Into<String>) -> Self {
        Token::new(TokenKind::StringConstant, text)
    }
}
