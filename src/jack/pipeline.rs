//! Whole-source tokenization pipeline
//!
//! Drives the per-line scanner over a complete source text, threading one
//! [ScanState] through all lines in order. Tokens and diagnostics are
//! collected on separate channels: invalid lexemes never abort the scan and
//! never appear in the token stream.

use crate::jack::error::LexError;
use crate::jack::scanner::{LineScanner, ScanState};
use crate::jack::token::Token;
use std::fmt;

/// An invalid lexeme with the 1-based line it was found on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: usize,
    pub error: LexError,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.error)
    }
}

/// Output of a full tokenization run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizerOutput {
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Tokenize a complete source text.
///
/// Lines are scanned in file order against a single shared [ScanState], so
/// block comments and string literals carry across line boundaries. The run
/// is a pure function of the source: rescanning the same text always yields
/// the same output.
pub fn tokenize_source(source: &str) -> TokenizerOutput {
    let mut state = ScanState::new();
    let mut tokens = Vec::new();
    let mut diagnostics = Vec::new();

    for (index, line) in source.lines().enumerate() {
        for item in LineScanner::new(line, &mut state) {
            match item {
                Ok(token) => tokens.push(token),
                Err(error) => diagnostics.push(Diagnostic {
                    line: index + 1,
                    error,
                }),
            }
        }
    }

    TokenizerOutput {
        tokens,
        diagnostics,
    }
}
