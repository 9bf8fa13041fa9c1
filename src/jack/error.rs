//! Error types for the Jack tokenizer

use std::fmt;

/// Errors that can occur during lexical analysis
///
/// Lexical errors are local and recoverable: the scanner reports them and
/// continues with the next lexeme. I/O failures belong to the caller, not to
/// the scanning engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A lexeme that is neither an integer constant, a keyword, nor
    /// identifier-shaped (e.g. `3x`).
    InvalidToken { lexeme: String },
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::InvalidToken { lexeme } => {
                write!(
                    f,
                    "invalid token '{}': not a keyword, identifier, or integer constant",
                    lexeme
                )
            }
        }
    }
}

impl std::error::Error for LexError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = LexError::InvalidToken {
            lexeme: "3x".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid token '3x': not a keyword, identifier, or integer constant"
        );
    }
}
