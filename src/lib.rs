//! # jack-tokenizer
//!
//! A tokenizer for the Jack language (the teaching language of the
//! nand2tetris course). Jack source text is scanned one line at a time into a
//! flat sequence of classified tokens, which can be rendered as the standard
//! `<tokens>` XML stream or as JSON.
//!
//! The scanning engine lives in the [jack] module; the `jackt` binary wraps
//! it with file I/O and output-path derivation.

pub mod jack;

pub use jack::{tokenize_source, LexError, ScanState, Token, TokenKind, TokenizerOutput};
