//! Main module for the Jack tokenizer

pub mod classify;
pub mod emitter;
pub mod error;
pub mod escape;
pub mod pipeline;
pub mod scanner;
pub mod token;

pub use error::LexError;
pub use pipeline::{tokenize_source, Diagnostic, TokenizerOutput};
pub use scanner::{LineScanner, ScanState};
pub use token::{Token, TokenKind};
