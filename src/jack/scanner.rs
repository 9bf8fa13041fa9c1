//! Scanner
//!
//! The core scanning engine. Source is processed one line at a time with a
//! two-cursor scan: `token_start` marks the beginning of the pending lexeme
//! and `pos` walks left to right, committing to decisions character by
//! character without backtracking. Block-comment and string-literal modes
//! persist across lines through [ScanState], which the caller threads into
//! every per-line scan.
//!
//! Per position the scanner checks, in precedence order:
//!
//! 1. `//` outside a string literal stops the line (this fires even inside a
//!    block comment, matching the reference behavior).
//! 2. `/*` in normal mode enters a block comment. Checked before `/` can be
//!    taken as a division symbol, and never inside a string literal.
//! 3. `*/` inside a block comment leaves it; nothing between the two markers
//!    ever becomes a token.
//! 4. `"` in normal mode enters a string literal; the quote is consumed, not
//!    emitted as a symbol.
//! 5. `"` inside a string literal emits the accumulated payload as a string
//!    constant.
//! 6. Any non-delimiter, or any character while inside a comment or string,
//!    advances the scan cursor.
//! 7. A delimiter in normal mode finalizes: a one-character symbol token when
//!    no lexeme is pending, otherwise the pending lexeme is classified.
//!
//! Character access is bounds-checked; the end of the line reads as a
//! delimiter sentinel so that a lexeme ending at the line break is still
//! flushed (every Jack token lies on a single line).

use crate::jack::classify::classify_lexeme;
use crate::jack::error::LexError;
use crate::jack::token::{is_delimiter, is_symbol_char, Token};

/// Lexical state carried across line boundaries.
///
/// At most one of the two flags is true at a time for well-formed input: the
/// scanner never opens a string inside a block comment or a comment inside a
/// string. The state is not reset between lines; a block comment opened on
/// one line changes how every following line scans until it closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanState {
    pub in_block_comment: bool,
    pub in_string_literal: bool,
}

impl ScanState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Lazy per-line token scanner.
///
/// Yields `Result<Token, LexError>` items in left-to-right lexical order.
/// Invalid lexemes are reported as `Err` and do not stop the scan. The
/// scanner borrows the shared [ScanState] mutably for the duration of the
/// line, so lines must be scanned strictly in order.
pub struct LineScanner<'a> {
    chars: Vec<char>,
    state: &'a mut ScanState,
    token_start: usize,
    pos: usize,
}

impl<'a> LineScanner<'a> {
    /// Create a scanner for one line (newline already stripped).
    pub fn new(line: &str, state: &'a mut ScanState) -> Self {
        LineScanner {
            chars: line.chars().collect(),
            state,
            token_start: 0,
            pos: 0,
        }
    }

    /// Bounds-checked character access; past-the-end reads are `None`.
    fn peek(&self, i: usize) -> Option<char> {
        self.chars.get(i).copied()
    }

    /// True if position `i` holds a delimiter. The end of the line counts as
    /// a delimiter so trailing lexemes are flushed.
    fn delimiter_at(&self, i: usize) -> bool {
        match self.peek(i) {
            Some(c) => is_delimiter(c),
            None => true,
        }
    }

    fn pending_lexeme(&self) -> String {
        self.chars[self.token_start..self.pos].iter().collect()
    }
}

impl Iterator for LineScanner<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos <= self.chars.len() {
            // Rule 1: line comment kills the rest of the line.
            if !self.state.in_string_literal
                && self.peek(self.pos) == Some('/')
                && self.peek(self.pos + 1) == Some('/')
            {
                self.pos = self.chars.len() + 1;
                return None;
            }

            // Rule 2: block comment open, before '/' can be a division symbol.
            if !self.state.in_block_comment
                && !self.state.in_string_literal
                && self.peek(self.pos) == Some('/')
                && self.peek(self.pos + 1) == Some('*')
            {
                self.state.in_block_comment = true;
            }

            // Rule 3: block comment close; no token crosses the boundary.
            if self.state.in_block_comment
                && self.peek(self.pos) == Some('*')
                && self.peek(self.pos + 1) == Some('/')
            {
                self.state.in_block_comment = false;
                self.pos += 2;
                self.token_start = self.pos;
                continue;
            }

            // Rule 4: string literal open; the quote is not part of the payload.
            if !self.state.in_block_comment
                && !self.state.in_string_literal
                && self.peek(self.pos) == Some('"')
            {
                self.state.in_string_literal = true;
                self.pos += 1;
                self.token_start = self.pos;
            }

            // Rule 5: string literal close. Re-checks the possibly advanced
            // position, so an immediately following quote closes an empty
            // string constant.
            if self.state.in_string_literal && self.peek(self.pos) == Some('"') {
                let text = self.pending_lexeme();
                self.state.in_string_literal = false;
                self.pos += 1;
                self.token_start = self.pos;
                return Some(Ok(Token::string_constant(text)));
            }

            // Rule 6: extend the pending lexeme, or consume comment/string
            // bodies character by character.
            if self.state.in_block_comment
                || self.state.in_string_literal
                || !self.delimiter_at(self.pos)
            {
                self.pos += 1;
            }

            // Rule 7: a delimiter in normal mode finalizes a token.
            if !self.state.in_block_comment
                && !self.state.in_string_literal
                && self.delimiter_at(self.pos)
            {
                if self.token_start == self.pos {
                    // The delimiter itself starts fresh: a symbol is a token
                    // of its own, whitespace and the line-end sentinel are
                    // absorbed.
                    let delimiter = self.peek(self.pos);
                    self.pos += 1;
                    self.token_start = self.pos;
                    if let Some(c) = delimiter {
                        if is_symbol_char(c) {
                            return Some(Ok(Token::symbol(c)));
                        }
                    }
                } else {
                    // A pending lexeme ends here. The delimiter is left in
                    // place and re-examined on the next iteration.
                    let lexeme = self.pending_lexeme();
                    self.token_start = self.pos;
                    return Some(classify_lexeme(&lexeme).map(|kind| Token::new(kind, lexeme)));
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jack::token::TokenKind;

    fn scan(line: &str, state: &mut ScanState) -> Vec<Result<Token, LexError>> {
        LineScanner::new(line, state).collect()
    }

    /// Scan a single line from a fresh state, expecting no invalid tokens.
    fn scan_ok(line: &str) -> Vec<Token> {
        let mut state = ScanState::new();
        scan(line, &mut state)
            .into_iter()
            .map(|item| item.expect("unexpected invalid token"))
            .collect()
    }

    #[test]
    fn test_statement_with_string_and_comparison() {
        let tokens = scan_ok(r#"if (x < 10) { return "ok"; }"#);
        assert_eq!(
            tokens,
            vec![
                Token::keyword("if"),
                Token::symbol('('),
                Token::identifier("x"),
                Token::symbol('<'),
                Token::integer_constant("10"),
                Token::symbol(')'),
                Token::symbol('{'),
                Token::keyword("return"),
                Token::string_constant("ok"),
                Token::symbol(';'),
                Token::symbol('}'),
            ]
        );
    }

    #[test]
    fn test_invalid_token_reported_not_emitted() {
        let mut state = ScanState::new();
        let items = scan("let y = 3x;", &mut state);
        assert_eq!(
            items,
            vec![
                Ok(Token::keyword("let")),
                Ok(Token::identifier("y")),
                Ok(Token::symbol('=')),
                Err(LexError::InvalidToken {
                    lexeme: "3x".to_string()
                }),
                Ok(Token::symbol(';')),
            ]
        );
    }

    #[test]
    fn test_line_comment_stops_the_line() {
        let tokens = scan_ok("do draw(); // render the frame");
        assert_eq!(
            tokens,
            vec![
                Token::keyword("do"),
                Token::identifier("draw"),
                Token::symbol('('),
                Token::symbol(')'),
                Token::symbol(';'),
            ]
        );
    }

    #[test]
    fn test_full_line_comment() {
        assert_eq!(scan_ok("// nothing here"), vec![]);
    }

    #[test]
    fn test_block_comment_within_a_line() {
        let tokens = scan_ok("a /* ignored */ b");
        assert_eq!(
            tokens,
            vec![Token::identifier("a"), Token::identifier("b")]
        );
    }

    #[test]
    fn test_block_comment_spans_lines() {
        let mut state = ScanState::new();
        assert_eq!(scan("/* start", &mut state), vec![]);
        assert!(state.in_block_comment);

        let items = scan("end */ let a = 1;", &mut state);
        assert!(!state.in_block_comment);
        assert_eq!(
            items,
            vec![
                Ok(Token::keyword("let")),
                Ok(Token::identifier("a")),
                Ok(Token::symbol('=')),
                Ok(Token::integer_constant("1")),
                Ok(Token::symbol(';')),
            ]
        );
    }

    #[test]
    fn test_string_constant_keeps_spaces() {
        let tokens = scan_ok(r#"let s = "hello world";"#);
        assert_eq!(
            tokens,
            vec![
                Token::keyword("let"),
                Token::identifier("s"),
                Token::symbol('='),
                Token::string_constant("hello world"),
                Token::symbol(';'),
            ]
        );
    }

    #[test]
    fn test_empty_string_constant() {
        assert_eq!(scan_ok(r#""""#), vec![Token::string_constant("")]);
    }

    #[test]
    fn test_unterminated_string_carries_state() {
        let mut state = ScanState::new();
        let items = scan(r#"say "oops"#, &mut state);
        assert_eq!(items, vec![Ok(Token::identifier("say"))]);
        assert!(state.in_string_literal);
        assert!(!state.in_block_comment);
    }

    #[test]
    fn test_string_closes_on_a_later_line() {
        let mut state = ScanState::new();
        assert_eq!(scan(r#""abc"#, &mut state), vec![]);
        assert!(state.in_string_literal);

        let items = scan(r#"def" x"#, &mut state);
        assert!(!state.in_string_literal);
        assert_eq!(
            items,
            vec![
                Ok(Token::string_constant("def")),
                Ok(Token::identifier("x")),
            ]
        );
    }

    #[test]
    fn test_adjacent_symbols() {
        let tokens = scan_ok("x=y;");
        assert_eq!(
            tokens,
            vec![
                Token::identifier("x"),
                Token::symbol('='),
                Token::identifier("y"),
                Token::symbol(';'),
            ]
        );
    }

    #[test]
    fn test_division_is_not_a_comment() {
        let tokens = scan_ok("5/3");
        assert_eq!(
            tokens,
            vec![
                Token::integer_constant("5"),
                Token::symbol('/'),
                Token::integer_constant("3"),
            ]
        );
    }

    #[test]
    fn test_tab_is_a_delimiter() {
        let tokens = scan_ok("var\tint\tcount");
        assert_eq!(
            tokens,
            vec![
                Token::keyword("var"),
                Token::keyword("int"),
                Token::identifier("count"),
            ]
        );
    }

    #[test]
    fn test_trailing_lexeme_flushed_at_line_end() {
        assert_eq!(scan_ok("return"), vec![Token::keyword("return")]);
        assert_eq!(
            scan_ok("count"),
            vec![Token::identifier("count")]
        );
    }

    #[test]
    fn test_empty_and_blank_lines() {
        assert_eq!(scan_ok(""), vec![]);
        assert_eq!(scan_ok("   \t "), vec![]);
    }

    #[test]
    fn test_line_comment_fires_inside_block_comment() {
        // Matches the reference behavior: '//' stops the line even while a
        // block comment is open, so a '*/' after it on the same line is not
        // seen.
        let mut state = ScanState::new();
        assert_eq!(scan("/* x // y */", &mut state), vec![]);
        assert!(state.in_block_comment);
    }

    #[test]
    fn test_comment_markers_inside_string_are_content() {
        let tokens = scan_ok(r#"let s = "a/*b//c";"#);
        assert_eq!(tokens[3], Token::string_constant("a/*b//c"));
    }

    #[test]
    fn test_quote_inside_block_comment_is_content() {
        let mut state = ScanState::new();
        let items = scan(r#"/* "not a string" */ x"#, &mut state);
        assert_eq!(items, vec![Ok(Token::identifier("x"))]);
        assert!(!state.in_string_literal);
        assert!(!state.in_block_comment);
    }

    #[test]
    fn test_opening_quote_is_never_a_symbol_token() {
        let tokens = scan_ok(r#""q""#);
        assert_eq!(tokens, vec![Token::string_constant("q")]);
        assert!(tokens.iter().all(|t| t.kind != TokenKind::Symbol));
    }

    #[test]
    fn test_stray_close_marker_outside_comment() {
        // Outside a block comment '*' and '/' are ordinary symbols.
        let tokens = scan_ok("a */ b");
        assert_eq!(
            tokens,
            vec![
                Token::identifier("a"),
                Token::symbol('*'),
                Token::symbol('/'),
                Token::identifier("b"),
            ]
        );
    }
}
