//! A [`TokenSource`](crate::token_source::TokenSource) that lexes query
//! text from a `&str`.
//!
//! Token literals borrow directly from the source string
//! (`Cow::Borrowed`), so lexing never allocates for names or strings.
//!
//! # Usage
//!
//! ```rust
//! use pushql_parser::token::TokenKind;
//! use pushql_parser::token_source::Lexer;
//!
//! let kinds: Vec<TokenKind> = Lexer::new("query { posts, }")
//!     .map(|token| token.kind)
//!     .collect();
//! assert_eq!(kinds, vec![
//!     TokenKind::Query,
//!     TokenKind::CurlyBraceOpen,
//!     TokenKind::Ident,
//!     TokenKind::Comma,
//!     TokenKind::CurlyBraceClose,
//!     TokenKind::Eof,
//! ]);
//! ```

use crate::smallvec;
use crate::token::lookup_identifier;
use crate::token::Token;
use crate::token::TokenKind;
use crate::ErrorNote;
use crate::ErrorNotes;
use crate::SourcePosition;
use crate::SourceSpan;
use std::borrow::Cow;

/// Lexes query text into [`Token`]s, one token per call.
///
/// The lexer keeps only a cursor into the source; it never buffers past
/// tokens. Lookahead is the job of [`TokenStream`](crate::TokenStream).
pub struct Lexer<'src> {
    source: &'src str,

    /// Current byte offset from the start of `source`.
    curr_byte_offset: usize,

    /// Current 0-based line number.
    curr_line: usize,

    /// Current 0-based character column.
    curr_col: usize,

    /// Whether the previous character was `\r`, so that `\r\n` counts as a
    /// single line break.
    last_char_was_cr: bool,

    /// Whether the iterator has already yielded its `Eof` token.
    finished: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            curr_byte_offset: 0,
            curr_line: 0,
            curr_col: 0,
            last_char_was_cr: false,
            finished: false,
        }
    }

    /// Returns the next token and advances past it.
    ///
    /// Once the input is exhausted every call returns an
    /// [`TokenKind::Eof`] token at the end position.
    pub fn next_token(&mut self) -> Token<'src> {
        self.skip_whitespace();
        let start = self.curr_position();

        match self.peek_char() {
            None => Token::new(TokenKind::Eof, "", SourceSpan::new(start.clone(), start)),
            Some('@') => self.lex_punctuator(TokenKind::At, start),
            Some('{') => self.lex_punctuator(TokenKind::CurlyBraceOpen, start),
            Some('}') => self.lex_punctuator(TokenKind::CurlyBraceClose, start),
            Some('(') => self.lex_punctuator(TokenKind::ParenOpen, start),
            Some(')') => self.lex_punctuator(TokenKind::ParenClose, start),
            Some(':') => self.lex_punctuator(TokenKind::Colon, start),
            Some(',') => self.lex_punctuator(TokenKind::Comma, start),
            Some('.') => self.lex_spread_or_dot(start),
            Some('"') => self.lex_string(start),
            Some(c) if is_identifier_char(c) => self.lex_identifier(start),
            Some(_) => self.lex_illegal_character(start),
        }
    }

    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    fn remaining(&self) -> &'src str {
        &self.source[self.curr_byte_offset..]
    }

    fn curr_position(&self) -> SourcePosition {
        SourcePosition::new(self.curr_line, self.curr_col, self.curr_byte_offset)
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Consumes the next character and updates position tracking.
    fn consume(&mut self) -> Option<char> {
        let ch = self.peek_char()?;

        match ch {
            '\n' if self.last_char_was_cr => {
                // Second half of `\r\n`; the line was already counted.
                self.last_char_was_cr = false;
            },
            '\n' => {
                self.curr_line += 1;
                self.curr_col = 0;
            },
            '\r' => {
                self.curr_line += 1;
                self.curr_col = 0;
                self.last_char_was_cr = true;
            },
            _ => {
                self.curr_col += 1;
                self.last_char_was_cr = false;
            },
        }

        self.curr_byte_offset += ch.len_utf8();
        Some(ch)
    }

    /// Builds a token whose literal is the source text from `start` to the
    /// current position.
    fn make_token(
        &self,
        kind: TokenKind,
        start: SourcePosition,
        error_notes: ErrorNotes,
    ) -> Token<'src> {
        let literal = &self.source[start.byte_offset()..self.curr_byte_offset];
        Token {
            kind,
            literal: Cow::Borrowed(literal),
            span: SourceSpan::new(start, self.curr_position()),
            error_notes,
        }
    }

    /// Skips spaces, tabs, and line terminators.
    fn skip_whitespace(&mut self) {
        while let Some(' ' | '\t' | '\n' | '\r') = self.peek_char() {
            self.consume();
        }
    }

    // =========================================================================
    // Token lexing
    // =========================================================================

    fn lex_punctuator(&mut self, kind: TokenKind, start: SourcePosition) -> Token<'src> {
        self.consume();
        self.make_token(kind, start, smallvec![])
    }

    /// Lexes `...` as a single spread token. Any other `.` is an illegal
    /// token covering just that one period.
    fn lex_spread_or_dot(&mut self, start: SourcePosition) -> Token<'src> {
        if self.remaining().starts_with("...") {
            self.consume();
            self.consume();
            self.consume();
            return self.make_token(TokenKind::Spread, start, smallvec![]);
        }

        self.consume();
        let error_notes = if self.peek_char() == Some('.') {
            smallvec![ErrorNote::help(
                "A fragment spread is written as exactly three consecutive dots: `...`"
            )]
        } else {
            smallvec![]
        };
        self.make_token(TokenKind::Illegal, start, error_notes)
    }

    /// Lexes a name and classifies it against the reserved-word table.
    ///
    /// Names match `/[_A-Za-z]+/`; digits are not part of names in this
    /// language.
    fn lex_identifier(&mut self, start: SourcePosition) -> Token<'src> {
        while let Some(ch) = self.peek_char() {
            if !is_identifier_char(ch) {
                break;
            }
            self.consume();
        }

        let name = &self.source[start.byte_offset()..self.curr_byte_offset];
        self.make_token(lookup_identifier(name), start, smallvec![])
    }

    /// Lexes a double-quoted string literal. The token literal keeps the
    /// quotes and escape sequences as written; see
    /// [`Token::cook_string_value()`].
    fn lex_string(&mut self, start: SourcePosition) -> Token<'src> {
        let quote_start = start.clone();
        self.consume();

        loop {
            match self.peek_char() {
                None | Some('\n') | Some('\r') => {
                    let quote_span = SourceSpan::new(
                        quote_start.clone(),
                        SourcePosition::new(
                            quote_start.line(),
                            quote_start.col() + 1,
                            quote_start.byte_offset() + 1,
                        ),
                    );
                    let error_notes = smallvec![
                        ErrorNote::general_with_span(
                            "unterminated string literal started here",
                            quote_span,
                        ),
                        ErrorNote::help("Add a closing `\"` on the same line"),
                    ];
                    return self.make_token(TokenKind::Illegal, start, error_notes);
                },
                Some('"') => {
                    self.consume();
                    break;
                },
                Some('\\') => {
                    self.consume();
                    if let Some(next) = self.peek_char()
                        && next != '\n'
                        && next != '\r'
                    {
                        self.consume();
                    }
                },
                Some(_) => {
                    self.consume();
                },
            }
        }

        self.make_token(TokenKind::StringValue, start, smallvec![])
    }

    /// Lexes a single unrecognized character (a full Unicode scalar, so
    /// literals always stay valid UTF-8 slices).
    fn lex_illegal_character(&mut self, start: SourcePosition) -> Token<'src> {
        let ch = self.consume();
        let error_notes = match ch {
            Some(c) if c.is_ascii_digit() => smallvec![ErrorNote::help(
                "Numbers are not supported: names may only contain letters and `_`"
            )],
            _ => smallvec![],
        };
        self.make_token(TokenKind::Illegal, start, error_notes)
    }
}

// =============================================================================
// Iterator implementation
// =============================================================================

/// Yields every token up to and including the first `Eof`, then `None`.
impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            self.finished = true;
        }
        Some(token)
    }
}

fn is_identifier_char(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}
