//! Bounded lookahead over a [`TokenSource`].

use std::collections::VecDeque;

use crate::token::Token;
use crate::token::TokenKind;
use crate::token_source::TokenSource;

/// Buffers tokens pulled from a [`TokenSource`] so the parser can look at
/// the current token and the one after it without consuming either.
///
/// Tokens are stored in a [`VecDeque`]; `consume()` pops from the front.
/// The buffer never holds more tokens than the deepest `peek_nth()` asked
/// for (two, for this grammar).
///
/// Once the underlying source is exhausted the stream keeps answering with
/// the last `Eof` token it saw, so callers can peek past the end without
/// special-casing `None`.
pub struct TokenStream<'src, TTokenSource: TokenSource<'src>> {
    token_source: TTokenSource,
    buffer: VecDeque<Token<'src>>,

    /// The final `Eof` token, replayed once the source runs dry.
    eof: Option<Token<'src>>,
}

impl<'src, TTokenSource: TokenSource<'src>> TokenStream<'src, TTokenSource> {
    pub fn new(token_source: TTokenSource) -> Self {
        Self {
            token_source,
            buffer: VecDeque::new(),
            eof: None,
        }
    }

    /// Advance to the next token and return it as an owned value.
    ///
    /// Returns `None` only if the source ended without ever producing an
    /// `Eof` token.
    pub fn consume(&mut self) -> Option<Token<'src>> {
        self.ensure_buffer_has(1);
        self.buffer.pop_front().or_else(|| self.eof.clone())
    }

    /// Returns the number of tokens currently buffered (unconsumed).
    pub fn current_buffer_len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if the next token is `Eof` (or the source is empty).
    pub fn is_at_end(&mut self) -> bool {
        match self.peek() {
            None => true,
            Some(token) => token.kind == TokenKind::Eof,
        }
    }

    /// Peek at the next token without consuming it.
    #[inline]
    pub fn peek(&mut self) -> Option<&Token<'src>> {
        self.peek_nth(0)
    }

    /// Peek at the nth token ahead (0-indexed from the next unconsumed
    /// token). Positions past the end of input resolve to the `Eof` token.
    pub fn peek_nth(&mut self, n: usize) -> Option<&Token<'src>> {
        self.ensure_buffer_has(n + 1);
        if n < self.buffer.len() {
            self.buffer.get(n)
        } else {
            self.eof.as_ref()
        }
    }

    /// Returns the kind of the nth upcoming token, if any.
    pub fn peek_kind_nth(&mut self, n: usize) -> Option<TokenKind> {
        self.peek_nth(n).map(|token| token.kind)
    }

    fn ensure_buffer_has(&mut self, count: usize) {
        while self.buffer.len() < count {
            match self.token_source.next() {
                Some(token) => {
                    if token.kind == TokenKind::Eof {
                        self.eof = Some(token.clone());
                    }
                    self.buffer.push_back(token);
                },
                None => break,
            }
        }
    }
}
