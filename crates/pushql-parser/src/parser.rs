//! Recursive descent parser for query documents.
//!
//! This module provides [`Parser`], a parser that works with any token
//! source implementing [`TokenSource`]. Each grammar rule has a `parse_*`
//! method returning `Result<Node, ()>`, where `Err(())` means an error was
//! recorded and the statement being parsed is abandoned.
//!
//! # Error Handling
//!
//! Only the first error is kept; later ones are logged at trace level and
//! dropped. After a failed statement the document loop resumes scanning
//! for the next `query` or `fragment` keyword, skipping everything else,
//! so statements after the failure still end up in the document.

use crate::ast;
use crate::token::Token;
use crate::token::TokenKind;
use crate::token_source::Lexer;
use crate::token_source::TokenSource;
use crate::ParseError;
use crate::ParseErrorKind;
use crate::ParseResult;
use crate::SourcePosition;
use crate::SourceSpan;
use crate::TokenStream;

/// A recursive descent parser for query documents.
///
/// # Usage
///
/// ```
/// use pushql_parser::Parser;
///
/// let source = r#"
///     query {
///         posts {
///             __typename,
///             ...Post_TextPost @push(module: "TextPost.js"),
///         }
///     }
///     fragment Post_TextPost on TextPost { text, }
/// "#;
/// let result = Parser::new(source).parse();
///
/// assert!(result.is_ok());
/// let doc = result.valid_ast().unwrap();
/// assert_eq!(doc.fragments.len(), 1);
/// ```
pub struct Parser<'src, TTokenSource: TokenSource<'src>> {
    token_stream: TokenStream<'src, TTokenSource>,

    /// The first error recorded. Later errors are dropped.
    error: Option<ParseError>,

    /// Current selection-set nesting depth.
    recursion_depth: usize,

    /// End position of the most recently consumed token, used to anchor
    /// end-of-input errors and node spans.
    last_end_position: Option<SourcePosition>,
}

impl<'src> Parser<'src, Lexer<'src>> {
    /// Creates a parser that lexes `source` directly.
    ///
    /// Accepts anything that can be referenced as a `str`, including `&str`
    /// and `&String`.
    pub fn new<S: AsRef<str> + ?Sized>(source: &'src S) -> Self {
        Self::from_token_source(Lexer::new(source.as_ref()))
    }
}

impl<'src, TTokenSource: TokenSource<'src>> Parser<'src, TTokenSource> {
    /// Maximum selection-set nesting depth.
    ///
    /// Keeps adversarial input like `query { a { a { a { ...` from
    /// overflowing the stack.
    pub const MAX_RECURSION_DEPTH: usize = 64;

    /// Creates a parser over an arbitrary token source.
    pub fn from_token_source(token_source: TTokenSource) -> Self {
        Self {
            token_stream: TokenStream::new(token_source),
            error: None,
            recursion_depth: 0,
            last_end_position: None,
        }
    }

    /// Parses a whole document.
    ///
    /// The result always carries a document: everything that parsed
    /// cleanly is kept even when an error occurred.
    pub fn parse(mut self) -> ParseResult<ast::Document<'src>> {
        let document = self.parse_document();
        match self.error {
            None => ParseResult::ok(document),
            Some(error) => ParseResult::recovered(document, error),
        }
    }

    // =========================================================================
    // Error recording
    // =========================================================================

    /// Records a parse error unless one has already been recorded.
    fn record_error(&mut self, error: ParseError) {
        if self.error.is_none() {
            self.error = Some(error);
        } else {
            log::trace!(
                "dropping secondary parse error: {}",
                error.format_oneline(),
            );
        }
    }

    /// Records an error for the upcoming token, which matched none of
    /// `expected`. The token is not consumed.
    fn unexpected<T>(&mut self, rule: &str, expected: &[TokenKind]) -> Result<T, ()> {
        let found = self.token_stream.peek().cloned();
        let error = match found {
            Some(token) if token.kind == TokenKind::Illegal => ParseError::with_notes(
                mismatch_message(rule, expected, token.kind, token.literal()),
                token.span,
                ParseErrorKind::IllegalToken {
                    literal: token.literal.into_owned(),
                },
                token.error_notes,
            ),
            Some(token) if token.kind == TokenKind::Eof => ParseError::new(
                mismatch_message(rule, expected, token.kind, token.literal()),
                token.span,
                ParseErrorKind::UnexpectedEof {
                    expected: expected.to_vec(),
                },
            ),
            Some(token) => ParseError::new(
                mismatch_message(rule, expected, token.kind, token.literal()),
                token.span,
                ParseErrorKind::UnexpectedToken {
                    expected: expected.to_vec(),
                    found: token.kind,
                },
            ),
            None => ParseError::new(
                mismatch_message(rule, expected, TokenKind::Eof, ""),
                self.eof_span(),
                ParseErrorKind::UnexpectedEof {
                    expected: expected.to_vec(),
                },
            ),
        };
        self.record_error(error);
        Err(())
    }

    // =========================================================================
    // Token expectation helpers
    // =========================================================================

    /// Expects a specific token kind and consumes it.
    fn expect(&mut self, rule: &str, kind: TokenKind) -> Result<Token<'src>, ()> {
        self.expect_one_of(rule, &[kind])
    }

    /// Expects one of several token kinds and consumes the token.
    fn expect_one_of(
        &mut self,
        rule: &str,
        expected: &[TokenKind],
    ) -> Result<Token<'src>, ()> {
        let matched = self
            .token_stream
            .peek_kind_nth(0)
            .is_some_and(|kind| expected.contains(&kind));
        if matched {
            self.consume_token().ok_or(())
        } else {
            self.unexpected(rule, expected)
        }
    }

    /// Checks if the upcoming token has the given kind without consuming.
    fn peek_is(&mut self, kind: TokenKind) -> bool {
        self.token_stream.peek_kind_nth(0) == Some(kind)
    }

    /// Consumes the next token and tracks its end position.
    fn consume_token(&mut self) -> Option<Token<'src>> {
        let token = self.token_stream.consume();
        if let Some(ref t) = token {
            self.last_end_position = Some(t.span.end_exclusive.clone());
        }
        token
    }

    /// Returns a span for end-of-input errors, anchored to the end of the
    /// last consumed token if available.
    fn eof_span(&self) -> SourceSpan {
        match &self.last_end_position {
            Some(pos) => SourceSpan::new(pos.clone(), pos.clone()),
            None => SourceSpan::empty(),
        }
    }

    /// Builds a span from the start of `start` to the end of the last
    /// consumed token.
    fn make_span(&self, start: SourceSpan) -> SourceSpan {
        let end = self
            .last_end_position
            .clone()
            .unwrap_or_else(|| start.start_inclusive.clone());
        SourceSpan::new(start.start_inclusive, end)
    }

    fn enter_recursion(&mut self) -> Result<(), ()> {
        self.recursion_depth += 1;
        if self.recursion_depth > Self::MAX_RECURSION_DEPTH {
            let span = self
                .token_stream
                .peek()
                .map(|t| t.span.clone())
                .unwrap_or_else(|| self.eof_span());
            self.record_error(ParseError::new(
                format!(
                    "selection set: nesting exceeds the maximum depth of {}",
                    Self::MAX_RECURSION_DEPTH,
                ),
                span,
                ParseErrorKind::NestingTooDeep,
            ));
            self.recursion_depth -= 1;
            return Err(());
        }
        Ok(())
    }

    fn exit_recursion(&mut self) {
        self.recursion_depth -= 1;
    }

    // =========================================================================
    // Document level
    // =========================================================================

    /// `Document := (Query | Fragment)*`
    fn parse_document(&mut self) -> ast::Document<'src> {
        let mut operation = None;
        let mut fragments = vec![];
        let mut queries_seen = 0usize;

        loop {
            match self.token_stream.peek_kind_nth(0) {
                None => break,
                Some(TokenKind::Eof) => {
                    self.consume_token();
                    break;
                },
                Some(TokenKind::Query) => {
                    queries_seen += 1;
                    let start = self.token_stream.peek().map(|t| t.span.clone());
                    let parsed = self.parse_query();
                    if queries_seen > 1 {
                        let span = start.unwrap_or_else(|| self.eof_span());
                        self.record_error(ParseError::new(
                            "document: only one query operation is allowed per document",
                            span,
                            ParseErrorKind::MultipleOperations,
                        ));
                    } else if let Ok(query) = parsed {
                        operation = Some(query);
                    }
                },
                Some(TokenKind::Fragment) => {
                    if let Ok(fragment) = self.parse_fragment() {
                        fragments.push(fragment);
                    }
                },
                Some(kind) => {
                    log::trace!("skipping {kind} token at document level");
                    self.consume_token();
                },
            }
        }

        if operation.is_none() {
            self.record_error(ParseError::new(
                "document: expected a query operation but found none",
                self.eof_span(),
                ParseErrorKind::NoOperation,
            ));
        }

        let start = SourcePosition::new(0, 0, 0);
        let end = self.last_end_position.clone().unwrap_or_else(|| start.clone());
        ast::Document {
            operation,
            fragments,
            span: SourceSpan::new(start, end),
        }
    }

    /// `Query := 'query' [IDENT] '{' SelectionSet '}'`
    ///
    /// The optional operation name is consumed and discarded.
    fn parse_query(&mut self) -> Result<ast::Operation<'src>, ()> {
        let token = self.expect("query", TokenKind::Query)?;
        if self.peek_is(TokenKind::Ident) {
            self.consume_token();
        } else if !self.peek_is(TokenKind::CurlyBraceOpen) {
            return self.unexpected("query", &[TokenKind::Ident, TokenKind::CurlyBraceOpen]);
        }
        let selection_set = self.parse_selection_set("query")?;
        let span = self.make_span(token.span.clone());
        Ok(ast::Operation {
            token,
            selection_set,
            span,
        })
    }

    /// `Fragment := 'fragment' IDENT 'on' IDENT [Directive] '{' SelectionSet '}'`
    fn parse_fragment(&mut self) -> Result<ast::Fragment<'src>, ()> {
        let token = self.expect("fragment", TokenKind::Fragment)?;
        let name = ast::Name::from_token(self.expect("fragment", TokenKind::Ident)?);
        self.expect("fragment", TokenKind::On)?;
        let type_condition =
            ast::Name::from_token(self.expect("fragment", TokenKind::Ident)?);

        let directive = if self.peek_is(TokenKind::At) {
            Some(self.parse_directive()?)
        } else if self.peek_is(TokenKind::CurlyBraceOpen) {
            None
        } else {
            return self.unexpected("fragment", &[TokenKind::At, TokenKind::CurlyBraceOpen]);
        };

        let selection_set = self.parse_selection_set("fragment")?;
        let span = self.make_span(token.span.clone());
        Ok(ast::Fragment {
            token,
            name,
            type_condition,
            directive,
            selection_set,
            span,
        })
    }

    // =========================================================================
    // Selections
    // =========================================================================

    /// `SelectionSet := '{' (Field | FragmentSpread)* '}'`
    ///
    /// `rule` names the construct that owns the braces, for the error on a
    /// missing `{`.
    fn parse_selection_set(&mut self, rule: &str) -> Result<ast::SelectionSet<'src>, ()> {
        self.enter_recursion()?;
        let result = self.parse_selection_set_impl(rule);
        self.exit_recursion();
        result
    }

    fn parse_selection_set_impl(
        &mut self,
        rule: &str,
    ) -> Result<ast::SelectionSet<'src>, ()> {
        let token = self.expect(rule, TokenKind::CurlyBraceOpen)?;
        let mut fields = vec![];
        let mut fragment_spreads = vec![];

        loop {
            match self.token_stream.peek_kind_nth(0) {
                Some(TokenKind::Ident) => fields.push(self.parse_field()?),
                Some(TokenKind::Spread) => fragment_spreads.push(self.parse_fragment_spread()?),
                Some(TokenKind::CurlyBraceClose) => {
                    self.consume_token();
                    break;
                },
                _ => {
                    return self.unexpected(
                        "selection set",
                        &[
                            TokenKind::Ident,
                            TokenKind::Spread,
                            TokenKind::CurlyBraceClose,
                        ],
                    );
                },
            }
        }

        let span = self.make_span(token.span.clone());
        Ok(ast::SelectionSet {
            token,
            fields,
            fragment_spreads,
            span,
        })
    }

    /// `Field := IDENT [Directive] (',' | '{' SelectionSet '}' [','])`
    fn parse_field(&mut self) -> Result<ast::Field<'src>, ()> {
        let name = ast::Name::from_token(self.expect("field", TokenKind::Ident)?);
        let directive = if self.peek_is(TokenKind::At) {
            Some(self.parse_directive()?)
        } else {
            None
        };

        let selection_set = match self.token_stream.peek_kind_nth(0) {
            Some(TokenKind::Comma) => {
                self.consume_token();
                None
            },
            Some(TokenKind::CurlyBraceOpen) => {
                let nested = self.parse_selection_set("field")?;
                if self.peek_is(TokenKind::Comma) {
                    self.consume_token();
                }
                Some(nested)
            },
            Some(TokenKind::Ident) => {
                let is_first_error = self.error.is_none();
                let result =
                    self.unexpected("field", &[TokenKind::Comma, TokenKind::CurlyBraceOpen]);
                if is_first_error && let Some(error) = self.error.as_mut() {
                    error.add_help("Separate fields with `,`");
                }
                return result;
            },
            _ => {
                return self.unexpected("field", &[TokenKind::Comma, TokenKind::CurlyBraceOpen]);
            },
        };

        let span = self.make_span(name.span().clone());
        Ok(ast::Field {
            name,
            directive,
            selection_set,
            span,
        })
    }

    /// `FragmentSpread := '...' IDENT [Directive] ','`
    fn parse_fragment_spread(&mut self) -> Result<ast::FragmentSpread<'src>, ()> {
        let token = self.expect("fragment spread", TokenKind::Spread)?;
        let fragment_name =
            ast::Name::from_token(self.expect("fragment spread", TokenKind::Ident)?);
        let directive = if self.peek_is(TokenKind::At) {
            Some(self.parse_directive()?)
        } else {
            None
        };
        self.expect("fragment spread", TokenKind::Comma)?;

        let span = self.make_span(token.span.clone());
        Ok(ast::FragmentSpread {
            token,
            fragment_name,
            directive,
            span,
        })
    }

    // =========================================================================
    // Directives
    // =========================================================================

    /// `Directive := '@' IDENT ['(' Argument ')']`
    fn parse_directive(&mut self) -> Result<ast::Directive<'src>, ()> {
        let token = self.expect("directive", TokenKind::At)?;
        let name = ast::Name::from_token(self.expect("directive", TokenKind::Ident)?);

        let mut arguments = vec![];
        if self.peek_is(TokenKind::ParenOpen) {
            self.consume_token();
            arguments.push(self.parse_argument()?);
            self.expect("directive", TokenKind::ParenClose)?;
        }

        let span = self.make_span(token.span.clone());
        Ok(ast::Directive {
            token,
            name,
            arguments,
            span,
        })
    }

    /// `Argument := IDENT ':' STRING`
    fn parse_argument(&mut self) -> Result<ast::Argument<'src>, ()> {
        let name = ast::Name::from_token(self.expect("argument", TokenKind::Ident)?);
        self.expect("argument", TokenKind::Colon)?;
        let value_token = self.expect("argument", TokenKind::StringValue)?;

        let value = match value_token.cook_string_value() {
            Some(Ok(value)) => value,
            Some(Err(error)) => {
                self.record_error(ParseError::new(
                    format!(
                        "argument: invalid string value {}: {error}",
                        value_token.literal(),
                    ),
                    value_token.span.clone(),
                    ParseErrorKind::InvalidString(error),
                ));
                return Err(());
            },
            None => return self.unexpected("argument", &[TokenKind::StringValue]),
        };

        let span = self.make_span(name.span().clone());
        Ok(ast::Argument {
            name,
            value: ast::StringValue {
                token: value_token,
                value,
            },
            span,
        })
    }
}

/// `"<rule>: expected token to be <kind>[ or <kind>...] but got <kind> (<literal>)"`
fn mismatch_message(
    rule: &str,
    expected: &[TokenKind],
    found: TokenKind,
    found_literal: &str,
) -> String {
    let expected = expected
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" or ");
    format!("{rule}: expected token to be {expected} but got {found} ({found_literal})")
}
