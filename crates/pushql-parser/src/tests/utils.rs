//! Various test utils.

use crate::ast;
use crate::token::Token;
use crate::token::TokenKind;
use crate::ParseResult;
use crate::Parser;
use crate::SourceSpan;

/// Creates a mock token with the given kind and literal and an empty span.
///
/// Uses `'static` lifetime since test tokens use owned strings.
pub fn mock_token(kind: TokenKind, literal: &str) -> Token<'static> {
    Token::new(kind, literal.to_string(), SourceSpan::empty())
}

/// Creates a mock Ident token with the given name.
pub fn mock_ident_token(name: &str) -> Token<'static> {
    mock_token(TokenKind::Ident, name)
}

/// Creates a mock Eof token.
pub fn mock_eof_token() -> Token<'static> {
    mock_token(TokenKind::Eof, "")
}

/// A mock token source that produces tokens from a Vec.
pub struct MockTokenSource {
    tokens: std::vec::IntoIter<Token<'static>>,
}

impl MockTokenSource {
    pub fn new(tokens: Vec<Token<'static>>) -> Self {
        Self {
            tokens: tokens.into_iter(),
        }
    }
}

impl Iterator for MockTokenSource {
    type Item = Token<'static>;

    fn next(&mut self) -> Option<Self::Item> {
        self.tokens.next()
    }
}

/// Helper to parse a document.
pub(crate) fn parse(source: &str) -> ParseResult<ast::Document<'_>> {
    Parser::new(source).parse()
}

/// Helper to parse a document that must be valid.
pub(crate) fn parse_valid(source: &str) -> ast::Document<'_> {
    let result = parse(source);
    match result.into_result() {
        Ok(doc) => doc,
        Err(error) => panic!(
            "expected a valid document, got:\n{}",
            error.format_detailed(Some(source)),
        ),
    }
}

/// Helper to parse a document and return its operation's selection set.
pub(crate) fn parse_operation_selection_set(source: &str) -> ast::SelectionSet<'_> {
    match parse_valid(source).operation {
        Some(operation) => operation.selection_set,
        None => panic!("document has no operation"),
    }
}

/// The names of a selection set's fields, in order.
pub(crate) fn field_names<'a>(selection_set: &'a ast::SelectionSet<'_>) -> Vec<&'a str> {
    selection_set
        .fields
        .iter()
        .map(|field| field.name.as_str())
        .collect()
}
