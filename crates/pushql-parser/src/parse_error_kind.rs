use crate::token::TokenKind;
use crate::StringParsingError;

/// Categorizes parse errors for programmatic handling.
///
/// Each variant contains only the data needed for programmatic decisions.
/// The full human-readable message lives in [`ParseError::message()`].
///
/// [`ParseError::message()`]: crate::ParseError::message
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseErrorKind {
    /// Expected specific token kind(s) but found something else.
    ///
    /// # Example
    /// ```text
    /// query { a b }
    ///           ^ expected `,` or `{`, found IDENT
    /// ```
    #[error("unexpected token: `{found}`")]
    UnexpectedToken {
        expected: Vec<TokenKind>,
        found: TokenKind,
    },

    /// The document ended before a complete construct was parsed.
    #[error("unexpected end of input")]
    UnexpectedEof { expected: Vec<TokenKind> },

    /// The parser needed a specific token but the lexer produced an
    /// [`TokenKind::Illegal`] token there. The lexer's notes are preserved
    /// on the parent error.
    ///
    /// # Example
    /// ```text
    /// query { 1a, }
    ///         ^ illegal character where a field name was expected
    /// ```
    #[error("illegal token: `{literal}`")]
    IllegalToken { literal: String },

    /// A directive argument's string value contains an invalid escape.
    #[error("invalid string value")]
    InvalidString(StringParsingError),

    /// The whole input was scanned without finding a `query` statement.
    #[error("no operation")]
    NoOperation,

    /// A second `query` statement was found; only one operation per
    /// document is supported.
    #[error("multiple operations")]
    MultipleOperations,

    /// Selection sets were nested deeper than the parser allows.
    #[error("nesting too deep")]
    NestingTooDeep,
}
