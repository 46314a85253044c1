use crate::token::string_value::cook_string_literal;
use crate::token::TokenKind;
use crate::ErrorNotes;
use crate::SourceSpan;
use crate::StringParsingError;
use std::borrow::Cow;

/// A lexed token: its kind, the exact source text it covers, and where that
/// text lives in the input.
///
/// # Lifetime Parameter
///
/// The `'src` lifetime enables zero-copy lexing: the [`Lexer`] borrows
/// literals directly from the source text with `Cow::Borrowed`. Tokens
/// built by hand (e.g. in tests) can use owned strings and `'static`.
///
/// [`Lexer`]: crate::token_source::Lexer
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Token<'src> {
    pub kind: TokenKind,

    /// The source text of the token. Empty for [`TokenKind::Eof`]; the raw
    /// text including quotes for [`TokenKind::StringValue`].
    pub literal: Cow<'src, str>,

    pub span: SourceSpan,

    /// Diagnostic notes attached by the lexer. Only ever non-empty on
    /// [`TokenKind::Illegal`] tokens.
    #[serde(skip_serializing_if = "ErrorNotes::is_empty")]
    pub error_notes: ErrorNotes,
}

impl<'src> Token<'src> {
    /// Convenience constructor for a token with no error notes.
    pub fn new(
        kind: TokenKind,
        literal: impl Into<Cow<'src, str>>,
        span: SourceSpan,
    ) -> Self {
        Self {
            kind,
            literal: literal.into(),
            span,
            error_notes: ErrorNotes::new(),
        }
    }

    /// Returns the source text of this token.
    pub fn literal(&self) -> &str {
        &self.literal
    }

    /// Returns `true` if this token has the given kind.
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Processes escape sequences of a [`TokenKind::StringValue`] token and
    /// returns the unescaped content.
    ///
    /// Returns `None` for any other token kind.
    pub fn cook_string_value(&self) -> Option<Result<String, StringParsingError>> {
        match self.kind {
            TokenKind::StringValue => Some(cook_string_literal(&self.literal)),
            _ => None,
        }
    }

    /// Converts into a token that owns its literal, detaching it from the
    /// source text.
    pub fn into_owned(self) -> Token<'static> {
        Token {
            kind: self.kind,
            literal: Cow::Owned(self.literal.into_owned()),
            span: self.span,
            error_notes: self.error_notes,
        }
    }
}
