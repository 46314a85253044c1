use crate::token::Token;

/// Marker trait for [`Token`] lexers (iterators that generate [`Token`]s).
///
/// [`Lexer`](crate::token_source::Lexer) is the lexer over `&str` input;
/// tests drive the parser with hand-built token vectors through the same
/// trait.
///
/// Implementors define an [`Iterator`] that produces tokens one at a time.
/// All lookahead and buffering is handled by
/// [`TokenStream`](crate::TokenStream).
///
/// Token sources are responsible for:
/// - Skipping whitespace
/// - Emitting [`TokenKind::Illegal`](crate::token::TokenKind::Illegal) for
///   unrecognized input rather than failing
/// - Emitting a final [`TokenKind::Eof`](crate::token::TokenKind::Eof)
///   token
pub trait TokenSource<'src>: Iterator<Item = Token<'src>> {}

impl<'src, T> TokenSource<'src> for T where T: Iterator<Item = Token<'src>> {}
