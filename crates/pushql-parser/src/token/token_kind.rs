/// The kind of a query-language token.
///
/// This is a closed set: the grammar is small and fixed, so every kind the
/// lexer can emit is listed here. Token payloads (identifier text, raw
/// string literals, illegal characters) live in [`Token::literal`].
///
/// [`Token::literal`]: crate::token::Token::literal
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum TokenKind {
    // =========================================================================
    // Lexer error (allows the parser to decide whether it is fatal)
    // =========================================================================
    /// A character (or unterminated string literal) the language does not
    /// recognize.
    Illegal,

    // =========================================================================
    // End of input
    // =========================================================================
    Eof,

    // =========================================================================
    // Literals
    // =========================================================================
    /// A name that is not a reserved word: `[_A-Za-z]+`.
    Ident,
    /// A double-quoted string literal, including its quotes.
    StringValue,

    // =========================================================================
    // Punctuators
    // =========================================================================
    /// `@`
    At,
    /// `...`
    Spread,
    /// `{`
    CurlyBraceOpen,
    /// `}`
    CurlyBraceClose,
    /// `(`
    ParenOpen,
    /// `)`
    ParenClose,
    /// `:`
    Colon,
    /// `,`
    Comma,

    // =========================================================================
    // Reserved words
    // =========================================================================
    /// `query`
    Query,
    /// `on`
    On,
    /// `fragment`
    Fragment,
}

impl TokenKind {
    /// Returns `true` if this token is a punctuator.
    pub fn is_punctuator(&self) -> bool {
        matches!(
            self,
            TokenKind::At
                | TokenKind::Spread
                | TokenKind::CurlyBraceOpen
                | TokenKind::CurlyBraceClose
                | TokenKind::ParenOpen
                | TokenKind::ParenClose
                | TokenKind::Colon
                | TokenKind::Comma
        )
    }

    /// Returns `true` if this token kind comes from the reserved-word table.
    pub fn is_keyword(&self) -> bool {
        matches!(self, TokenKind::Query | TokenKind::On | TokenKind::Fragment)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
            TokenKind::Ident => "IDENT",
            TokenKind::StringValue => "STRING",
            TokenKind::At => "@",
            TokenKind::Spread => "...",
            TokenKind::CurlyBraceOpen => "{",
            TokenKind::CurlyBraceClose => "}",
            TokenKind::ParenOpen => "(",
            TokenKind::ParenClose => ")",
            TokenKind::Colon => ":",
            TokenKind::Comma => ",",
            TokenKind::Query => "QUERY",
            TokenKind::On => "ON",
            TokenKind::Fragment => "FRAGMENT",
        };
        f.write_str(s)
    }
}
