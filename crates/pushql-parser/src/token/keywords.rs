use crate::token::TokenKind;

/// Every reserved word of the language, paired with the token kind it lexes
/// to.
pub const KEYWORDS: [(&str, TokenKind); 3] = [
    ("query", TokenKind::Query),
    ("on", TokenKind::On),
    ("fragment", TokenKind::Fragment),
];

/// Classifies an identifier: reserved words map to their keyword kind,
/// everything else is a plain [`TokenKind::Ident`].
///
/// Matching is case-sensitive (`Query` is an identifier).
pub fn lookup_identifier(ident: &str) -> TokenKind {
    KEYWORDS
        .iter()
        .find(|(keyword, _)| *keyword == ident)
        .map(|(_, kind)| *kind)
        .unwrap_or(TokenKind::Ident)
}
