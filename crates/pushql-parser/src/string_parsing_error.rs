/// Error returned when cooking a string literal fails.
///
/// This error can occur during [`Token::cook_string_value()`] when processing
/// escape sequences.
///
/// [`Token::cook_string_value()`]: crate::token::Token::cook_string_value
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum StringParsingError {
    /// An invalid escape sequence was encountered (e.g. `\q`).
    #[error("Invalid escape sequence: `{0}`")]
    InvalidEscapeSequence(String),

    /// The string was not properly terminated.
    #[error("Unterminated string: missing closing quote")]
    UnterminatedString,

    /// An invalid Unicode escape sequence was encountered (e.g. `\u{ZZZZ}`
    /// or a lone surrogate like `\uD800`).
    #[error("Invalid unicode escape: `{0}`")]
    InvalidUnicodeEscape(String),
}
