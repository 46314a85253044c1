//! Tests for `Token`, including string literal cooking.

use crate::token::Token;
use crate::token::TokenKind;
use crate::SourceSpan;
use crate::StringParsingError;

fn string_token(raw: &'static str) -> Token<'static> {
    Token::new(TokenKind::StringValue, raw, SourceSpan::empty())
}

#[test]
fn cook_plain_string() {
    let token = string_token("\"TextPost.js\"");
    assert_eq!(
        token.cook_string_value(),
        Some(Ok("TextPost.js".to_string())),
    );
}

#[test]
fn cook_empty_string() {
    assert_eq!(string_token("\"\"").cook_string_value(), Some(Ok(String::new())));
}

#[test]
fn cook_simple_escapes() {
    let token = string_token(r#""a\"b\\c\/d\ne\tf""#);
    assert_eq!(
        token.cook_string_value(),
        Some(Ok("a\"b\\c/d\ne\tf".to_string())),
    );
}

#[test]
fn cook_unicode_escapes() {
    let token = string_token(r#""A\u{1F600}""#);
    assert_eq!(
        token.cook_string_value(),
        Some(Ok("A\u{1F600}".to_string())),
    );
}

#[test]
fn cook_invalid_escape() {
    let token = string_token(r#""bad\q""#);
    assert_eq!(
        token.cook_string_value(),
        Some(Err(StringParsingError::InvalidEscapeSequence("\\q".to_string()))),
    );
}

/// `\uD800` is a lone surrogate and cannot be a `char`.
#[test]
fn cook_lone_surrogate_is_invalid() {
    let token = string_token(r#""\uD800""#);
    assert!(matches!(
        token.cook_string_value(),
        Some(Err(StringParsingError::InvalidUnicodeEscape(_))),
    ));
}

#[test]
fn cook_short_unicode_escape_is_invalid() {
    let token = string_token(r#""\u12""#);
    assert!(matches!(
        token.cook_string_value(),
        Some(Err(StringParsingError::InvalidUnicodeEscape(_))),
    ));
}

#[test]
fn cook_non_string_token_is_none() {
    let token = Token::new(TokenKind::Ident, "posts", SourceSpan::empty());
    assert_eq!(token.cook_string_value(), None);
}

#[test]
fn into_owned_keeps_contents() {
    let source = String::from("posts");
    let token = Token::new(TokenKind::Ident, source.as_str(), SourceSpan::empty());
    let owned: Token<'static> = token.clone().into_owned();
    assert_eq!(owned, token);
    assert!(owned.is(TokenKind::Ident));
    assert_eq!(owned.literal(), "posts");
}
