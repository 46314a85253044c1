//! Tests for `ParseError` formatting.

use crate::tests::utils::parse;
use crate::ParseError;
use crate::ParseErrorKind;
use crate::SourcePosition;
use crate::SourceSpan;

#[test]
fn format_oneline_uses_one_based_position() {
    let result = parse("query {\n  a b\n}");
    let error = result.error().unwrap();
    assert_eq!(
        error.format_oneline(),
        "<input>:2:5: error: field: expected token to be , or { but got IDENT (b)",
    );
    assert_eq!(error.to_string(), error.format_oneline());
}

#[test]
fn format_detailed_with_source() {
    let source = "query { a b }";
    let result = parse(source);
    let formatted = result.error().unwrap().format_detailed(Some(source));
    let expected = "\
error: field: expected token to be , or { but got IDENT (b)
  --> <input>:1:11
   |
 1 | query { a b }
   |           ^
   = help: Separate fields with `,`
";
    assert_eq!(formatted, expected);
}

/// A lone `\r` ends a line for the snippet just as it does for the lexer.
#[test]
fn format_detailed_with_cr_line_endings() {
    let source = "query {\r a b }";
    let result = parse(source);
    let formatted = result.error().unwrap().format_detailed(Some(source));
    let expected = "\
error: field: expected token to be , or { but got IDENT (b)
  --> <input>:2:4
   |
 2 |  a b }
   |    ^
   = help: Separate fields with `,`
";
    assert_eq!(formatted, expected);
}

#[test]
fn format_detailed_with_crlf_line_endings() {
    let source = "query {\r\n  a b\r\n}";
    let result = parse(source);
    let formatted = result.error().unwrap().format_detailed(Some(source));
    assert!(formatted.contains("  --> <input>:2:5\n"));
    assert!(formatted.contains(" 2 |   a b\n   |     ^\n"));
}

#[test]
fn format_detailed_without_source() {
    let result = parse("query { a b }");
    let formatted = result.error().unwrap().format_detailed(None);
    assert_eq!(
        formatted,
        "error: field: expected token to be , or { but got IDENT (b)\n  --> <input>:1:11\n   = help: Separate fields with `,`\n",
    );
}

/// Notes with spans render a marker under the related location.
#[test]
fn format_detailed_note_with_span() {
    let source = "query { ...F @push(module: \"F.js\n), }";
    let result = parse(source);
    let formatted = result.error().unwrap().format_detailed(Some(source));
    assert!(formatted.contains("= note: unterminated string literal started here"));
    assert!(formatted.contains("= help: Add a closing `\"` on the same line"));
    // The caret underline covers the whole partial literal.
    assert!(formatted.contains(&format!("{}{}", " ".repeat(27), "^^^^^")));
}

#[test]
fn add_note_and_help() {
    let mut error = ParseError::new(
        "document: expected a query operation but found none",
        SourceSpan::new(SourcePosition::new(0, 3, 3), SourcePosition::new(0, 3, 3)),
        ParseErrorKind::NoOperation,
    );
    error.add_note("fragments alone are not executable");
    error.add_help("Add a `query { ... }` operation");

    let formatted = error.format_detailed(Some("   "));
    assert!(formatted.contains("   = note: fragments alone are not executable\n"));
    assert!(formatted.contains("   = help: Add a `query { ... }` operation\n"));
    assert!(formatted.contains("  --> <input>:1:4\n"));
}
