//! Tests for parsing selection sets, fields and fragment spreads.

use crate::tests::utils::field_names;
use crate::tests::utils::parse_operation_selection_set;
use crate::tests::utils::parse_valid;

#[test]
fn fields_keep_source_order() {
    let selection_set = parse_operation_selection_set("query { c, a, b, }");
    assert_eq!(field_names(&selection_set), vec!["c", "a", "b"]);
    assert!(selection_set.fragment_spreads.is_empty());
}

/// `query { a, b { c, } }` has two fields; `b` carries a nested set with
/// the single field `c`.
#[test]
fn nested_selection_set() {
    let selection_set = parse_operation_selection_set("query { a, b { c, } }");
    assert_eq!(field_names(&selection_set), vec!["a", "b"]);
    assert!(selection_set.fields[0].selection_set.is_none());

    let nested = selection_set.fields[1].selection_set.as_ref().unwrap();
    assert_eq!(field_names(nested), vec!["c"]);
}

/// A comma after a nested selection set is optional.
#[test]
fn comma_after_nested_set_is_optional() {
    let with_comma = parse_operation_selection_set("query { a { b, }, c, }");
    let without_comma = parse_operation_selection_set("query { a { b, } c, }");
    assert_eq!(field_names(&with_comma), vec!["a", "c"]);
    assert_eq!(field_names(&without_comma), vec!["a", "c"]);
}

#[test]
fn empty_selection_sets_are_valid() {
    let selection_set = parse_operation_selection_set("query { }");
    assert!(selection_set.is_empty());

    let selection_set = parse_operation_selection_set("query { a { } }");
    assert!(selection_set.fields[0].selection_set.as_ref().unwrap().is_empty());
}

#[test]
fn operation_name_is_discarded() {
    let doc = parse_valid("query Timeline { posts, }");
    let operation = doc.operation().unwrap();
    assert_eq!(field_names(&operation.selection_set), vec!["posts"]);
}

/// Fields and spreads are stored in separate lists, each in source order.
#[test]
fn fields_and_spreads_interleaved() {
    let selection_set = parse_operation_selection_set(
        "query { a, ...F1, b, ...F2, }",
    );
    assert_eq!(field_names(&selection_set), vec!["a", "b"]);
    let spreads: Vec<&str> = selection_set
        .fragment_spreads
        .iter()
        .map(|spread| spread.fragment_name.as_str())
        .collect();
    assert_eq!(spreads, vec!["F1", "F2"]);
}

#[test]
fn spread_with_whitespace_after_dots() {
    let selection_set = parse_operation_selection_set("query { ... Post_TextPost, }");
    assert_eq!(
        selection_set.fragment_spreads[0].fragment_name.value,
        "Post_TextPost",
    );
    assert!(selection_set.fragment_spreads[0].directive.is_none());
}

#[test]
fn field_spans_cover_their_text() {
    let source = "query { posts { text, }, }";
    let selection_set = parse_operation_selection_set(source);
    let field = &selection_set.fields[0];
    assert_eq!(&source[field.span.byte_range()], "posts { text, },");
    assert_eq!(&source[field.name.span().byte_range()], "posts");

    let nested = field.selection_set.as_ref().unwrap();
    assert_eq!(&source[nested.span.byte_range()], "{ text, }");
}

/// Nesting up to the limit is accepted.
#[test]
fn deep_nesting_within_limit() {
    // The operation's own set counts as one level.
    let depth = 63;
    let source = format!(
        "query {{ {} }}",
        "a { ".repeat(depth) + &"} ".repeat(depth),
    );
    let selection_set = parse_operation_selection_set(&source);
    assert_eq!(field_names(&selection_set), vec!["a"]);
}
