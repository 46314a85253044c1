//! Tests for `AstNode` source reconstruction.

use crate::ast::AstNode;
use crate::tests::utils::parse_valid;
use crate::Parser;

/// With the source available, nodes slice their exact text.
#[test]
fn source_slice_mode_is_lossless() {
    let source = "query {\n  posts   @push( module : \"P.js\" ) { text, },\n}";
    let doc = parse_valid(source);
    assert_eq!(doc.to_source(Some(source)), source);

    let field = &doc.operation().unwrap().selection_set.fields[0];
    assert_eq!(
        field.to_source(Some(source)),
        "posts   @push( module : \"P.js\" ) { text, },",
    );
    let directive = field.directive.as_ref().unwrap();
    assert_eq!(
        directive.to_source(Some(source)),
        "@push( module : \"P.js\" )",
    );
    assert_eq!(
        directive.arguments[0].to_source(Some(source)),
        "module : \"P.js\"",
    );
    assert_eq!(field.name.to_source(Some(source)), "posts");
}

/// Without the source, nodes re-emit canonical syntax.
#[test]
fn canonical_mode() {
    let source = r#"
        query Timeline {
            posts {
                __typename,
                ...Post_TextPost @push(module: "TextPost.js"),
                timestamp,
            }
        }
        fragment Post_TextPost on TextPost @defer { text, }
    "#;
    let doc = parse_valid(source);
    assert_eq!(
        doc.to_source(None),
        "query { posts { __typename, timestamp, ...Post_TextPost @push(module: \"TextPost.js\"), } }\n\
         fragment Post_TextPost on TextPost @defer { text, }",
    );
}

/// String literals are re-emitted as written, escapes included.
#[test]
fn canonical_mode_keeps_raw_strings() {
    let doc = parse_valid(r#"query { ...F @push(module: "a\/b.js"), }"#);
    let spread = &doc.operation().unwrap().selection_set.fragment_spreads[0];
    assert_eq!(spread.to_source(None), r#"...F @push(module: "a\/b.js"),"#);
}

/// Canonical output parses back to an equivalent document.
#[test]
fn canonical_output_reparses() {
    let source = r#"
        fragment A on T { x { y, }, ...B @push(module: "b.js"), }
        query { a @skip, b { c, ...A, }, }
    "#;
    let doc = parse_valid(source);
    let canonical = doc.to_source(None);
    let reparsed = Parser::new(&canonical).parse().into_valid_ast().unwrap();
    assert_eq!(reparsed.to_source(None), canonical);
    assert_eq!(reparsed.push_resources(), doc.push_resources());
}
