//! Tests for `FragmentTable`.

use crate::tests::utils::parse_valid;

#[test]
fn lookup_by_name() {
    let doc = parse_valid(
        "query { a, } fragment A on T { x, } fragment B on U { y, }",
    );
    let table = doc.fragment_table();
    assert_eq!(table.len(), 2);
    assert!(!table.is_empty());
    assert!(table.contains("A"));
    assert_eq!(table.get("B").unwrap().type_condition.value, "U");
    assert!(table.get("C").is_none());
}

/// Names are case-sensitive.
#[test]
fn lookup_is_case_sensitive() {
    let doc = parse_valid("query { a, } fragment Post on T { x, }");
    let table = doc.fragment_table();
    assert!(table.get("post").is_none());
}

/// With duplicate names, the first definition wins.
#[test]
fn first_definition_wins() {
    let doc = parse_valid(
        "query { a, } fragment A on First { x, } fragment B on U { y, } fragment A on Second { z, }",
    );
    let table = doc.fragment_table();
    assert_eq!(table.len(), 2);
    assert_eq!(table.get("A").unwrap().type_condition.value, "First");

    let names: Vec<&str> = table.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["A", "B"]);
}

#[test]
fn empty_table() {
    let doc = parse_valid("query { a, }");
    assert!(doc.fragment_table().is_empty());
}
