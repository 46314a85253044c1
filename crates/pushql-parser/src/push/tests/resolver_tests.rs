//! Tests for `PushResolver`.

use crate::push::PushResolver;
use crate::push::PushResource;
use crate::tests::utils::parse;
use crate::tests::utils::parse_valid;

fn resource<'a>(target_fragment: &'a str, module: &'a str) -> PushResource<'a> {
    PushResource {
        target_fragment,
        module,
    }
}

#[test]
fn no_spreads_yields_nothing() {
    let doc = parse_valid("query { a, b { c, } }");
    assert!(PushResolver::new(&doc).resolve().is_empty());
}

#[test]
fn spreads_in_order() {
    let doc = parse_valid(
        r#"query { ...F1 @push(module: "a.mod"), ...F2 @push(module: "b.mod"), }"#,
    );
    assert_eq!(
        doc.push_resources(),
        vec![resource("F1", "a.mod"), resource("F2", "b.mod")],
    );
}

/// Nested field selection sets are visited before the current set's
/// spreads, in field order.
#[test]
fn nested_fields_are_visited_before_spreads() {
    let doc = parse_valid(
        r#"
        query {
            ...Top @push(module: "top.js"),
            first { ...First @push(module: "first.js"), },
            second {
                inner { ...Inner @push(module: "inner.js"), }
                ...Second @push(module: "second.js"),
            }
        }
        "#,
    );
    assert_eq!(
        doc.push_resources(),
        vec![
            resource("First", "first.js"),
            resource("Inner", "inner.js"),
            resource("Second", "second.js"),
            resource("Top", "top.js"),
        ],
    );
}

/// Only `@push` with a `module` argument counts; names are case-sensitive.
#[test]
fn other_directives_and_arguments_are_ignored() {
    let doc = parse_valid(
        r#"
        query {
            ...A @defer,
            ...B @push,
            ...C @push(path: "c.js"),
            ...D @Push(module: "d.js"),
            ...E @push(Module: "e.js"),
            ...F,
            ...G @push(module: "g.js"),
        }
        "#,
    );
    assert_eq!(doc.push_resources(), vec![resource("G", "g.js")]);
}

/// Field directives are not push requests.
#[test]
fn field_directives_are_ignored() {
    let doc = parse_valid(r#"query { posts @push(module: "p.js") { text, } }"#);
    assert!(doc.push_resources().is_empty());
}

/// Duplicates are reported as-is; deduplication is the push plan's job.
#[test]
fn duplicates_are_kept() {
    let doc = parse_valid(
        r#"query { ...A @push(module: "x.mod"), ...B @push(module: "x.mod"), }"#,
    );
    assert_eq!(doc.push_resources().len(), 2);
}

/// Spreads of fragments that do not exist still produce resources.
#[test]
fn undefined_fragments_are_not_checked() {
    let doc = parse_valid(r#"query { ...Missing @push(module: "m.js"), }"#);
    assert_eq!(doc.push_resources(), vec![resource("Missing", "m.js")]);
}

#[test]
fn document_without_operation_yields_nothing() {
    let result = parse(r#"fragment F on T { ...G @push(module: "g.js"), }"#);
    assert!(PushResolver::new(result.ast()).resolve().is_empty());
}

#[test]
fn resolve_arbitrary_selection_set() {
    let doc = parse_valid(
        r#"query { a, } fragment F on T { ...G @push(module: "g.js"), }"#,
    );
    let resolver = PushResolver::new(&doc);
    assert_eq!(
        resolver.resolve_selection_set(&doc.fragments[0].selection_set),
        vec![resource("G", "g.js")],
    );
}

// =============================================================================
// follow_fragments
// =============================================================================

/// By default, fragment definitions are not entered.
#[test]
fn fragments_not_followed_by_default() {
    let doc = parse_valid(
        r#"
        query { ...Outer, }
        fragment Outer on T { ...Inner @push(module: "inner.js"), }
        "#,
    );
    assert!(doc.push_resources().is_empty());
    assert_eq!(
        PushResolver::new(&doc).follow_fragments(true).resolve(),
        vec![resource("Inner", "inner.js")],
    );
}

/// Each spread is handled before its fragment is expanded.
#[test]
fn followed_fragments_expand_after_their_spread() {
    let doc = parse_valid(
        r#"
        query {
            ...A @push(module: "a.js"),
            ...B @push(module: "b.js"),
        }
        fragment A on T { x { ...X @push(module: "x.js"), }, ...Y @push(module: "y.js"), }
        fragment B on T { z, }
        "#,
    );
    assert_eq!(
        PushResolver::new(&doc).follow_fragments(true).resolve(),
        vec![
            resource("A", "a.js"),
            resource("X", "x.js"),
            resource("Y", "y.js"),
            resource("B", "b.js"),
        ],
    );
}

/// Cyclic spreads terminate: each fragment is expanded once.
#[test]
fn followed_fragments_cycle() {
    let doc = parse_valid(
        r#"
        query { ...A, }
        fragment A on T { ...B @push(module: "b.js"), }
        fragment B on T { ...A @push(module: "a.js"), }
        "#,
    );
    assert_eq!(
        PushResolver::new(&doc).follow_fragments(true).resolve(),
        vec![resource("B", "b.js"), resource("A", "a.js")],
    );
}

#[test]
fn followed_fragment_spread_twice_is_expanded_once() {
    let doc = parse_valid(
        r#"
        query { one { ...A, } two { ...A, } }
        fragment A on T { ...P @push(module: "p.js"), }
        "#,
    );
    assert_eq!(
        PushResolver::new(&doc).follow_fragments(true).resolve(),
        vec![resource("P", "p.js")],
    );
}

/// Fragment names may not contain digits, so indexes are spelled in letters.
fn chain_fragment_name(mut index: usize) -> String {
    let mut name = String::from("Link_");
    loop {
        name.push((b'a' + (index % 26) as u8) as char);
        index /= 26;
        if index == 0 {
            break;
        }
    }
    name
}

/// A long chain of fragments, each spreading the next, is followed to the
/// end without growing the call stack per fragment.
#[test]
fn followed_fragment_chain_of_30k_terminates() {
    const CHAIN_LEN: usize = 30_000;
    let mut source = format!("query {{ ...{}, }}\n", chain_fragment_name(0));
    for i in 0..CHAIN_LEN {
        let name = chain_fragment_name(i);
        if i + 1 == CHAIN_LEN {
            source.push_str(&format!(
                "fragment {name} on T {{ ...Tail @push(module: \"tail.js\"), }}\n"
            ));
        } else {
            let next = chain_fragment_name(i + 1);
            source.push_str(&format!("fragment {name} on T {{ ...{next}, }}\n"));
        }
    }

    let doc = parse_valid(&source);
    assert_eq!(doc.fragments.len(), CHAIN_LEN);
    assert_eq!(
        PushResolver::new(&doc).follow_fragments(true).resolve(),
        vec![resource("Tail", "tail.js")],
    );
}
