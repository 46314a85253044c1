//! Tests for `PushPlan` and push path normalization.

use crate::push::normalize_push_path;
use crate::push::PushPlan;
use crate::push::PushResource;
use crate::tests::utils::parse_valid;

#[test]
fn empty_plan() {
    let plan = PushPlan::empty();
    assert!(plan.is_empty());
    assert_eq!(plan.len(), 0);
    assert_eq!(PushPlan::from_resources(vec![]), plan);
}

/// Two spreads requesting the same module push it once.
#[test]
fn duplicate_modules_are_pushed_once() {
    let doc = parse_valid(
        r#"query { ...A @push(module: "x.mod"), ...B @push(module: "x.mod"), }"#,
    );
    let plan = PushPlan::from_resources(doc.push_resources());
    assert_eq!(plan.len(), 1);
    assert_eq!(plan.entries()[0].target_fragment, "A");
    assert_eq!(plan.entries()[0].module, "x.mod");
    assert_eq!(plan.entries()[0].push_path, "/x.mod");
}

/// The first request for a path wins and keeps its position.
#[test]
fn first_occurrence_order_is_kept() {
    let resources = vec![
        PushResource { target_fragment: "B", module: "b.js" },
        PushResource { target_fragment: "A", module: "a.js" },
        PushResource { target_fragment: "B2", module: "./b.js" },
        PushResource { target_fragment: "C", module: "c.js" },
    ];
    let plan = PushPlan::from_resources(resources);
    assert_eq!(
        plan.push_paths().collect::<Vec<_>>(),
        vec!["/b.js", "/a.js", "/c.js"],
    );
    assert_eq!(plan.entries()[0].target_fragment, "B");
}

#[test]
fn sample_document_plan() {
    let doc = parse_valid(
        r#"
        query {
            posts {
                __typename,
                timestamp,
                ... Post_PhotoPost @push(module: "PhotoPost.js"),
                ... Post_TextPost @push(module: "TextPost.js"),
            }
        }
        "#,
    );
    let plan = PushPlan::from_resources(doc.push_resources());
    assert_eq!(
        plan.push_paths().collect::<Vec<_>>(),
        vec!["/PhotoPost.js", "/TextPost.js"],
    );
}

#[test]
fn normalize_relative_paths() {
    assert_eq!(normalize_push_path("TextPost.js"), "/TextPost.js");
    assert_eq!(normalize_push_path("./TextPost.js"), "/TextPost.js");
    assert_eq!(normalize_push_path("/TextPost.js"), "/TextPost.js");
    assert_eq!(normalize_push_path("posts//Text.js"), "/posts/Text.js");
    assert_eq!(normalize_push_path("a/./b/../c.js"), "/a/c.js");
}

/// `..` never climbs above the push root.
#[test]
fn normalize_does_not_escape_root() {
    assert_eq!(normalize_push_path("../secret.js"), "/secret.js");
    assert_eq!(normalize_push_path("../../../etc/passwd"), "/etc/passwd");
    assert_eq!(normalize_push_path(".."), "/");
    assert_eq!(normalize_push_path(""), "/");
}
