pub const TIMELINE_QUERY: &str = include_str!("timeline.graphql");

/// Builds a document with `fragment_count` pushed fragments spread from a
/// single field, plus their definitions.
pub fn synthetic_document(fragment_count: usize) -> String {
    let mut source = String::from("query {\n    feed {\n        id,\n");
    for i in 0..fragment_count {
        let name = fragment_name(i);
        source.push_str(&format!(
            "        ...{name} @push(module: \"{name}.js\"),\n"
        ));
    }
    source.push_str("    }\n}\n");
    for i in 0..fragment_count {
        let name = fragment_name(i);
        source.push_str(&format!(
            "\nfragment {name} on {name}Type {{\n    title,\n    body {{ text, }}\n}}\n"
        ));
    }
    source
}

/// Names may not contain digits, so the index is spelled in letters.
fn fragment_name(mut index: usize) -> String {
    let mut name = String::from("Item_");
    loop {
        name.push((b'a' + (index % 26) as u8) as char);
        index /= 26;
        if index == 0 {
            break;
        }
    }
    name
}
