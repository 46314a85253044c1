use indexmap::IndexMap;

use crate::push::PushResource;

/// One module to push, with the path it should be pushed under.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct PushPlanEntry<'doc> {
    /// The fragment whose spread first requested this module.
    pub target_fragment: &'doc str,

    /// The module path as written in the first request.
    pub module: &'doc str,

    /// Root-relative path, see [`normalize_push_path()`].
    pub push_path: String,
}

/// The deduplicated, ordered list of modules to push for one document.
///
/// Entries are keyed by their root-relative push path, so `"TextPost.js"`
/// and `"./TextPost.js"` are the same module. The first request for a path
/// wins and keeps its position.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct PushPlan<'doc> {
    entries: Vec<PushPlanEntry<'doc>>,
}

impl<'doc> PushPlan<'doc> {
    pub fn from_resources<I>(resources: I) -> Self
    where
        I: IntoIterator<Item = PushResource<'doc>>,
    {
        let mut by_path: IndexMap<String, PushPlanEntry<'doc>> = IndexMap::new();
        let mut requested = 0usize;
        for resource in resources {
            requested += 1;
            let push_path = normalize_push_path(resource.module);
            if by_path.contains_key(&push_path) {
                log::trace!("push plan: `{push_path}` already planned");
                continue;
            }
            by_path.insert(
                push_path.clone(),
                PushPlanEntry {
                    target_fragment: resource.target_fragment,
                    module: resource.module,
                    push_path,
                },
            );
        }
        log::debug!(
            "push plan: {} unique module(s) from {requested} request(s)",
            by_path.len(),
        );
        Self {
            entries: by_path.into_values().collect(),
        }
    }

    /// An empty plan, used when a document could not be parsed.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[PushPlanEntry<'doc>] {
        &self.entries
    }

    pub fn push_paths(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.push_path.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Maps a module path to an absolute path under the push root.
///
/// `.` segments and empty segments are dropped and `..` removes the
/// previous segment, but never climbs above the root:
///
/// ```rust
/// use pushql_parser::push::normalize_push_path;
///
/// assert_eq!(normalize_push_path("TextPost.js"), "/TextPost.js");
/// assert_eq!(normalize_push_path("./TextPost.js"), "/TextPost.js");
/// assert_eq!(normalize_push_path("../../etc/passwd"), "/etc/passwd");
/// ```
pub fn normalize_push_path(module: &str) -> String {
    let mut segments: Vec<&str> = vec![];
    for segment in module.split('/') {
        match segment {
            "" | "." => {},
            ".." => {
                segments.pop();
            },
            other => segments.push(other),
        }
    }
    format!("/{}", segments.join("/"))
}
