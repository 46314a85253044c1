use std::collections::HashSet;

use crate::ast::Document;
use crate::ast::FragmentSpread;
use crate::ast::FragmentTable;
use crate::ast::SelectionSet;

/// Directive that marks a fragment spread as needing a pushed module.
pub const PUSH_DIRECTIVE_NAME: &str = "push";

/// Argument of [`PUSH_DIRECTIVE_NAME`] holding the module path.
pub const MODULE_ARGUMENT_NAME: &str = "module";

/// One module requested by a `@push(module: "...")` annotation.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub struct PushResource<'doc> {
    /// Name of the spread fragment that carried the directive.
    pub target_fragment: &'doc str,

    /// The cooked `module` argument value, exactly as written.
    pub module: &'doc str,
}

/// Collects [`PushResource`]s from a document.
///
/// The walk is depth-first over the operation's selection set: all nested
/// field selection sets are visited first (in field order), then the
/// current set's fragment spreads (in spread order). Fragment existence
/// and type conditions are not checked.
///
/// With [`follow_fragments(true)`](Self::follow_fragments) each spread is
/// additionally expanded into its fragment definition right after the
/// spread itself is handled. Every fragment is expanded at most once per
/// resolution, so cyclic spreads terminate.
///
/// ```rust
/// use pushql_parser::Parser;
/// use pushql_parser::push::PushResolver;
///
/// let doc = Parser::new(r#"query { posts { ...P @push(module: "P.js"), } }"#)
///     .parse()
///     .into_valid_ast()
///     .unwrap();
/// let resources = PushResolver::new(&doc).resolve();
/// assert_eq!(resources[0].target_fragment, "P");
/// assert_eq!(resources[0].module, "P.js");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct PushResolver<'doc, 'src> {
    document: &'doc Document<'src>,
    follow_fragments: bool,
}

impl<'doc, 'src> PushResolver<'doc, 'src> {
    pub fn new(document: &'doc Document<'src>) -> Self {
        Self {
            document,
            follow_fragments: false,
        }
    }

    /// Whether spreads are expanded into their fragment definitions.
    /// Defaults to `false`.
    pub fn follow_fragments(mut self, follow_fragments: bool) -> Self {
        self.follow_fragments = follow_fragments;
        self
    }

    /// Resolves the document's operation. A document without an operation
    /// yields no resources.
    pub fn resolve(&self) -> Vec<PushResource<'doc>> {
        match &self.document.operation {
            Some(operation) => self.resolve_selection_set(&operation.selection_set),
            None => {
                log::debug!("push resolver: document has no operation");
                vec![]
            },
        }
    }

    /// Resolves an arbitrary selection set of this resolver's document.
    pub fn resolve_selection_set(
        &self,
        selection_set: &'doc SelectionSet<'src>,
    ) -> Vec<PushResource<'doc>> {
        let fragment_table = self
            .follow_fragments
            .then(|| FragmentTable::new(self.document));
        let mut expanded = HashSet::new();
        let mut resources = vec![];
        collect(
            selection_set,
            fragment_table.as_ref(),
            &mut expanded,
            &mut resources,
        );
        log::debug!(
            "push resolver: found {} resource(s) (follow_fragments={})",
            resources.len(),
            self.follow_fragments,
        );
        resources
    }
}

/// Position within one selection set of the walk in [`collect`].
struct PendingSelectionSet<'doc, 'src> {
    selection_set: &'doc SelectionSet<'src>,
    next_field: usize,
    next_spread: usize,
}

impl<'doc, 'src> PendingSelectionSet<'doc, 'src> {
    fn new(selection_set: &'doc SelectionSet<'src>) -> Self {
        Self {
            selection_set,
            next_field: 0,
            next_spread: 0,
        }
    }
}

/// Walks `root` with an explicit stack, so long chains of fragment
/// expansions cannot exhaust the call stack.
fn collect<'doc, 'src>(
    root: &'doc SelectionSet<'src>,
    fragment_table: Option<&FragmentTable<'doc, 'src>>,
    expanded: &mut HashSet<&'doc str>,
    resources: &mut Vec<PushResource<'doc>>,
) {
    let mut pending = vec![PendingSelectionSet::new(root)];
    while let Some(top) = pending.last_mut() {
        let selection_set = top.selection_set;

        if let Some(field) = selection_set.fields.get(top.next_field) {
            top.next_field += 1;
            if let Some(nested) = &field.selection_set {
                pending.push(PendingSelectionSet::new(nested));
            }
            continue;
        }

        let Some(spread) = selection_set.fragment_spreads.get(top.next_spread) else {
            pending.pop();
            continue;
        };
        top.next_spread += 1;

        if let Some(resource) = push_resource_for(spread) {
            log::trace!(
                "push resolver: `{}` requests `{}`",
                resource.target_fragment,
                resource.module,
            );
            resources.push(resource);
        }

        let Some(table) = fragment_table else {
            continue;
        };
        let name = spread.fragment_name.as_str();
        if !expanded.insert(name) {
            continue;
        }
        match table.get(name) {
            Some(fragment) => pending.push(PendingSelectionSet::new(&fragment.selection_set)),
            None => log::trace!(
                "push resolver: spread of undefined fragment `{name}`"
            ),
        }
    }
}

/// Returns the resource requested by `spread`, if it carries
/// `@push(module: "...")`. Only the first `module` argument counts.
fn push_resource_for<'doc>(spread: &'doc FragmentSpread<'_>) -> Option<PushResource<'doc>> {
    let directive = spread.directive.as_ref()?;
    if !directive.is_named(PUSH_DIRECTIVE_NAME) {
        return None;
    }
    let argument = directive.argument(MODULE_ARGUMENT_NAME)?;
    Some(PushResource {
        target_fragment: spread.fragment_name.as_str(),
        module: argument.value.as_str(),
    })
}
