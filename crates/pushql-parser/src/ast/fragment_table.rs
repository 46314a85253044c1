use indexmap::IndexMap;

use crate::ast::Document;
use crate::ast::Fragment;

/// Name-keyed lookup over a document's fragment definitions.
///
/// When several fragments share a name, the first definition in source
/// order wins. Iteration follows the order fragments were first defined.
#[derive(Clone, Debug)]
pub struct FragmentTable<'doc, 'src> {
    by_name: IndexMap<&'doc str, &'doc Fragment<'src>>,
}

impl<'doc, 'src> FragmentTable<'doc, 'src> {
    pub fn new(document: &'doc Document<'src>) -> Self {
        let mut by_name = IndexMap::with_capacity(document.fragments.len());
        for fragment in &document.fragments {
            by_name
                .entry(fragment.name.as_str())
                .or_insert(fragment);
        }
        Self { by_name }
    }

    pub fn get(&self, name: &str) -> Option<&'doc Fragment<'src>> {
        self.by_name.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'doc str, &'doc Fragment<'src>)> + '_ {
        self.by_name.iter().map(|(name, fragment)| (*name, *fragment))
    }
}
