use crate::ast::ast_node::append_span_source_slice;
use crate::ast::AstNode;
use crate::ast::Fragment;
use crate::ast::FragmentTable;
use crate::ast::Operation;
use crate::push::PushResolver;
use crate::push::PushResource;
use crate::SourceSpan;
use inherent::inherent;

/// Root node of a parsed query document.
///
/// A well-formed document has exactly one operation; the parser reports an
/// error when it is missing. Fragments are kept in source order and their
/// names are not checked for uniqueness.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Document<'src> {
    pub operation: Option<Operation<'src>>,
    pub fragments: Vec<Fragment<'src>>,
    pub span: SourceSpan,
}

impl<'src> Document<'src> {
    pub fn operation(&self) -> Option<&Operation<'src>> {
        self.operation.as_ref()
    }

    /// Builds a name-keyed index over this document's fragments.
    pub fn fragment_table(&self) -> FragmentTable<'_, 'src> {
        FragmentTable::new(self)
    }

    /// Runs the `@push` resolver over the operation with default settings.
    pub fn push_resources(&self) -> Vec<PushResource<'_>> {
        PushResolver::new(self).resolve()
    }
}

#[inherent]
impl AstNode for Document<'_> {
    pub fn append_source(&self, sink: &mut String, source: Option<&str>) {
        if let Some(src) = source {
            append_span_source_slice(&self.span, sink, src);
            return;
        }
        let mut first = true;
        if let Some(operation) = &self.operation {
            operation.append_source(sink, None);
            first = false;
        }
        for fragment in &self.fragments {
            if !first {
                sink.push('\n');
            }
            fragment.append_source(sink, None);
            first = false;
        }
    }
}
