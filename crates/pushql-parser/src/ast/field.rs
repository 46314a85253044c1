use crate::ast::ast_node::append_span_source_slice;
use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Name;
use crate::ast::SelectionSet;
use crate::SourceSpan;
use inherent::inherent;

/// A field selection, optionally annotated with one directive and
/// optionally carrying a nested selection set.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Field<'src> {
    pub name: Name<'src>,
    pub directive: Option<Directive<'src>>,
    pub selection_set: Option<SelectionSet<'src>>,
    pub span: SourceSpan,
}

#[inherent]
impl AstNode for Field<'_> {
    pub fn append_source(&self, sink: &mut String, source: Option<&str>) {
        if let Some(src) = source {
            append_span_source_slice(&self.span, sink, src);
            return;
        }
        self.name.append_source(sink, None);
        if let Some(directive) = &self.directive {
            sink.push(' ');
            directive.append_source(sink, None);
        }
        match &self.selection_set {
            Some(selection_set) => {
                sink.push(' ');
                selection_set.append_source(sink, None);
            },
            None => sink.push(','),
        }
    }
}
