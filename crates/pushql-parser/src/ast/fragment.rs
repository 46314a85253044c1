use crate::ast::ast_node::append_span_source_slice;
use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Name;
use crate::ast::SelectionSet;
use crate::token::Token;
use crate::SourceSpan;
use inherent::inherent;

/// A named fragment definition:
/// `fragment Name on TypeCondition [@directive] { ... }`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Fragment<'src> {
    /// The `fragment` keyword token.
    pub token: Token<'src>,
    pub name: Name<'src>,
    pub type_condition: Name<'src>,
    pub directive: Option<Directive<'src>>,
    pub selection_set: SelectionSet<'src>,
    pub span: SourceSpan,
}

#[inherent]
impl AstNode for Fragment<'_> {
    pub fn append_source(&self, sink: &mut String, source: Option<&str>) {
        if let Some(src) = source {
            append_span_source_slice(&self.span, sink, src);
            return;
        }
        sink.push_str("fragment ");
        self.name.append_source(sink, None);
        sink.push_str(" on ");
        self.type_condition.append_source(sink, None);
        if let Some(directive) = &self.directive {
            sink.push(' ');
            directive.append_source(sink, None);
        }
        sink.push(' ');
        self.selection_set.append_source(sink, None);
    }
}
