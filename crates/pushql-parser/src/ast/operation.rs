use crate::ast::ast_node::append_span_source_slice;
use crate::ast::AstNode;
use crate::ast::SelectionSet;
use crate::token::Token;
use crate::SourceSpan;
use inherent::inherent;

/// The document's `query { ... }` operation.
///
/// An operation name after `query` is accepted by the parser but not
/// retained.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Operation<'src> {
    /// The `query` keyword token.
    pub token: Token<'src>,
    pub selection_set: SelectionSet<'src>,
    pub span: SourceSpan,
}

#[inherent]
impl AstNode for Operation<'_> {
    pub fn append_source(&self, sink: &mut String, source: Option<&str>) {
        if let Some(src) = source {
            append_span_source_slice(&self.span, sink, src);
            return;
        }
        sink.push_str("query ");
        self.selection_set.append_source(sink, None);
    }
}
