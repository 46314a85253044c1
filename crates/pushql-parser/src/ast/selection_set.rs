use crate::ast::ast_node::append_span_source_slice;
use crate::ast::AstNode;
use crate::ast::Field;
use crate::ast::FragmentSpread;
use crate::token::Token;
use crate::SourceSpan;
use inherent::inherent;

/// A `{ ... }` block of fields and fragment spreads.
///
/// Fields and spreads are kept in two separate lists, each in source
/// order. An empty selection set is valid.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SelectionSet<'src> {
    /// The opening `{` token.
    pub token: Token<'src>,
    pub fields: Vec<Field<'src>>,
    pub fragment_spreads: Vec<FragmentSpread<'src>>,
    pub span: SourceSpan,
}

impl SelectionSet<'_> {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.fragment_spreads.is_empty()
    }
}

#[inherent]
impl AstNode for SelectionSet<'_> {
    pub fn append_source(&self, sink: &mut String, source: Option<&str>) {
        if let Some(src) = source {
            append_span_source_slice(&self.span, sink, src);
            return;
        }
        sink.push('{');
        for field in &self.fields {
            sink.push(' ');
            field.append_source(sink, None);
        }
        for spread in &self.fragment_spreads {
            sink.push(' ');
            spread.append_source(sink, None);
        }
        sink.push_str(" }");
    }
}
