use crate::ast::ast_node::append_span_source_slice;
use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Name;
use crate::token::Token;
use crate::SourceSpan;
use inherent::inherent;

/// A `...FragmentName [@directive],` selection.
///
/// The spread holds only the fragment's name. Resolve it against a
/// [`FragmentTable`](crate::ast::FragmentTable) to reach the definition.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FragmentSpread<'src> {
    /// The `...` token.
    pub token: Token<'src>,
    pub fragment_name: Name<'src>,
    pub directive: Option<Directive<'src>>,
    pub span: SourceSpan,
}

#[inherent]
impl AstNode for FragmentSpread<'_> {
    pub fn append_source(&self, sink: &mut String, source: Option<&str>) {
        if let Some(src) = source {
            append_span_source_slice(&self.span, sink, src);
            return;
        }
        sink.push_str("...");
        self.fragment_name.append_source(sink, None);
        if let Some(directive) = &self.directive {
            sink.push(' ');
            directive.append_source(sink, None);
        }
        sink.push(',');
    }
}
