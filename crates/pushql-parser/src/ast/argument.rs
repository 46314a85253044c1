use crate::ast::ast_node::append_span_source_slice;
use crate::ast::AstNode;
use crate::ast::Name;
use crate::token::Token;
use crate::SourceSpan;
use inherent::inherent;

/// A double-quoted string literal.
///
/// `token` keeps the literal exactly as written (quotes and escapes
/// included); `value` is the cooked string with escapes resolved.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct StringValue<'src> {
    pub token: Token<'src>,
    pub value: String,
}

impl StringValue<'_> {
    pub fn span(&self) -> &SourceSpan {
        &self.token.span
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

#[inherent]
impl AstNode for StringValue<'_> {
    pub fn append_source(&self, sink: &mut String, source: Option<&str>) {
        match source {
            Some(src) => append_span_source_slice(self.span(), sink, src),
            None => sink.push_str(self.token.literal()),
        }
    }
}

/// A `name: "value"` pair inside a directive's parentheses.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Argument<'src> {
    pub name: Name<'src>,
    pub value: StringValue<'src>,
    pub span: SourceSpan,
}

#[inherent]
impl AstNode for Argument<'_> {
    pub fn append_source(&self, sink: &mut String, source: Option<&str>) {
        if let Some(src) = source {
            append_span_source_slice(&self.span, sink, src);
            return;
        }
        self.name.append_source(sink, None);
        sink.push_str(": ");
        self.value.append_source(sink, None);
    }
}
