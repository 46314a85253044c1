use crate::ast::ast_node::append_span_source_slice;
use crate::ast::Argument;
use crate::ast::AstNode;
use crate::ast::Name;
use crate::token::Token;
use crate::SourceSpan;
use inherent::inherent;

/// A directive annotation such as `@push(module: "TextPost.js")`.
///
/// `token` is the `@` token. The grammar admits at most one argument, but
/// the arguments are stored as a list.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Directive<'src> {
    pub token: Token<'src>,
    pub name: Name<'src>,
    pub arguments: Vec<Argument<'src>>,
    pub span: SourceSpan,
}

impl<'src> Directive<'src> {
    /// Returns the first argument called `name` (case-sensitive).
    pub fn argument(&self, name: &str) -> Option<&Argument<'src>> {
        self.arguments.iter().find(|arg| arg.name.value == name)
    }

    /// Returns `true` if this directive is called `name` (case-sensitive).
    pub fn is_named(&self, name: &str) -> bool {
        self.name.value == name
    }
}

#[inherent]
impl AstNode for Directive<'_> {
    pub fn append_source(&self, sink: &mut String, source: Option<&str>) {
        if let Some(src) = source {
            append_span_source_slice(&self.span, sink, src);
            return;
        }
        sink.push('@');
        self.name.append_source(sink, None);
        if !self.arguments.is_empty() {
            sink.push('(');
            for (i, arg) in self.arguments.iter().enumerate() {
                if i > 0 {
                    sink.push_str(", ");
                }
                arg.append_source(sink, None);
            }
            sink.push(')');
        }
    }
}
