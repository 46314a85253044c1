use std::borrow::Cow;

use crate::ast::ast_node::append_span_source_slice;
use crate::ast::AstNode;
use crate::token::Token;
use crate::SourceSpan;
use inherent::inherent;

/// An identifier: a field name, fragment name, type condition, directive
/// name or argument name.
///
/// `value` borrows from the source text when the token did.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Name<'src> {
    pub token: Token<'src>,
    pub value: Cow<'src, str>,
}

impl<'src> Name<'src> {
    /// Builds a name from an `Ident` token, sharing the token's literal.
    pub fn from_token(token: Token<'src>) -> Self {
        let value = token.literal.clone();
        Self { token, value }
    }

    pub fn span(&self) -> &SourceSpan {
        &self.token.span
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

#[inherent]
impl AstNode for Name<'_> {
    pub fn append_source(&self, sink: &mut String, source: Option<&str>) {
        match source {
            Some(src) => append_span_source_slice(self.span(), sink, src),
            None => sink.push_str(&self.value),
        }
    }
}
