//! Result type for parses that always produce a (possibly partial) AST.

use crate::ParseError;

/// The result of a parsing operation.
///
/// Unlike `Result<T, E>`, `ParseResult` always carries an AST together with
/// at most one error. The parser keeps going after the first error so the
/// document still holds every statement that parsed cleanly, but that
/// document must not be trusted until the error has been checked.
///
/// # Accessing the AST
///
/// - [`valid_ast()`](Self::valid_ast) returns the AST only if parsing was
///   completely successful.
/// - [`ast()`](Self::ast) returns the AST regardless of errors, for
///   best-effort tooling such as the `tokens`/`ast` CLI commands.
///
/// # Example
///
/// ```
/// # use pushql_parser::Parser;
/// let source = "query { posts { ...Post_TextPost @push(module: \"TextPost.js\"), } }";
/// let result = Parser::new(source).parse();
///
/// match result.valid_ast() {
///     Some(doc) => assert_eq!(doc.push_resources().len(), 1),
///     None => panic!("{}", result.format_error(Some(source))),
/// }
/// ```
#[derive(Debug)]
pub struct ParseResult<TAst> {
    ast: TAst,

    /// The first error encountered while parsing, if any.
    error: Option<ParseError>,
}

impl<TAst> ParseResult<TAst> {
    /// Creates a successful parse result.
    pub(crate) fn ok(ast: TAst) -> Self {
        Self { ast, error: None }
    }

    /// Creates a parse result whose AST holds only what parsed before and
    /// around `error`.
    pub(crate) fn recovered(ast: TAst, error: ParseError) -> Self {
        Self {
            ast,
            error: Some(error),
        }
    }

    /// Returns the AST only if parsing was completely successful.
    pub fn valid_ast(&self) -> Option<&TAst> {
        match self.error {
            None => Some(&self.ast),
            Some(_) => None,
        }
    }

    /// Returns the AST regardless of whether an error occurred.
    ///
    /// Check [`has_error()`](Self::has_error) to know whether the AST is
    /// partial.
    pub fn ast(&self) -> &TAst {
        &self.ast
    }

    pub fn error(&self) -> Option<&ParseError> {
        self.error.as_ref()
    }

    /// Consuming version of [`valid_ast()`](Self::valid_ast).
    pub fn into_valid_ast(self) -> Option<TAst> {
        match self.error {
            None => Some(self.ast),
            Some(_) => None,
        }
    }

    /// Consuming version of [`ast()`](Self::ast).
    pub fn into_ast(self) -> TAst {
        self.ast
    }

    /// Returns `true` if parsing finished without error.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Formats the error (if any) in detailed form. Returns an empty string
    /// for a successful parse.
    ///
    /// `source` is used for snippet extraction.
    pub fn format_error(&self, source: Option<&str>) -> String {
        self.error
            .as_ref()
            .map(|error| error.format_detailed(source))
            .unwrap_or_default()
    }

    /// Converts to a standard `Result`, discarding the partial AST when an
    /// error occurred.
    pub fn into_result(self) -> Result<TAst, ParseError> {
        self.into()
    }
}

impl<TAst> From<ParseResult<TAst>> for Result<TAst, ParseError> {
    fn from(result: ParseResult<TAst>) -> Self {
        match result.error {
            None => Ok(result.ast),
            Some(error) => Err(error),
        }
    }
}
