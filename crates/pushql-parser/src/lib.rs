//! Lexer, recursive descent parser and `@push` resource resolver for a
//! small GraphQL-like query language.
//!
//! The language covers a single `query` operation, named fragments,
//! fragment spreads, and directives with at most one string argument.
//! Spreads annotated with `@push(module: "...")` name client modules that
//! a server can deliver alongside its response; [`push::PushResolver`]
//! collects them and [`push::PushPlan`] deduplicates them.
//!
//! ```rust
//! use pushql_parser::Parser;
//! use pushql_parser::push::PushPlan;
//!
//! let source = r#"
//!     query {
//!         posts {
//!             ...Post_PhotoPost @push(module: "PhotoPost.js"),
//!             ...Post_TextPost @push(module: "TextPost.js"),
//!         }
//!     }
//! "#;
//! let doc = Parser::new(source).parse().into_valid_ast().unwrap();
//! let plan = PushPlan::from_resources(doc.push_resources());
//! assert_eq!(
//!     plan.push_paths().collect::<Vec<_>>(),
//!     vec!["/PhotoPost.js", "/TextPost.js"],
//! );
//! ```

pub mod ast;
mod error_note;
mod parse_error;
mod parse_error_kind;
mod parse_result;
mod parser;
pub mod push;
mod source_position;
mod source_span;
mod string_parsing_error;
pub mod token;
pub mod token_source;
mod token_stream;

pub use error_note::ErrorNote;
pub use error_note::ErrorNoteKind;
pub use error_note::ErrorNotes;
pub use parse_error::ParseError;
pub use parse_error_kind::ParseErrorKind;
pub use parse_result::ParseResult;
pub use parser::Parser;
pub use smallvec::smallvec;
pub use smallvec::SmallVec;
pub use source_position::SourcePosition;
pub use source_span::SourceSpan;
pub use string_parsing_error::StringParsingError;
pub use token_stream::TokenStream;

#[cfg(test)]
mod tests;
