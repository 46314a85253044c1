//! AST types for parsed query documents.
//!
//! All node types are parameterized over a `'src` lifetime that borrows
//! strings from the source text via [`Cow<'src, str>`]. Every node keeps
//! its originating token or span so diagnostics can point back at the
//! input.
//!
//! The tree is strictly owned: a [`FragmentSpread`] names its fragment and
//! never links to it. Use [`FragmentTable`] to resolve names.
//!
//! # Example
//!
//! ```rust
//! use pushql_parser::Parser;
//!
//! let source = "query { posts { text, } }";
//! let doc = Parser::new(source).parse().into_valid_ast().unwrap();
//! let operation = doc.operation().unwrap();
//! assert_eq!(operation.selection_set.fields[0].name.value, "posts");
//! ```
//!
//! [`Cow<'src, str>`]: std::borrow::Cow

mod argument;
mod ast_node;
mod directive;
mod document;
mod field;
mod fragment;
mod fragment_spread;
mod fragment_table;
mod name;
mod operation;
mod selection_set;

pub use argument::Argument;
pub use argument::StringValue;
pub use ast_node::AstNode;
pub use directive::Directive;
pub use document::Document;
pub use field::Field;
pub use fragment::Fragment;
pub use fragment_spread::FragmentSpread;
pub use fragment_table::FragmentTable;
pub use name::Name;
pub use operation::Operation;
pub use selection_set::SelectionSet;

#[cfg(test)]
mod tests;
