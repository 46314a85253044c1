//! Token source trait and the string lexer.

mod lexer;
mod token_source_trait;

pub use lexer::Lexer;
pub use token_source_trait::TokenSource;
