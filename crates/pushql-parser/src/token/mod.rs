//! Token types produced by the lexer and consumed by the parser, plus the
//! reserved-word table.

mod keywords;
mod spanned_token;
mod string_value;
mod token_kind;

pub use keywords::lookup_identifier;
pub use keywords::KEYWORDS;
pub use spanned_token::Token;
pub use token_kind::TokenKind;

#[cfg(test)]
mod tests;
