mod parse_error_tests;
mod parser_selection_tests;
pub(crate) mod utils;
