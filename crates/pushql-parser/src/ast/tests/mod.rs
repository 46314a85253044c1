mod ast_source_tests;
mod fragment_table_tests;
