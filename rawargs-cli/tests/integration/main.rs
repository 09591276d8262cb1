mod arguments_tests;
mod cli_tests;
