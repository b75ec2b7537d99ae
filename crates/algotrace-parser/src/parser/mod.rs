//! Recursive-descent parser.
//!
//! `ParserState` owns the scanner and produces a `Program`. Parsing is
//! all-or-nothing: the first syntax error aborts with a `ParseDiagnostic`.

pub mod node;
mod state;
mod state_bindings;
mod state_expressions;
mod state_statements;

pub use state::{ParseDiagnostic, ParseResult, ParserState};

/// Parse `source` as a complete program.
pub fn parse_source(file_name: &str, source: &str) -> ParseResult<node::Program> {
    let mut parser = ParserState::new(file_name.to_string(), source.to_string());
    parser.parse_source_file()
}

#[cfg(test)]
#[path = "../../tests/state_statement_tests.rs"]
mod state_statement_tests;

#[cfg(test)]
#[path = "../../tests/state_expression_tests.rs"]
mod state_expression_tests;
