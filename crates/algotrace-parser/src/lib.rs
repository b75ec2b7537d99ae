//! Parser and syntax tree types for the algotrace instrumenter.
//!
//! This crate provides:
//! - The syntax tree (`Program`, `Stmt`, `Expr`, `Pattern`, ...)
//! - `ParserState` - Recursive-descent parser for the supported script subset
//! - `VisitMut` - Mutable tree walker with explicit block ownership

pub mod parser;
pub use parser::node::*;
pub use parser::{ParseDiagnostic, ParseResult, ParserState, parse_source};

pub mod visit;
pub use visit::{BlockOwner, LoopKind, VisitMut};
