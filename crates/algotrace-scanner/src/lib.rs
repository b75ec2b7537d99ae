//! Scanner/tokenizer for the algotrace instrumenter.
//!
//! This crate provides the lexical analysis phase:
//! - `SyntaxKind` - Token types
//! - `ScannerState` - Tokenizer state machine with snapshot/restore for lookahead

pub mod syntax_kind;
pub use syntax_kind::{SyntaxKind, text_to_keyword};

pub mod scanner;
pub use scanner::{ScannerDiagnostic, ScannerSnapshot, ScannerState, is_valid_identifier};
