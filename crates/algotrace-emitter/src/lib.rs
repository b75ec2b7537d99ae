//! Source printer for the algotrace instrumenter.
//!
//! This crate turns a syntax tree back into source text:
//! - `SourceWriter` - Output buffer with indentation and line endings
//! - `Printer` - Tree-to-text printer with a canonical layout

pub mod source_writer;
pub use source_writer::SourceWriter;

pub mod emitter;
pub use emitter::{Printer, PrinterOptions};
