//! Printer - syntax tree to source text.
//!
//! Output is canonical rather than source-preserving: one statement per line,
//! blocks spread across lines, single spaces around binary operators and
//! comments dropped. Literal tokens are printed from their raw source text.
//! Parentheses are printed only where the tree has a `Paren` node, so any tree
//! the parser produced prints back to text that parses to the same tree.

use algotrace_common::NewLineKind;
use algotrace_parser::Program;

use crate::source_writer::SourceWriter;

mod expressions;
mod helpers;
mod statements;

/// Printer configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrinterOptions {
    /// Spaces per indentation level.
    pub indent_width: usize,
    pub new_line: NewLineKind,
}

impl Default for PrinterOptions {
    fn default() -> Self {
        PrinterOptions {
            indent_width: 4,
            new_line: NewLineKind::Lf,
        }
    }
}

pub struct Printer {
    pub(super) writer: SourceWriter,
}

impl Printer {
    pub fn new(options: PrinterOptions) -> Self {
        Printer {
            writer: SourceWriter::new(options.indent_width, options.new_line),
        }
    }

    /// Create a printer whose buffer is pre-sized for roughly `capacity` bytes.
    pub fn with_capacity(options: PrinterOptions, capacity: usize) -> Self {
        Printer {
            writer: SourceWriter::with_capacity(capacity, options.indent_width, options.new_line),
        }
    }

    /// Print a whole program into a new string.
    pub fn print(program: &Program, options: PrinterOptions) -> String {
        let mut printer = Printer::new(options);
        printer.emit_program(program);
        printer.take_output()
    }

    /// Emit every top-level statement, each terminated by a new line.
    pub fn emit_program(&mut self, program: &Program) {
        for stmt in &program.statements {
            self.emit_statement(stmt);
            self.write_line();
        }
    }

    pub fn get_output(&self) -> &str {
        self.writer.get_output()
    }

    pub fn take_output(&mut self) -> String {
        self.writer.take_output()
    }
}

#[cfg(test)]
#[path = "../../tests/printer_tests.rs"]
mod tests;
