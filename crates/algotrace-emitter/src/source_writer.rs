//! Output buffer for the printer.
//!
//! The writer tracks indentation itself: the indent for a line is written
//! lazily, right before the first text on that line, so blank lines never
//! carry trailing whitespace.

use algotrace_common::NewLineKind;

pub struct SourceWriter {
    output: String,
    indent_level: u32,
    indent_unit: String,
    new_line: &'static str,
    at_line_start: bool,
}

impl SourceWriter {
    pub fn new(indent_width: usize, new_line: NewLineKind) -> Self {
        Self::with_capacity(0, indent_width, new_line)
    }

    /// Pre-size the buffer, typically from the length of the source being reprinted.
    pub fn with_capacity(capacity: usize, indent_width: usize, new_line: NewLineKind) -> Self {
        SourceWriter {
            output: String::with_capacity(capacity),
            indent_level: 0,
            indent_unit: " ".repeat(indent_width),
            new_line: new_line.as_str(),
            at_line_start: true,
        }
    }

    #[inline]
    fn write_pending_indent(&mut self) {
        if self.at_line_start {
            self.at_line_start = false;
            for _ in 0..self.indent_level {
                self.output.push_str(&self.indent_unit);
            }
        }
    }

    pub fn write(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.write_pending_indent();
        self.output.push_str(text);
    }

    pub fn write_char(&mut self, ch: char) {
        self.write_pending_indent();
        self.output.push(ch);
    }

    pub fn write_space(&mut self) {
        self.write_char(' ');
    }

    pub fn write_line(&mut self) {
        self.output.push_str(self.new_line);
        self.at_line_start = true;
    }

    pub const fn increase_indent(&mut self) {
        self.indent_level += 1;
    }

    pub const fn decrease_indent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    pub const fn indent_level(&self) -> u32 {
        self.indent_level
    }

    pub const fn is_at_line_start(&self) -> bool {
        self.at_line_start
    }

    pub fn len(&self) -> usize {
        self.output.len()
    }

    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    pub fn get_output(&self) -> &str {
        &self.output
    }

    /// Take the text written so far and reset the writer for reuse.
    pub fn take_output(&mut self) -> String {
        self.indent_level = 0;
        self.at_line_start = true;
        std::mem::take(&mut self.output)
    }
}

#[cfg(test)]
#[path = "../tests/source_writer_tests.rs"]
mod tests;
