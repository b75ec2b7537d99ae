use anyhow::{Context, Result};
use colored::Colorize;

use algotrace::common::LineMap;
use algotrace::{Diagnostic, DiagnosticCategory};

use crate::args::DiagnosticsFormat;

pub struct Reporter {
    format: DiagnosticsFormat,
    color: bool,
}

impl Reporter {
    pub fn new(format: DiagnosticsFormat, color: bool) -> Self {
        Reporter { format, color }
    }

    /// Render one diagnostic as a single line. `source` is the text the
    /// diagnostic's byte offset points into.
    pub fn format_diagnostic(&self, diagnostic: &Diagnostic, source: &str) -> Result<String> {
        match self.format {
            DiagnosticsFormat::Json => {
                serde_json::to_string(diagnostic).context("failed to serialize diagnostic")
            }
            DiagnosticsFormat::Pretty => Ok(self.format_pretty(diagnostic, source)),
        }
    }

    /// `file(line,col): error AT<code>: message`
    fn format_pretty(&self, diagnostic: &Diagnostic, source: &str) -> String {
        let line_map = LineMap::build(source);
        if !self.color {
            return diagnostic.format_with(&line_map);
        }

        let position = line_map.offset_to_position(diagnostic.start);
        let location = format!(
            "{}({},{})",
            diagnostic.file,
            position.line + 1,
            position.character + 1
        );
        format!(
            "{}: {} {}: {}",
            location.cyan(),
            self.format_category(diagnostic.category),
            format!("AT{}", diagnostic.code).bright_blue(),
            diagnostic.message_text
        )
    }

    fn format_category(&self, category: DiagnosticCategory) -> String {
        let label = category.as_str();
        match category {
            DiagnosticCategory::Error => label.red().bold().to_string(),
            DiagnosticCategory::Warning => label.yellow().bold().to_string(),
            DiagnosticCategory::Message => label.cyan().bold().to_string(),
        }
    }
}

#[cfg(test)]
#[path = "../tests/reporter_tests.rs"]
mod tests;
