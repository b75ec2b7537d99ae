//! Diagnostic types shared by the parser, the instrumenter and the CLI.

use serde::Serialize;

use crate::position::LineMap;

/// Diagnostic category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DiagnosticCategory {
    Warning = 0,
    Error = 1,
    Message = 3,
}

impl DiagnosticCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Message => "message",
        }
    }
}

/// Numeric diagnostic codes. Reported as `AT<code>`.
pub mod diagnostic_codes {
    pub const INVALID_CHARACTER: u32 = 1127;
    pub const UNTERMINATED_STRING_LITERAL: u32 = 1002;
    pub const UNTERMINATED_TEMPLATE_LITERAL: u32 = 1160;
    pub const UNTERMINATED_COMMENT: u32 = 1010;
    pub const EXPECTED_TOKEN: u32 = 1005;
    pub const EXPRESSION_EXPECTED: u32 = 1109;
    pub const IDENTIFIER_EXPECTED: u32 = 1003;
    pub const DECLARATION_OR_STATEMENT_EXPECTED: u32 = 1128;
    pub const INVALID_ASSIGNMENT_TARGET: u32 = 2364;
    pub const UNSUPPORTED_SYNTAX: u32 = 9001;
    pub const NESTING_TOO_DEEP: u32 = 9002;
    pub const SOURCE_TOO_LARGE: u32 = 9003;
}

/// A located diagnostic message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub file: String,
    pub start: u32,
    pub length: u32,
    pub message_text: String,
    pub category: DiagnosticCategory,
    pub code: u32,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    #[must_use]
    pub fn error(
        file: impl Into<String>,
        start: u32,
        length: u32,
        message: impl Into<String>,
        code: u32,
    ) -> Self {
        Self {
            file: file.into(),
            start,
            length,
            message_text: message.into(),
            category: DiagnosticCategory::Error,
            code,
        }
    }

    /// Render as `file(line,col): error AT<code>: message` with one-based
    /// line and column, resolving the offset through `line_map`.
    pub fn format_with(&self, line_map: &LineMap) -> String {
        let pos = line_map.offset_to_position(self.start);
        format!(
            "{}({},{}): {} AT{}: {}",
            self.file,
            pos.line + 1,
            pos.character + 1,
            self.category.as_str(),
            self.code,
            self.message_text
        )
    }
}

/// Substitute `{0}`, `{1}`, ... placeholders in a message template.
pub fn format_message(message: &str, args: &[&str]) -> String {
    let mut result = message.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}

#[cfg(test)]
#[path = "../tests/diagnostics_tests.rs"]
mod tests;
