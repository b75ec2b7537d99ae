//! Parser state - token cursor, diagnostics and shared helpers.

use std::fmt;

use algotrace_common::Diagnostic;
use algotrace_common::diagnostics::{diagnostic_codes, format_message};
use algotrace_common::limits::{MAX_PARSE_DEPTH, MAX_SOURCE_LEN};
use algotrace_scanner::{ScannerState, SyntaxKind};

use super::node::Program;

/// The error that aborted a parse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseDiagnostic {
    pub start: u32,
    pub length: u32,
    pub message: String,
    pub code: u32,
}

impl ParseDiagnostic {
    pub fn into_diagnostic(self, file: impl Into<String>) -> Diagnostic {
        Diagnostic::error(file, self.start, self.length, self.message, self.code)
    }
}

impl fmt::Display for ParseDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AT{} at {}: {}", self.code, self.start, self.message)
    }
}

impl std::error::Error for ParseDiagnostic {}

pub type ParseResult<T> = Result<T, ParseDiagnostic>;

pub struct ParserState {
    pub(crate) scanner: ScannerState,
    pub(crate) file_name: String,
    pub(crate) current_token: SyntaxKind,
    /// Nesting depth of guarded productions, bounded by `MAX_PARSE_DEPTH`.
    pub(crate) recursion_depth: u32,
    /// True while parsing a `for` head, where `in` ends the initializer.
    pub(crate) disallow_in: bool,
    parse_diagnostics: Vec<ParseDiagnostic>,
}

impl ParserState {
    pub fn new(file_name: String, source_text: String) -> ParserState {
        ParserState {
            scanner: ScannerState::new(source_text),
            file_name,
            current_token: SyntaxKind::Unknown,
            recursion_depth: 0,
            disallow_in: false,
            parse_diagnostics: Vec::new(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Diagnostics recorded by `parse_source_file`. Holds at most one entry,
    /// since the first error stops the parse.
    pub fn get_diagnostics(&self) -> &[ParseDiagnostic] {
        &self.parse_diagnostics
    }

    /// Parse the whole source text.
    pub fn parse_source_file(&mut self) -> ParseResult<Program> {
        let result = self.parse_source_file_inner();
        if let Err(diag) = &result {
            tracing::debug!(
                file = %self.file_name,
                code = diag.code,
                start = diag.start,
                message = %diag.message,
                "parse failed"
            );
            self.parse_diagnostics.push(diag.clone());
        }
        result
    }

    fn parse_source_file_inner(&mut self) -> ParseResult<Program> {
        if self.scanner.source_text().len() > MAX_SOURCE_LEN {
            return Err(ParseDiagnostic {
                start: 0,
                length: 0,
                message: "Source text is too large.".to_string(),
                code: diagnostic_codes::SOURCE_TOO_LARGE,
            });
        }

        self.scanner.scan_shebang_trivia();
        self.next_token();

        let mut statements = Vec::new();
        while !self.is_token(SyntaxKind::EndOfFileToken) {
            statements.push(self.parse_statement()?);
        }

        // Lexical errors that did not surface as an `Unknown` token
        // (an unterminated comment running to end of file).
        if let Some(diag) = self.scanner.diagnostics().first() {
            return Err(ParseDiagnostic {
                start: self.u32_from_usize(diag.pos),
                length: self.u32_from_usize(diag.length),
                message: diag.message.to_string(),
                code: diag.code,
            });
        }

        Ok(Program { statements })
    }

    // =========================================================================
    // Token helpers
    // =========================================================================

    #[inline]
    pub(crate) fn next_token(&mut self) -> SyntaxKind {
        self.current_token = self.scanner.scan();
        self.current_token
    }

    #[inline]
    pub(crate) fn token(&self) -> SyntaxKind {
        self.current_token
    }

    #[inline]
    pub(crate) fn is_token(&self, kind: SyntaxKind) -> bool {
        self.current_token == kind
    }

    #[inline]
    pub(crate) fn u32_from_usize(&self, value: usize) -> u32 {
        u32::try_from(value).unwrap_or(u32::MAX)
    }

    pub(crate) fn token_text(&self) -> &str {
        self.scanner.token_text()
    }

    /// True for an `Identifier` token whose text is `word` (contextual keywords).
    pub(crate) fn is_contextual(&self, word: &str) -> bool {
        self.is_token(SyntaxKind::Identifier) && self.token_text() == word
    }

    pub(crate) fn has_preceding_line_break(&self) -> bool {
        self.scanner.has_preceding_line_break()
    }

    pub(crate) fn parse_optional(&mut self, kind: SyntaxKind) -> bool {
        if self.is_token(kind) {
            self.next_token();
            true
        } else {
            false
        }
    }

    pub(crate) fn parse_expected(&mut self, kind: SyntaxKind) -> ParseResult<()> {
        if self.parse_optional(kind) {
            Ok(())
        } else {
            Err(self.error_at_current_token(
                format_message("'{0}' expected.", &[kind.text()]),
                diagnostic_codes::EXPECTED_TOKEN,
            ))
        }
    }

    /// Automatic semicolon insertion: a statement may end without `;` before
    /// `}`, at end of file, or at a line break.
    pub(crate) fn can_parse_semicolon(&self) -> bool {
        matches!(
            self.token(),
            SyntaxKind::SemicolonToken | SyntaxKind::CloseBraceToken | SyntaxKind::EndOfFileToken
        ) || self.has_preceding_line_break()
    }

    pub(crate) fn parse_semicolon(&mut self) -> ParseResult<()> {
        if self.parse_optional(SyntaxKind::SemicolonToken) || self.can_parse_semicolon() {
            Ok(())
        } else {
            Err(self.error_at_current_token(
                "';' expected.".to_string(),
                diagnostic_codes::EXPECTED_TOKEN,
            ))
        }
    }

    // =========================================================================
    // Diagnostics
    // =========================================================================

    /// Build a diagnostic at the current token. An `Unknown` token reports the
    /// scanner's own error instead, which is more precise.
    pub(crate) fn error_at_current_token(&self, message: String, code: u32) -> ParseDiagnostic {
        if self.is_token(SyntaxKind::Unknown) {
            if let Some(diag) = self.scanner.diagnostics().last() {
                return ParseDiagnostic {
                    start: self.u32_from_usize(diag.pos),
                    length: self.u32_from_usize(diag.length),
                    message: diag.message.to_string(),
                    code: diag.code,
                };
            }
        }
        let start = self.scanner.token_pos();
        let end = self.scanner.token_end();
        ParseDiagnostic {
            start: self.u32_from_usize(start),
            length: self.u32_from_usize(end - start),
            message,
            code,
        }
    }

    pub(crate) fn unsupported(&self, what: &str) -> ParseDiagnostic {
        self.error_at_current_token(
            format_message("{0} is not supported.", &[what]),
            diagnostic_codes::UNSUPPORTED_SYNTAX,
        )
    }

    pub(crate) fn identifier_expected(&self) -> ParseDiagnostic {
        self.error_at_current_token(
            "Identifier expected.".to_string(),
            diagnostic_codes::IDENTIFIER_EXPECTED,
        )
    }

    // =========================================================================
    // Context helpers
    // =========================================================================

    /// Run `f` one nesting level deeper, failing once `MAX_PARSE_DEPTH` is hit.
    pub(crate) fn guarded<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        self.deepen()?;
        let result = f(self);
        self.recursion_depth -= 1;
        result
    }

    /// Take one nesting level without returning it. Loops that fold operands
    /// into a left-nested node (`a + b + c`, `a.b.c`) call this once per
    /// node, so the tree stays as shallow as the limit allows. Pair with
    /// `folding`, which gives the levels back when the chain is complete.
    pub(crate) fn deepen(&mut self) -> ParseResult<()> {
        if self.recursion_depth >= MAX_PARSE_DEPTH {
            return Err(self.error_at_current_token(
                "Nesting is too deep.".to_string(),
                diagnostic_codes::NESTING_TOO_DEEP,
            ));
        }
        self.recursion_depth += 1;
        Ok(())
    }

    /// Run `f`, then drop every level it took with `deepen`.
    pub(crate) fn folding<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        let depth = self.recursion_depth;
        let result = f(self);
        self.recursion_depth = depth;
        result
    }

    /// Run `f` with `in` treated as a binary operator again (inside brackets,
    /// argument lists and function bodies nested in a `for` head).
    pub(crate) fn allowing_in<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        let saved = std::mem::replace(&mut self.disallow_in, false);
        let result = f(self);
        self.disallow_in = saved;
        result
    }

    /// Run `f` with `in` disallowed as a binary operator (a `for` head initializer).
    pub(crate) fn disallowing_in<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        let saved = std::mem::replace(&mut self.disallow_in, true);
        let result = f(self);
        self.disallow_in = saved;
        result
    }

    /// Speculatively run `f`, then rewind the scanner to where it was.
    pub(crate) fn look_ahead<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let snapshot = self.scanner.save_state();
        let token = self.current_token;
        let result = f(self);
        self.scanner.restore_state(snapshot);
        self.current_token = token;
        result
    }
}
