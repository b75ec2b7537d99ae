//! Scanner state machine.
//!
//! The scanner walks the source text byte by byte, producing one token per
//! call to [`ScannerState::scan`]. Trivia (whitespace and comments) is skipped
//! and only recorded through [`ScannerState::has_preceding_line_break`], which
//! the parser needs for automatic semicolon insertion.
//!
//! Template literals are scanned in pieces: the scanner produces a
//! `TemplateHead` up to the first `${`, the parser parses the substitution,
//! and then calls [`ScannerState::rescan_template_continuation`] on the closing
//! `}` to get the following `TemplateMiddle` or `TemplateTail`.

use crate::syntax_kind::{SyntaxKind, text_to_keyword};
use algotrace_common::diagnostics::diagnostic_codes;

/// A lexical error. The scanner keeps going; the parser decides whether the
/// error is fatal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScannerDiagnostic {
    pub pos: usize,
    pub length: usize,
    pub message: &'static str,
    pub code: u32,
}

/// Saved scanner position for speculative lookahead.
#[derive(Clone, Copy, Debug)]
pub struct ScannerSnapshot {
    pos: usize,
    token_start: usize,
    token: SyntaxKind,
    preceding_line_break: bool,
    diagnostics_len: usize,
}

pub struct ScannerState {
    text: String,
    /// Byte offset of the next unscanned character.
    pos: usize,
    /// Byte offset where the current token starts (after trivia).
    token_start: usize,
    token: SyntaxKind,
    preceding_line_break: bool,
    diagnostics: Vec<ScannerDiagnostic>,
}

impl ScannerState {
    pub fn new(text: String) -> Self {
        ScannerState {
            text,
            pos: 0,
            token_start: 0,
            token: SyntaxKind::Unknown,
            preceding_line_break: false,
            diagnostics: Vec::new(),
        }
    }

    pub fn source_text(&self) -> &str {
        &self.text
    }

    /// Current token kind (the result of the last `scan`).
    #[inline]
    pub fn token(&self) -> SyntaxKind {
        self.token
    }

    #[inline]
    pub fn token_pos(&self) -> usize {
        self.token_start
    }

    #[inline]
    pub fn token_end(&self) -> usize {
        self.pos
    }

    /// Raw source text of the current token.
    pub fn token_text(&self) -> &str {
        &self.text[self.token_start..self.pos]
    }

    /// True when a line terminator appeared between the previous token and
    /// the current one.
    #[inline]
    pub fn has_preceding_line_break(&self) -> bool {
        self.preceding_line_break
    }

    pub fn diagnostics(&self) -> &[ScannerDiagnostic] {
        &self.diagnostics
    }

    pub fn save_state(&self) -> ScannerSnapshot {
        ScannerSnapshot {
            pos: self.pos,
            token_start: self.token_start,
            token: self.token,
            preceding_line_break: self.preceding_line_break,
            diagnostics_len: self.diagnostics.len(),
        }
    }

    pub fn restore_state(&mut self, snapshot: ScannerSnapshot) {
        self.pos = snapshot.pos;
        self.token_start = snapshot.token_start;
        self.token = snapshot.token;
        self.preceding_line_break = snapshot.preceding_line_break;
        self.diagnostics.truncate(snapshot.diagnostics_len);
    }

    /// Skip a `#!` interpreter line at the very start of the file.
    pub fn scan_shebang_trivia(&mut self) {
        if self.pos == 0 && self.text.starts_with("#!") {
            self.pos = self.line_end_from(2);
        }
    }

    // =========================================================================
    // Character helpers
    // =========================================================================

    #[inline]
    fn byte_at(&self, offset: usize) -> u8 {
        self.text.as_bytes().get(offset).copied().unwrap_or(0)
    }

    #[inline]
    fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    #[inline]
    fn char_at(&self, offset: usize) -> Option<char> {
        self.text.get(offset..).and_then(|rest| rest.chars().next())
    }

    /// Offset of the next `\n` or `\r` at or after `from`, or end of text.
    fn line_end_from(&self, from: usize) -> usize {
        let bytes = self.text.as_bytes();
        match memchr::memchr2(b'\n', b'\r', &bytes[from.min(bytes.len())..]) {
            Some(i) => from + i,
            None => bytes.len(),
        }
    }

    fn error(&mut self, pos: usize, length: usize, message: &'static str, code: u32) {
        self.diagnostics.push(ScannerDiagnostic {
            pos,
            length,
            message,
            code,
        });
    }

    #[inline]
    fn finish(&mut self, len: usize, kind: SyntaxKind) -> SyntaxKind {
        self.pos += len;
        self.token = kind;
        kind
    }

    // =========================================================================
    // Main scan loop
    // =========================================================================

    /// Scan the next token, skipping trivia.
    pub fn scan(&mut self) -> SyntaxKind {
        self.preceding_line_break = false;
        loop {
            self.token_start = self.pos;
            if self.is_eof() {
                self.token = SyntaxKind::EndOfFileToken;
                return self.token;
            }

            let b = self.byte_at(self.pos);
            match b {
                b'\n' | b'\r' => {
                    self.preceding_line_break = true;
                    self.pos += 1;
                }
                b' ' | b'\t' | 0x0b | 0x0c => self.pos += 1,
                b'/' => match self.byte_at(self.pos + 1) {
                    b'/' => self.pos = self.line_end_from(self.pos + 2),
                    b'*' => self.skip_block_comment(),
                    b'=' => return self.finish(2, SyntaxKind::SlashEqualsToken),
                    _ => return self.finish(1, SyntaxKind::SlashToken),
                },
                b'{' => return self.finish(1, SyntaxKind::OpenBraceToken),
                b'}' => return self.finish(1, SyntaxKind::CloseBraceToken),
                b'(' => return self.finish(1, SyntaxKind::OpenParenToken),
                b')' => return self.finish(1, SyntaxKind::CloseParenToken),
                b'[' => return self.finish(1, SyntaxKind::OpenBracketToken),
                b']' => return self.finish(1, SyntaxKind::CloseBracketToken),
                b';' => return self.finish(1, SyntaxKind::SemicolonToken),
                b',' => return self.finish(1, SyntaxKind::CommaToken),
                b':' => return self.finish(1, SyntaxKind::ColonToken),
                b'~' => return self.finish(1, SyntaxKind::TildeToken),
                b'@' => return self.finish(1, SyntaxKind::AtToken),
                b'#' => return self.finish(1, SyntaxKind::HashToken),
                b'.' => {
                    if self.byte_at(self.pos + 1).is_ascii_digit() {
                        return self.scan_number();
                    }
                    if self.byte_at(self.pos + 1) == b'.' && self.byte_at(self.pos + 2) == b'.' {
                        return self.finish(3, SyntaxKind::DotDotDotToken);
                    }
                    return self.finish(1, SyntaxKind::DotToken);
                }
                b'?' => {
                    return match (self.byte_at(self.pos + 1), self.byte_at(self.pos + 2)) {
                        // `a?.5:b` is a conditional, not optional chaining
                        (b'.', next) if !next.is_ascii_digit() => {
                            self.finish(2, SyntaxKind::QuestionDotToken)
                        }
                        (b'?', b'=') => self.finish(3, SyntaxKind::QuestionQuestionEqualsToken),
                        (b'?', _) => self.finish(2, SyntaxKind::QuestionQuestionToken),
                        _ => self.finish(1, SyntaxKind::QuestionToken),
                    };
                }
                b'<' => {
                    return match (self.byte_at(self.pos + 1), self.byte_at(self.pos + 2)) {
                        (b'<', b'=') => self.finish(3, SyntaxKind::LessThanLessThanEqualsToken),
                        (b'<', _) => self.finish(2, SyntaxKind::LessThanLessThanToken),
                        (b'=', _) => self.finish(2, SyntaxKind::LessThanEqualsToken),
                        _ => self.finish(1, SyntaxKind::LessThanToken),
                    };
                }
                b'>' => return self.scan_greater_than(),
                b'=' => {
                    return match (self.byte_at(self.pos + 1), self.byte_at(self.pos + 2)) {
                        (b'=', b'=') => self.finish(3, SyntaxKind::EqualsEqualsEqualsToken),
                        (b'=', _) => self.finish(2, SyntaxKind::EqualsEqualsToken),
                        (b'>', _) => self.finish(2, SyntaxKind::EqualsGreaterThanToken),
                        _ => self.finish(1, SyntaxKind::EqualsToken),
                    };
                }
                b'!' => {
                    return match (self.byte_at(self.pos + 1), self.byte_at(self.pos + 2)) {
                        (b'=', b'=') => self.finish(3, SyntaxKind::ExclamationEqualsEqualsToken),
                        (b'=', _) => self.finish(2, SyntaxKind::ExclamationEqualsToken),
                        _ => self.finish(1, SyntaxKind::ExclamationToken),
                    };
                }
                b'+' => {
                    return match self.byte_at(self.pos + 1) {
                        b'+' => self.finish(2, SyntaxKind::PlusPlusToken),
                        b'=' => self.finish(2, SyntaxKind::PlusEqualsToken),
                        _ => self.finish(1, SyntaxKind::PlusToken),
                    };
                }
                b'-' => {
                    return match self.byte_at(self.pos + 1) {
                        b'-' => self.finish(2, SyntaxKind::MinusMinusToken),
                        b'=' => self.finish(2, SyntaxKind::MinusEqualsToken),
                        _ => self.finish(1, SyntaxKind::MinusToken),
                    };
                }
                b'*' => {
                    return match (self.byte_at(self.pos + 1), self.byte_at(self.pos + 2)) {
                        (b'*', b'=') => self.finish(3, SyntaxKind::AsteriskAsteriskEqualsToken),
                        (b'*', _) => self.finish(2, SyntaxKind::AsteriskAsteriskToken),
                        (b'=', _) => self.finish(2, SyntaxKind::AsteriskEqualsToken),
                        _ => self.finish(1, SyntaxKind::AsteriskToken),
                    };
                }
                b'%' => {
                    return match self.byte_at(self.pos + 1) {
                        b'=' => self.finish(2, SyntaxKind::PercentEqualsToken),
                        _ => self.finish(1, SyntaxKind::PercentToken),
                    };
                }
                b'&' => {
                    return match (self.byte_at(self.pos + 1), self.byte_at(self.pos + 2)) {
                        (b'&', b'=') => self.finish(3, SyntaxKind::AmpersandAmpersandEqualsToken),
                        (b'&', _) => self.finish(2, SyntaxKind::AmpersandAmpersandToken),
                        (b'=', _) => self.finish(2, SyntaxKind::AmpersandEqualsToken),
                        _ => self.finish(1, SyntaxKind::AmpersandToken),
                    };
                }
                b'|' => {
                    return match (self.byte_at(self.pos + 1), self.byte_at(self.pos + 2)) {
                        (b'|', b'=') => self.finish(3, SyntaxKind::BarBarEqualsToken),
                        (b'|', _) => self.finish(2, SyntaxKind::BarBarToken),
                        (b'=', _) => self.finish(2, SyntaxKind::BarEqualsToken),
                        _ => self.finish(1, SyntaxKind::BarToken),
                    };
                }
                b'^' => {
                    return match self.byte_at(self.pos + 1) {
                        b'=' => self.finish(2, SyntaxKind::CaretEqualsToken),
                        _ => self.finish(1, SyntaxKind::CaretToken),
                    };
                }
                b'"' | b'\'' => return self.scan_string(b),
                b'`' => {
                    self.pos += 1;
                    return self.scan_template_chars(true);
                }
                b'0'..=b'9' => return self.scan_number(),
                _ => {
                    let Some(ch) = self.char_at(self.pos) else {
                        self.token = SyntaxKind::EndOfFileToken;
                        return self.token;
                    };
                    if ch == '\u{2028}' || ch == '\u{2029}' {
                        self.preceding_line_break = true;
                        self.pos += ch.len_utf8();
                    } else if ch.is_whitespace() || ch == '\u{feff}' {
                        self.pos += ch.len_utf8();
                    } else if is_identifier_start(ch) {
                        return self.scan_identifier();
                    } else {
                        let len = ch.len_utf8();
                        self.error(
                            self.pos,
                            len,
                            "Invalid character.",
                            diagnostic_codes::INVALID_CHARACTER,
                        );
                        return self.finish(len, SyntaxKind::Unknown);
                    }
                }
            }
        }
    }

    /// Continue a template literal after the `}` closing a substitution.
    ///
    /// The current token must be `CloseBraceToken`; it is replaced by a
    /// `TemplateMiddle` or `TemplateTail` starting at that brace.
    pub fn rescan_template_continuation(&mut self) -> SyntaxKind {
        debug_assert_eq!(self.token, SyntaxKind::CloseBraceToken);
        self.pos = self.token_start + 1;
        self.scan_template_chars(false)
    }

    // =========================================================================
    // Token scanners
    // =========================================================================

    fn scan_greater_than(&mut self) -> SyntaxKind {
        let b1 = self.byte_at(self.pos + 1);
        let b2 = self.byte_at(self.pos + 2);
        let b3 = self.byte_at(self.pos + 3);
        match (b1, b2, b3) {
            (b'>', b'>', b'=') => {
                self.finish(4, SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken)
            }
            (b'>', b'>', _) => self.finish(3, SyntaxKind::GreaterThanGreaterThanGreaterThanToken),
            (b'>', b'=', _) => self.finish(3, SyntaxKind::GreaterThanGreaterThanEqualsToken),
            (b'>', _, _) => self.finish(2, SyntaxKind::GreaterThanGreaterThanToken),
            (b'=', _, _) => self.finish(2, SyntaxKind::GreaterThanEqualsToken),
            _ => self.finish(1, SyntaxKind::GreaterThanToken),
        }
    }

    fn skip_block_comment(&mut self) {
        let start = self.pos;
        let body_start = self.pos + 2;
        match self.text[body_start..].find("*/") {
            Some(close) => {
                let body = &self.text[body_start..body_start + close];
                if body.contains(['\n', '\r', '\u{2028}', '\u{2029}']) {
                    self.preceding_line_break = true;
                }
                self.pos = body_start + close + 2;
            }
            None => {
                self.pos = self.text.len();
                self.error(
                    start,
                    self.pos - start,
                    "'*/' expected.",
                    diagnostic_codes::UNTERMINATED_COMMENT,
                );
            }
        }
    }

    fn scan_digits(&mut self, allow_hex: bool) {
        loop {
            let b = self.byte_at(self.pos);
            let ok = b.is_ascii_digit() || b == b'_' || (allow_hex && b.is_ascii_hexdigit());
            if !ok {
                break;
            }
            self.pos += 1;
        }
    }

    fn scan_number(&mut self) -> SyntaxKind {
        let b0 = self.byte_at(self.pos);
        let radix = self.byte_at(self.pos + 1) | 0x20;
        if b0 == b'0' && matches!(radix, b'x' | b'o' | b'b') {
            self.pos += 2;
            self.scan_digits(radix == b'x');
        } else {
            if b0 == b'.' {
                self.pos += 1;
                self.scan_digits(false);
            } else {
                self.scan_digits(false);
                if self.byte_at(self.pos) == b'.' {
                    self.pos += 1;
                    self.scan_digits(false);
                }
            }
            if self.byte_at(self.pos) | 0x20 == b'e' {
                let sign = self.byte_at(self.pos + 1);
                let digits_at = if sign == b'+' || sign == b'-' {
                    self.pos + 2
                } else {
                    self.pos + 1
                };
                if self.byte_at(digits_at).is_ascii_digit() {
                    self.pos = digits_at;
                    self.scan_digits(false);
                }
            }
        }
        if self.byte_at(self.pos) == b'n' {
            return self.finish(1, SyntaxKind::BigIntLiteral);
        }
        self.token = SyntaxKind::NumericLiteral;
        self.token
    }

    fn scan_string(&mut self, quote: u8) -> SyntaxKind {
        let start = self.pos;
        self.pos += 1;
        loop {
            if self.is_eof() {
                return self.unterminated_string(start);
            }
            match self.byte_at(self.pos) {
                b if b == quote => {
                    self.pos += 1;
                    self.token = SyntaxKind::StringLiteral;
                    return self.token;
                }
                b'\\' => {
                    // Escaped line terminators are line continuations.
                    if self.byte_at(self.pos + 1) == b'\r' && self.byte_at(self.pos + 2) == b'\n' {
                        self.pos += 3;
                    } else {
                        self.pos += 2;
                    }
                    self.pos = self.pos.min(self.text.len());
                }
                b'\n' | b'\r' => return self.unterminated_string(start),
                _ => self.pos += 1,
            }
        }
    }

    fn unterminated_string(&mut self, start: usize) -> SyntaxKind {
        self.error(
            start,
            self.pos - start,
            "Unterminated string literal.",
            diagnostic_codes::UNTERMINATED_STRING_LITERAL,
        );
        self.token = SyntaxKind::Unknown;
        self.token
    }

    /// Scan template characters up to the next `${` or closing backtick.
    /// `self.pos` is just past the opening backtick or closing brace.
    fn scan_template_chars(&mut self, is_head: bool) -> SyntaxKind {
        loop {
            if self.is_eof() {
                self.error(
                    self.token_start,
                    self.pos - self.token_start,
                    "Unterminated template literal.",
                    diagnostic_codes::UNTERMINATED_TEMPLATE_LITERAL,
                );
                self.token = SyntaxKind::Unknown;
                return self.token;
            }
            match self.byte_at(self.pos) {
                b'`' => {
                    let kind = if is_head {
                        SyntaxKind::NoSubstitutionTemplateLiteral
                    } else {
                        SyntaxKind::TemplateTail
                    };
                    return self.finish(1, kind);
                }
                b'$' if self.byte_at(self.pos + 1) == b'{' => {
                    let kind = if is_head {
                        SyntaxKind::TemplateHead
                    } else {
                        SyntaxKind::TemplateMiddle
                    };
                    return self.finish(2, kind);
                }
                b'\\' => self.pos = (self.pos + 2).min(self.text.len()),
                _ => self.pos += 1,
            }
        }
    }

    fn scan_identifier(&mut self) -> SyntaxKind {
        let start = self.pos;
        while let Some(ch) = self.char_at(self.pos) {
            if !is_identifier_part(ch) {
                break;
            }
            self.pos += ch.len_utf8();
        }
        self.token = text_to_keyword(&self.text[start..self.pos]).unwrap_or(SyntaxKind::Identifier);
        self.token
    }
}

pub fn is_identifier_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_' || ch == '$' || (!ch.is_ascii() && ch.is_alphabetic())
}

pub fn is_identifier_part(ch: char) -> bool {
    is_identifier_start(ch)
        || ch.is_ascii_digit()
        || (!ch.is_ascii() && ch.is_alphanumeric())
        || ch == '\u{200c}'
        || ch == '\u{200d}'
}

/// True when `text` is a non-empty identifier that is not a reserved word.
pub fn is_valid_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    is_identifier_start(first) && chars.all(is_identifier_part) && text_to_keyword(text).is_none()
}

#[cfg(test)]
#[path = "../tests/scanner_tests.rs"]
mod tests;
