//! Parser state - binding identifiers, destructuring patterns and parameter lists

use super::node::{
    ArrayPattern, BindingElement, Expr, ObjectPattern, ObjectPatternProperty, Param, Pattern,
    PropertyKey,
};
use super::state::{ParseResult, ParserState};
use algotrace_common::diagnostics::diagnostic_codes;
use algotrace_scanner::SyntaxKind;

impl ParserState {
    pub(crate) fn parse_binding_identifier(&mut self) -> ParseResult<String> {
        if !self.is_token(SyntaxKind::Identifier) {
            return Err(self.identifier_expected());
        }
        let name = self.token_text().to_string();
        self.next_token();
        Ok(name)
    }

    /// A name, or an array/object destructuring pattern.
    pub(crate) fn parse_binding_target(&mut self) -> ParseResult<Pattern> {
        match self.token() {
            SyntaxKind::OpenBracketToken => self.guarded(Self::parse_array_binding_pattern),
            SyntaxKind::OpenBraceToken => self.guarded(Self::parse_object_binding_pattern),
            _ => Ok(Pattern::Identifier(self.parse_binding_identifier()?)),
        }
    }

    /// `target` or `target = default`.
    fn parse_binding_element(&mut self) -> ParseResult<BindingElement> {
        let target = self.parse_binding_target()?;
        let default = self.parse_binding_default()?;
        Ok(BindingElement { target, default })
    }

    fn parse_binding_default(&mut self) -> ParseResult<Option<Expr>> {
        if self.parse_optional(SyntaxKind::EqualsToken) {
            Ok(Some(self.allowing_in(Self::parse_assignment_expression)?))
        } else {
            Ok(None)
        }
    }

    fn parse_array_binding_pattern(&mut self) -> ParseResult<Pattern> {
        self.parse_expected(SyntaxKind::OpenBracketToken)?;
        let mut pattern = ArrayPattern::default();
        while !self.is_token(SyntaxKind::CloseBracketToken) {
            if self.parse_optional(SyntaxKind::CommaToken) {
                pattern.elements.push(None);
                continue;
            }
            if self.parse_optional(SyntaxKind::DotDotDotToken) {
                pattern.rest = Some(Box::new(self.parse_binding_target()?));
                self.rest_must_be_last(SyntaxKind::CloseBracketToken)?;
                break;
            }
            pattern.elements.push(Some(self.parse_binding_element()?));
            if !self.is_token(SyntaxKind::CloseBracketToken) {
                self.parse_expected(SyntaxKind::CommaToken)?;
            }
        }
        self.parse_expected(SyntaxKind::CloseBracketToken)?;
        Ok(Pattern::Array(pattern))
    }

    fn parse_object_binding_pattern(&mut self) -> ParseResult<Pattern> {
        self.parse_expected(SyntaxKind::OpenBraceToken)?;
        let mut pattern = ObjectPattern::default();
        while !self.is_token(SyntaxKind::CloseBraceToken) {
            if self.parse_optional(SyntaxKind::DotDotDotToken) {
                pattern.rest = Some(self.parse_binding_identifier()?);
                self.rest_must_be_last(SyntaxKind::CloseBraceToken)?;
                break;
            }

            let is_plain_identifier = self.is_token(SyntaxKind::Identifier);
            let key = self.parse_property_key()?;
            let property = if self.parse_optional(SyntaxKind::ColonToken) {
                ObjectPatternProperty {
                    key,
                    value: self.parse_binding_element()?,
                    shorthand: false,
                }
            } else {
                let name = match &key {
                    PropertyKey::Identifier(name) if is_plain_identifier => name.clone(),
                    _ => {
                        return Err(self.error_at_current_token(
                            "':' expected.".to_string(),
                            diagnostic_codes::EXPECTED_TOKEN,
                        ));
                    }
                };
                ObjectPatternProperty {
                    key,
                    value: BindingElement {
                        target: Pattern::Identifier(name),
                        default: self.parse_binding_default()?,
                    },
                    shorthand: true,
                }
            };
            pattern.properties.push(property);

            if !self.is_token(SyntaxKind::CloseBraceToken) {
                self.parse_expected(SyntaxKind::CommaToken)?;
            }
        }
        self.parse_expected(SyntaxKind::CloseBraceToken)?;
        Ok(Pattern::Object(pattern))
    }

    fn rest_must_be_last(&self, close: SyntaxKind) -> ParseResult<()> {
        if self.is_token(close) {
            Ok(())
        } else {
            Err(self.error_at_current_token(
                "A rest element must be last in a destructuring pattern.".to_string(),
                diagnostic_codes::EXPECTED_TOKEN,
            ))
        }
    }

    /// `(a, b = 1, [c, d], ...rest)`
    pub(crate) fn parse_parameter_list(&mut self) -> ParseResult<Vec<Param>> {
        self.parse_expected(SyntaxKind::OpenParenToken)?;
        self.allowing_in(|p| {
            let mut params = Vec::new();
            while !p.is_token(SyntaxKind::CloseParenToken) {
                if p.parse_optional(SyntaxKind::DotDotDotToken) {
                    let target = p.parse_binding_target()?;
                    params.push(Param {
                        binding: BindingElement {
                            target,
                            default: None,
                        },
                        rest: true,
                    });
                    if !p.is_token(SyntaxKind::CloseParenToken) {
                        return Err(p.error_at_current_token(
                            "A rest parameter must be last in a parameter list.".to_string(),
                            diagnostic_codes::EXPECTED_TOKEN,
                        ));
                    }
                    break;
                }
                params.push(Param {
                    binding: p.parse_binding_element()?,
                    rest: false,
                });
                if !p.is_token(SyntaxKind::CloseParenToken) {
                    p.parse_expected(SyntaxKind::CommaToken)?;
                }
            }
            p.parse_expected(SyntaxKind::CloseParenToken)?;
            Ok(params)
        })
    }
}
