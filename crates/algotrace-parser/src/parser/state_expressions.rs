//! Parser state - expression parsing methods

use super::node::{
    Arrow, ArrowBody, AssignOp, BinaryOp, Expr, Param, Property, PropertyKey, Template, UnaryOp,
    UpdateOp,
};
use super::state::{ParseDiagnostic, ParseResult, ParserState};
use algotrace_common::diagnostics::diagnostic_codes;
use algotrace_scanner::SyntaxKind;

impl ParserState {
    // =========================================================================
    // Comma and assignment expressions
    // =========================================================================

    /// `a, b, c` (a sequence when more than one operand is present).
    pub(crate) fn parse_expression(&mut self) -> ParseResult<Expr> {
        let first = self.parse_assignment_expression()?;
        if !self.is_token(SyntaxKind::CommaToken) {
            return Ok(first);
        }
        let mut exprs = vec![first];
        while self.parse_optional(SyntaxKind::CommaToken) {
            exprs.push(self.parse_assignment_expression()?);
        }
        Ok(Expr::Sequence(exprs))
    }

    pub(crate) fn parse_assignment_expression(&mut self) -> ParseResult<Expr> {
        self.guarded(Self::parse_assignment_expression_worker)
    }

    fn parse_assignment_expression_worker(&mut self) -> ParseResult<Expr> {
        if self.is_token(SyntaxKind::YieldKeyword) {
            return Err(self.unsupported("'yield' expression"));
        }
        if self.is_async_function_start() {
            return Err(self.unsupported("Async function"));
        }
        if self.is_token(SyntaxKind::Identifier) && self.look_ahead(Self::next_is_arrow) {
            return self.parse_simple_arrow_function();
        }
        if self.is_token(SyntaxKind::OpenParenToken)
            && self.look_ahead(Self::scan_parenthesized_arrow_head)
        {
            return self.parse_parenthesized_arrow_function();
        }

        let left = self.parse_conditional_expression()?;
        let Some(op) = assignment_operator(self.token()) else {
            return Ok(left);
        };

        let valid_target = if op == AssignOp::Assign {
            Self::is_valid_destructuring_target(&left)
        } else {
            left.is_simple_assignment_target()
        };
        if !valid_target {
            return Err(self.error_at_current_token(
                "The left-hand side of an assignment expression must be a variable or a property access.".to_string(),
                diagnostic_codes::INVALID_ASSIGNMENT_TARGET,
            ));
        }

        self.next_token();
        let value = self.parse_assignment_expression()?;
        Ok(Expr::Assign {
            op,
            target: Box::new(left),
            value: Box::new(value),
        })
    }

    /// Whether `expr` may appear on the left of `=` or in a `for-in`/`for-of`
    /// head: a simple target, or an array/object literal of valid targets.
    pub(crate) fn is_valid_destructuring_target(expr: &Expr) -> bool {
        match expr {
            Expr::Array(elements) => {
                let last = elements.len().saturating_sub(1);
                elements.iter().enumerate().all(|(i, element)| match element {
                    None => true,
                    Some(Expr::Spread(inner)) => i == last && Self::is_valid_destructuring_target(inner),
                    Some(element) => Self::is_valid_element_target(element),
                })
            }
            Expr::Object(properties) => {
                let last = properties.len().saturating_sub(1);
                properties.iter().enumerate().all(|(i, prop)| match prop {
                    Property::Shorthand(_) => true,
                    Property::KeyValue { value, .. } => Self::is_valid_element_target(value),
                    Property::Spread(inner) => i == last && inner.is_simple_assignment_target(),
                })
            }
            _ => expr.is_simple_assignment_target(),
        }
    }

    /// A destructuring element may carry a default: `[a = 1] = xs`.
    fn is_valid_element_target(expr: &Expr) -> bool {
        match expr {
            Expr::Assign {
                op: AssignOp::Assign,
                target,
                ..
            } => Self::is_valid_destructuring_target(target),
            _ => Self::is_valid_destructuring_target(expr),
        }
    }

    fn parse_conditional_expression(&mut self) -> ParseResult<Expr> {
        let test = self.parse_binary_expression(0)?;
        if !self.parse_optional(SyntaxKind::QuestionToken) {
            return Ok(test);
        }
        let consequent = self.allowing_in(Self::parse_assignment_expression)?;
        self.parse_expected(SyntaxKind::ColonToken)?;
        let alternate = self.parse_assignment_expression()?;
        Ok(Expr::Conditional {
            test: Box::new(test),
            consequent: Box::new(consequent),
            alternate: Box::new(alternate),
        })
    }

    // =========================================================================
    // Arrow functions
    // =========================================================================

    fn next_is_arrow(&mut self) -> bool {
        self.next_token() == SyntaxKind::EqualsGreaterThanToken
    }

    /// Called in a look-ahead positioned on `(`: skip to the matching `)` and
    /// report whether `=>` follows.
    pub(crate) fn scan_parenthesized_arrow_head(&mut self) -> bool {
        let mut open: Vec<SyntaxKind> = Vec::new();
        loop {
            match self.token() {
                SyntaxKind::OpenParenToken
                | SyntaxKind::OpenBracketToken
                | SyntaxKind::OpenBraceToken
                | SyntaxKind::TemplateHead => open.push(self.token()),
                SyntaxKind::CloseBraceToken if open.last() == Some(&SyntaxKind::TemplateHead) => {
                    self.current_token = self.scanner.rescan_template_continuation();
                    match self.current_token {
                        SyntaxKind::TemplateMiddle => {}
                        SyntaxKind::TemplateTail => {
                            open.pop();
                        }
                        _ => return false,
                    }
                }
                SyntaxKind::CloseParenToken
                | SyntaxKind::CloseBracketToken
                | SyntaxKind::CloseBraceToken => {
                    open.pop();
                    if open.is_empty() {
                        return self.next_token() == SyntaxKind::EqualsGreaterThanToken
                            && !self.has_preceding_line_break();
                    }
                }
                SyntaxKind::EndOfFileToken | SyntaxKind::Unknown => return false,
                _ => {}
            }
            self.next_token();
        }
    }

    /// `x => body`
    fn parse_simple_arrow_function(&mut self) -> ParseResult<Expr> {
        let name = self.parse_binding_identifier()?;
        let params = vec![Param::ident(name)];
        self.parse_arrow_rest(params, true)
    }

    /// `(a, b = 1, ...rest) => body`
    fn parse_parenthesized_arrow_function(&mut self) -> ParseResult<Expr> {
        let params = self.parse_parameter_list()?;
        self.parse_arrow_rest(params, false)
    }

    fn parse_arrow_rest(&mut self, params: Vec<Param>, bare_param: bool) -> ParseResult<Expr> {
        if self.has_preceding_line_break() {
            return Err(self.error_at_current_token(
                "Line terminator not permitted before arrow.".to_string(),
                diagnostic_codes::EXPECTED_TOKEN,
            ));
        }
        self.parse_expected(SyntaxKind::EqualsGreaterThanToken)?;
        let body = if self.is_token(SyntaxKind::OpenBraceToken) {
            ArrowBody::Block(self.parse_function_body()?)
        } else {
            ArrowBody::Expr(Box::new(self.parse_assignment_expression()?))
        };
        Ok(Expr::Arrow(Box::new(Arrow {
            params,
            body,
            bare_param,
        })))
    }

    // =========================================================================
    // Binary and unary expressions
    // =========================================================================

    /// Precedence climbing over binary operators binding tighter than `min_precedence`.
    fn parse_binary_expression(&mut self, min_precedence: u8) -> ParseResult<Expr> {
        self.folding(|p| p.parse_binary_expression_worker(min_precedence))
    }

    fn parse_binary_expression_worker(&mut self, min_precedence: u8) -> ParseResult<Expr> {
        let mut left = self.parse_unary_expression()?;
        while let Some(op) = self.binary_operator() {
            let precedence = op.precedence();
            if precedence <= min_precedence {
                break;
            }
            if op == BinaryOp::Exp && matches!(left, Expr::Unary { .. }) {
                return Err(self.error_at_current_token(
                    "An unary expression is not allowed in the left-hand side of an exponentiation expression.".to_string(),
                    diagnostic_codes::EXPRESSION_EXPECTED,
                ));
            }
            self.deepen()?;
            self.next_token();
            let next_min = if op.is_right_associative() {
                precedence - 1
            } else {
                precedence
            };
            let right = self.parse_binary_expression(next_min)?;
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn binary_operator(&self) -> Option<BinaryOp> {
        let op = match self.token() {
            SyntaxKind::QuestionQuestionToken => BinaryOp::Coalesce,
            SyntaxKind::BarBarToken => BinaryOp::Or,
            SyntaxKind::AmpersandAmpersandToken => BinaryOp::And,
            SyntaxKind::BarToken => BinaryOp::BitOr,
            SyntaxKind::CaretToken => BinaryOp::BitXor,
            SyntaxKind::AmpersandToken => BinaryOp::BitAnd,
            SyntaxKind::EqualsEqualsToken => BinaryOp::Eq,
            SyntaxKind::ExclamationEqualsToken => BinaryOp::NotEq,
            SyntaxKind::EqualsEqualsEqualsToken => BinaryOp::StrictEq,
            SyntaxKind::ExclamationEqualsEqualsToken => BinaryOp::StrictNotEq,
            SyntaxKind::LessThanToken => BinaryOp::Lt,
            SyntaxKind::GreaterThanToken => BinaryOp::Gt,
            SyntaxKind::LessThanEqualsToken => BinaryOp::LtEq,
            SyntaxKind::GreaterThanEqualsToken => BinaryOp::GtEq,
            SyntaxKind::InstanceOfKeyword => BinaryOp::InstanceOf,
            SyntaxKind::InKeyword if !self.disallow_in => BinaryOp::In,
            SyntaxKind::LessThanLessThanToken => BinaryOp::Shl,
            SyntaxKind::GreaterThanGreaterThanToken => BinaryOp::Shr,
            SyntaxKind::GreaterThanGreaterThanGreaterThanToken => BinaryOp::UShr,
            SyntaxKind::PlusToken => BinaryOp::Add,
            SyntaxKind::MinusToken => BinaryOp::Sub,
            SyntaxKind::AsteriskToken => BinaryOp::Mul,
            SyntaxKind::SlashToken => BinaryOp::Div,
            SyntaxKind::PercentToken => BinaryOp::Mod,
            SyntaxKind::AsteriskAsteriskToken => BinaryOp::Exp,
            _ => return None,
        };
        Some(op)
    }

    fn parse_unary_expression(&mut self) -> ParseResult<Expr> {
        self.guarded(Self::parse_unary_expression_worker)
    }

    fn parse_unary_expression_worker(&mut self) -> ParseResult<Expr> {
        let op = match self.token() {
            SyntaxKind::ExclamationToken => UnaryOp::Not,
            SyntaxKind::MinusToken => UnaryOp::Minus,
            SyntaxKind::PlusToken => UnaryOp::Plus,
            SyntaxKind::TildeToken => UnaryOp::BitNot,
            SyntaxKind::TypeOfKeyword => UnaryOp::TypeOf,
            SyntaxKind::VoidKeyword => UnaryOp::Void,
            SyntaxKind::DeleteKeyword => UnaryOp::Delete,
            SyntaxKind::PlusPlusToken | SyntaxKind::MinusMinusToken => {
                return self.parse_prefix_update_expression();
            }
            _ if self.is_contextual("await") && self.look_ahead(Self::next_starts_operand) => {
                return Err(self.unsupported("'await' expression"));
            }
            _ => return self.parse_postfix_expression(),
        };
        self.next_token();
        let arg = self.parse_unary_expression()?;
        Ok(Expr::Unary {
            op,
            arg: Box::new(arg),
        })
    }

    /// `await x` on one line, as opposed to a plain identifier named `await`.
    fn next_starts_operand(&mut self) -> bool {
        let next = self.next_token();
        !self.has_preceding_line_break()
            && (matches!(
                next,
                SyntaxKind::Identifier | SyntaxKind::OpenParenToken | SyntaxKind::ThisKeyword
            ) || next.is_literal())
    }

    fn parse_prefix_update_expression(&mut self) -> ParseResult<Expr> {
        let op = if self.is_token(SyntaxKind::PlusPlusToken) {
            UpdateOp::Increment
        } else {
            UpdateOp::Decrement
        };
        self.next_token();
        let arg = self.parse_unary_expression()?;
        if !arg.is_simple_assignment_target() {
            return Err(self.invalid_update_operand());
        }
        Ok(Expr::Update {
            op,
            prefix: true,
            arg: Box::new(arg),
        })
    }

    fn parse_postfix_expression(&mut self) -> ParseResult<Expr> {
        let expr = self.parse_left_hand_side_expression()?;
        let op = match self.token() {
            SyntaxKind::PlusPlusToken if !self.has_preceding_line_break() => UpdateOp::Increment,
            SyntaxKind::MinusMinusToken if !self.has_preceding_line_break() => UpdateOp::Decrement,
            _ => return Ok(expr),
        };
        if !expr.is_simple_assignment_target() {
            return Err(self.invalid_update_operand());
        }
        self.next_token();
        Ok(Expr::Update {
            op,
            prefix: false,
            arg: Box::new(expr),
        })
    }

    fn invalid_update_operand(&self) -> ParseDiagnostic {
        self.error_at_current_token(
            "The operand of an increment or decrement operator must be a variable or a property access.".to_string(),
            diagnostic_codes::INVALID_ASSIGNMENT_TARGET,
        )
    }

    // =========================================================================
    // Member, call and `new` expressions
    // =========================================================================

    fn parse_left_hand_side_expression(&mut self) -> ParseResult<Expr> {
        let expr = if self.is_token(SyntaxKind::NewKeyword) {
            self.parse_new_expression()?
        } else {
            self.parse_primary_expression()?
        };
        self.parse_member_rest(expr, true)
    }

    fn parse_new_expression(&mut self) -> ParseResult<Expr> {
        self.guarded(|p| {
            p.parse_expected(SyntaxKind::NewKeyword)?;
            if p.is_token(SyntaxKind::DotToken) {
                return Err(p.unsupported("'new.target'"));
            }
            let callee = if p.is_token(SyntaxKind::NewKeyword) {
                p.parse_new_expression()?
            } else {
                p.parse_primary_expression()?
            };
            let callee = p.parse_member_rest(callee, false)?;
            let args = if p.is_token(SyntaxKind::OpenParenToken) {
                Some(p.parse_arguments()?)
            } else {
                None
            };
            Ok(Expr::New {
                callee: Box::new(callee),
                args,
            })
        })
    }

    /// Property accesses, element accesses and (when `allow_call`) calls
    /// following `expr`.
    fn parse_member_rest(&mut self, expr: Expr, allow_call: bool) -> ParseResult<Expr> {
        self.folding(|p| p.parse_member_rest_worker(expr, allow_call))
    }

    fn parse_member_rest_worker(&mut self, mut expr: Expr, allow_call: bool) -> ParseResult<Expr> {
        loop {
            if matches!(
                self.token(),
                SyntaxKind::DotToken
                    | SyntaxKind::QuestionDotToken
                    | SyntaxKind::OpenBracketToken
            ) || (allow_call && self.is_token(SyntaxKind::OpenParenToken))
            {
                self.deepen()?;
            }
            expr = match self.token() {
                SyntaxKind::DotToken => {
                    self.next_token();
                    let property = self.parse_property_name()?;
                    Expr::Member {
                        object: Box::new(expr),
                        property,
                        optional: false,
                    }
                }
                SyntaxKind::QuestionDotToken => {
                    if !allow_call {
                        return Err(self.error_at_current_token(
                            "Invalid optional chain from new expression.".to_string(),
                            diagnostic_codes::EXPRESSION_EXPECTED,
                        ));
                    }
                    self.next_token();
                    match self.token() {
                        SyntaxKind::OpenParenToken => Expr::Call {
                            callee: Box::new(expr),
                            args: self.parse_arguments()?,
                            optional: true,
                        },
                        SyntaxKind::OpenBracketToken => Expr::Index {
                            object: Box::new(expr),
                            index: Box::new(self.parse_element_access()?),
                            optional: true,
                        },
                        _ => Expr::Member {
                            object: Box::new(expr),
                            property: self.parse_property_name()?,
                            optional: true,
                        },
                    }
                }
                SyntaxKind::OpenBracketToken => Expr::Index {
                    object: Box::new(expr),
                    index: Box::new(self.parse_element_access()?),
                    optional: false,
                },
                SyntaxKind::OpenParenToken if allow_call => Expr::Call {
                    callee: Box::new(expr),
                    args: self.parse_arguments()?,
                    optional: false,
                },
                SyntaxKind::NoSubstitutionTemplateLiteral | SyntaxKind::TemplateHead => {
                    return Err(self.unsupported("Tagged template"));
                }
                _ => return Ok(expr),
            };
        }
    }

    /// `[index]`
    fn parse_element_access(&mut self) -> ParseResult<Expr> {
        self.parse_expected(SyntaxKind::OpenBracketToken)?;
        let index = self.allowing_in(Self::parse_expression)?;
        self.parse_expected(SyntaxKind::CloseBracketToken)?;
        Ok(index)
    }

    /// Name after `.`; reserved words are allowed here (`a.default`).
    fn parse_property_name(&mut self) -> ParseResult<String> {
        if self.is_token(SyntaxKind::HashToken) {
            return Err(self.unsupported("Private name"));
        }
        if !self.is_token(SyntaxKind::Identifier) && !self.token().is_keyword() {
            return Err(self.identifier_expected());
        }
        let name = self.token_text().to_string();
        self.next_token();
        Ok(name)
    }

    /// `(a, ...b)`
    fn parse_arguments(&mut self) -> ParseResult<Vec<Expr>> {
        self.parse_expected(SyntaxKind::OpenParenToken)?;
        self.allowing_in(|p| {
            let mut args = Vec::new();
            while !p.is_token(SyntaxKind::CloseParenToken) {
                args.push(p.parse_spread_or_assignment()?);
                if !p.is_token(SyntaxKind::CloseParenToken) {
                    p.parse_expected(SyntaxKind::CommaToken)?;
                }
            }
            p.parse_expected(SyntaxKind::CloseParenToken)?;
            Ok(args)
        })
    }

    fn parse_spread_or_assignment(&mut self) -> ParseResult<Expr> {
        if self.parse_optional(SyntaxKind::DotDotDotToken) {
            Ok(Expr::Spread(Box::new(self.parse_assignment_expression()?)))
        } else {
            self.parse_assignment_expression()
        }
    }

    // =========================================================================
    // Primary expressions
    // =========================================================================

    fn parse_primary_expression(&mut self) -> ParseResult<Expr> {
        let expr = match self.token() {
            SyntaxKind::Identifier => Expr::Identifier(self.token_text().to_string()),
            SyntaxKind::ThisKeyword => Expr::This,
            SyntaxKind::NullKeyword => Expr::Null,
            SyntaxKind::TrueKeyword => Expr::Bool(true),
            SyntaxKind::FalseKeyword => Expr::Bool(false),
            SyntaxKind::NumericLiteral | SyntaxKind::BigIntLiteral => {
                Expr::Number(self.token_text().to_string())
            }
            SyntaxKind::StringLiteral => Expr::String(self.token_text().to_string()),
            SyntaxKind::NoSubstitutionTemplateLiteral | SyntaxKind::TemplateHead => {
                return self.parse_template_expression();
            }
            SyntaxKind::OpenParenToken => return self.parse_parenthesized_expression(),
            SyntaxKind::OpenBracketToken => return self.parse_array_literal(),
            SyntaxKind::OpenBraceToken => return self.parse_object_literal(),
            SyntaxKind::FunctionKeyword => return self.parse_function_expression(),
            SyntaxKind::ClassKeyword => return Err(self.unsupported("Class expression")),
            SyntaxKind::SuperKeyword => return Err(self.unsupported("'super'")),
            SyntaxKind::ImportKeyword => return Err(self.unsupported("Dynamic import")),
            SyntaxKind::SlashToken | SyntaxKind::SlashEqualsToken => {
                return Err(self.unsupported("Regular expression literal"));
            }
            SyntaxKind::AtToken => return Err(self.unsupported("Decorator")),
            SyntaxKind::HashToken => return Err(self.unsupported("Private name")),
            _ => {
                return Err(self.error_at_current_token(
                    "Expression expected.".to_string(),
                    diagnostic_codes::EXPRESSION_EXPECTED,
                ));
            }
        };
        self.next_token();
        Ok(expr)
    }

    fn parse_parenthesized_expression(&mut self) -> ParseResult<Expr> {
        self.parse_expected(SyntaxKind::OpenParenToken)?;
        let inner = self.allowing_in(Self::parse_expression)?;
        self.parse_expected(SyntaxKind::CloseParenToken)?;
        Ok(Expr::Paren(Box::new(inner)))
    }

    fn parse_function_expression(&mut self) -> ParseResult<Expr> {
        self.parse_expected(SyntaxKind::FunctionKeyword)?;
        if self.is_token(SyntaxKind::AsteriskToken) {
            return Err(self.unsupported("Generator function"));
        }
        let name = if self.is_token(SyntaxKind::Identifier) {
            Some(self.parse_binding_identifier()?)
        } else {
            None
        };
        let function = self.parse_function_rest(name)?;
        Ok(Expr::Function(Box::new(function)))
    }

    /// A template literal, starting at its first token. Substitutions are
    /// parsed as ordinary expressions; each `}` closing one is rescanned as
    /// template text.
    fn parse_template_expression(&mut self) -> ParseResult<Expr> {
        if self.is_token(SyntaxKind::NoSubstitutionTemplateLiteral) {
            let quasi = template_text(self.token_text(), 1, 1);
            self.next_token();
            return Ok(Expr::Template(Template {
                quasis: vec![quasi],
                exprs: Vec::new(),
            }));
        }

        let mut quasis = vec![template_text(self.token_text(), 1, 2)];
        let mut exprs = Vec::new();
        loop {
            self.next_token();
            exprs.push(self.allowing_in(Self::parse_expression)?);
            if !self.is_token(SyntaxKind::CloseBraceToken) {
                return Err(self.error_at_current_token(
                    "'}' expected.".to_string(),
                    diagnostic_codes::EXPECTED_TOKEN,
                ));
            }
            self.current_token = self.scanner.rescan_template_continuation();
            match self.token() {
                SyntaxKind::TemplateMiddle => quasis.push(template_text(self.token_text(), 1, 2)),
                SyntaxKind::TemplateTail => {
                    quasis.push(template_text(self.token_text(), 1, 1));
                    self.next_token();
                    return Ok(Expr::Template(Template { quasis, exprs }));
                }
                _ => {
                    return Err(self.error_at_current_token(
                        "Unterminated template literal.".to_string(),
                        diagnostic_codes::UNTERMINATED_TEMPLATE_LITERAL,
                    ));
                }
            }
        }
    }

    /// `[a, , ...b]`
    fn parse_array_literal(&mut self) -> ParseResult<Expr> {
        self.parse_expected(SyntaxKind::OpenBracketToken)?;
        self.allowing_in(|p| {
            let mut elements = Vec::new();
            while !p.is_token(SyntaxKind::CloseBracketToken) {
                if p.parse_optional(SyntaxKind::CommaToken) {
                    elements.push(None);
                    continue;
                }
                elements.push(Some(p.parse_spread_or_assignment()?));
                if !p.is_token(SyntaxKind::CloseBracketToken) {
                    p.parse_expected(SyntaxKind::CommaToken)?;
                }
            }
            p.parse_expected(SyntaxKind::CloseBracketToken)?;
            Ok(Expr::Array(elements))
        })
    }

    /// `{ a, b: 1, [k]: v, ...rest }`
    fn parse_object_literal(&mut self) -> ParseResult<Expr> {
        self.parse_expected(SyntaxKind::OpenBraceToken)?;
        self.allowing_in(|p| {
            let mut properties = Vec::new();
            while !p.is_token(SyntaxKind::CloseBraceToken) {
                properties.push(p.parse_object_literal_element()?);
                if !p.is_token(SyntaxKind::CloseBraceToken) {
                    p.parse_expected(SyntaxKind::CommaToken)?;
                }
            }
            p.parse_expected(SyntaxKind::CloseBraceToken)?;
            Ok(Expr::Object(properties))
        })
    }

    fn parse_object_literal_element(&mut self) -> ParseResult<Property> {
        if self.parse_optional(SyntaxKind::DotDotDotToken) {
            return Ok(Property::Spread(self.parse_assignment_expression()?));
        }
        if self.is_token(SyntaxKind::AsteriskToken) {
            return Err(self.unsupported("Generator method"));
        }

        let is_plain_identifier = self.is_token(SyntaxKind::Identifier);
        let is_accessor_word =
            is_plain_identifier && matches!(self.token_text(), "get" | "set" | "async");
        let key = self.parse_property_key()?;
        match self.token() {
            SyntaxKind::ColonToken => {
                self.next_token();
                let value = self.parse_assignment_expression()?;
                Ok(Property::KeyValue { key, value })
            }
            SyntaxKind::OpenParenToken => Err(self.unsupported("Method shorthand")),
            SyntaxKind::CommaToken | SyntaxKind::CloseBraceToken if is_plain_identifier => {
                match key {
                    PropertyKey::Identifier(name) => Ok(Property::Shorthand(name)),
                    _ => Err(self.identifier_expected()),
                }
            }
            _ if is_accessor_word => Err(self.unsupported("Accessor or async method")),
            _ => Err(self.error_at_current_token(
                "':' expected.".to_string(),
                diagnostic_codes::EXPECTED_TOKEN,
            )),
        }
    }

    /// Key of an object literal property or object binding pattern.
    pub(crate) fn parse_property_key(&mut self) -> ParseResult<PropertyKey> {
        let key = match self.token() {
            SyntaxKind::StringLiteral => PropertyKey::String(self.token_text().to_string()),
            SyntaxKind::NumericLiteral | SyntaxKind::BigIntLiteral => {
                PropertyKey::Number(self.token_text().to_string())
            }
            SyntaxKind::OpenBracketToken => {
                self.next_token();
                let expr = self.allowing_in(Self::parse_assignment_expression)?;
                self.parse_expected(SyntaxKind::CloseBracketToken)?;
                return Ok(PropertyKey::Computed(Box::new(expr)));
            }
            SyntaxKind::HashToken => return Err(self.unsupported("Private name")),
            kind if kind == SyntaxKind::Identifier || kind.is_keyword() => {
                PropertyKey::Identifier(self.token_text().to_string())
            }
            _ => {
                return Err(self.error_at_current_token(
                    "Property assignment expected.".to_string(),
                    diagnostic_codes::EXPECTED_TOKEN,
                ));
            }
        };
        self.next_token();
        Ok(key)
    }
}

fn assignment_operator(kind: SyntaxKind) -> Option<AssignOp> {
    let op = match kind {
        SyntaxKind::EqualsToken => AssignOp::Assign,
        SyntaxKind::PlusEqualsToken => AssignOp::Add,
        SyntaxKind::MinusEqualsToken => AssignOp::Sub,
        SyntaxKind::AsteriskEqualsToken => AssignOp::Mul,
        SyntaxKind::AsteriskAsteriskEqualsToken => AssignOp::Exp,
        SyntaxKind::SlashEqualsToken => AssignOp::Div,
        SyntaxKind::PercentEqualsToken => AssignOp::Mod,
        SyntaxKind::LessThanLessThanEqualsToken => AssignOp::Shl,
        SyntaxKind::GreaterThanGreaterThanEqualsToken => AssignOp::Shr,
        SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken => AssignOp::UShr,
        SyntaxKind::AmpersandEqualsToken => AssignOp::BitAnd,
        SyntaxKind::BarEqualsToken => AssignOp::BitOr,
        SyntaxKind::CaretEqualsToken => AssignOp::BitXor,
        SyntaxKind::AmpersandAmpersandEqualsToken => AssignOp::And,
        SyntaxKind::BarBarEqualsToken => AssignOp::Or,
        SyntaxKind::QuestionQuestionEqualsToken => AssignOp::Coalesce,
        _ => return None,
    };
    Some(op)
}

/// Raw text of a template piece without its `open`/`close` delimiter bytes.
fn template_text(token_text: &str, open: usize, close: usize) -> String {
    let end = token_text.len().saturating_sub(close);
    token_text.get(open..end).unwrap_or_default().to_string()
}
