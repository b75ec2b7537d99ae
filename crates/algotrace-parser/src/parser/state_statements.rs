//! Parser state - statement and declaration parsing methods

use super::node::{
    Block, CatchClause, Declarator, DoWhileStmt, Expr, ForEachStmt, ForHead, ForInit, ForStmt,
    Function, IfStmt, LabeledStmt, Stmt, SwitchCase, SwitchStmt, TryStmt, VarDecl, VarKind,
    WhileStmt,
};
use super::state::{ParseResult, ParserState};
use algotrace_common::diagnostics::{diagnostic_codes, format_message};
use algotrace_scanner::SyntaxKind;

impl ParserState {
    // =========================================================================
    // Statements
    // =========================================================================

    pub(crate) fn parse_statement(&mut self) -> ParseResult<Stmt> {
        self.guarded(Self::parse_statement_worker)
    }

    fn parse_statement_worker(&mut self) -> ParseResult<Stmt> {
        match self.token() {
            SyntaxKind::OpenBraceToken => Ok(Stmt::Block(self.parse_block()?)),
            SyntaxKind::SemicolonToken => {
                self.next_token();
                Ok(Stmt::Empty)
            }
            SyntaxKind::VarKeyword | SyntaxKind::LetKeyword | SyntaxKind::ConstKeyword => {
                let decl = self.parse_variable_declaration_list()?;
                self.parse_semicolon()?;
                Ok(Stmt::Var(decl))
            }
            SyntaxKind::FunctionKeyword => {
                Ok(Stmt::Function(self.parse_function_declaration()?))
            }
            SyntaxKind::IfKeyword => self.parse_if_statement(),
            SyntaxKind::ForKeyword => self.parse_for_statement(),
            SyntaxKind::WhileKeyword => self.parse_while_statement(),
            SyntaxKind::DoKeyword => self.parse_do_statement(),
            SyntaxKind::ReturnKeyword => self.parse_return_statement(),
            SyntaxKind::BreakKeyword | SyntaxKind::ContinueKeyword => {
                self.parse_break_or_continue_statement()
            }
            SyntaxKind::ThrowKeyword => self.parse_throw_statement(),
            SyntaxKind::TryKeyword => self.parse_try_statement(),
            SyntaxKind::SwitchKeyword => self.parse_switch_statement(),
            SyntaxKind::DebuggerKeyword => {
                self.next_token();
                self.parse_semicolon()?;
                Ok(Stmt::Debugger)
            }
            SyntaxKind::ClassKeyword => Err(self.unsupported("Class declaration")),
            SyntaxKind::ImportKeyword | SyntaxKind::ExportKeyword => {
                Err(self.unsupported("Module syntax"))
            }
            SyntaxKind::EnumKeyword => Err(self.unsupported("Enum declaration")),
            SyntaxKind::WithKeyword => Err(self.unsupported("'with' statement")),
            SyntaxKind::Identifier if self.is_async_function_start() => {
                Err(self.unsupported("Async function"))
            }
            SyntaxKind::Identifier if self.look_ahead(Self::next_is_colon) => {
                self.parse_labeled_statement()
            }
            SyntaxKind::CloseBraceToken => Err(self.error_at_current_token(
                "Declaration or statement expected.".to_string(),
                diagnostic_codes::DECLARATION_OR_STATEMENT_EXPECTED,
            )),
            _ => {
                let expr = self.parse_expression()?;
                self.parse_semicolon()?;
                Ok(Stmt::Expr(expr))
            }
        }
    }

    fn next_is_colon(&mut self) -> bool {
        self.next_token() == SyntaxKind::ColonToken
    }

    /// `async function` / `async (...) =>` / `async x =>` on one line.
    /// A call to a function named `async` is not a match.
    pub(crate) fn is_async_function_start(&mut self) -> bool {
        if !self.is_contextual("async") {
            return false;
        }
        self.look_ahead(|p| {
            let next = p.next_token();
            if p.has_preceding_line_break() {
                return false;
            }
            match next {
                SyntaxKind::FunctionKeyword | SyntaxKind::Identifier => true,
                SyntaxKind::OpenParenToken => p.scan_parenthesized_arrow_head(),
                _ => false,
            }
        })
    }

    pub(crate) fn parse_block(&mut self) -> ParseResult<Block> {
        self.parse_expected(SyntaxKind::OpenBraceToken)?;
        let statements = self.parse_statements()?;
        self.parse_expected(SyntaxKind::CloseBraceToken)?;
        Ok(Block::new(statements))
    }

    /// Statements up to (not including) the closing brace of a block.
    fn parse_statements(&mut self) -> ParseResult<Vec<Stmt>> {
        let mut statements = Vec::new();
        while !self.is_token(SyntaxKind::CloseBraceToken)
            && !self.is_token(SyntaxKind::EndOfFileToken)
        {
            statements.push(self.parse_statement()?);
        }
        Ok(statements)
    }

    /// Function bodies reset the `for`-head context.
    pub(crate) fn parse_function_body(&mut self) -> ParseResult<Block> {
        self.allowing_in(Self::parse_block)
    }

    // =========================================================================
    // Declarations
    // =========================================================================

    /// `var|let|const target [= init], ...` without the trailing semicolon.
    pub(crate) fn parse_variable_declaration_list(&mut self) -> ParseResult<VarDecl> {
        let kind = match self.token() {
            SyntaxKind::VarKeyword => VarKind::Var,
            SyntaxKind::LetKeyword => VarKind::Let,
            SyntaxKind::ConstKeyword => VarKind::Const,
            _ => {
                return Err(self.error_at_current_token(
                    "Variable declaration expected.".to_string(),
                    diagnostic_codes::DECLARATION_OR_STATEMENT_EXPECTED,
                ));
            }
        };
        self.next_token();

        let mut declarators = Vec::new();
        loop {
            let target = self.parse_binding_target()?;
            let init = if self.parse_optional(SyntaxKind::EqualsToken) {
                Some(self.parse_assignment_expression()?)
            } else {
                None
            };
            declarators.push(Declarator { target, init });
            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
        }
        Ok(VarDecl { kind, declarators })
    }

    fn parse_function_declaration(&mut self) -> ParseResult<Function> {
        self.parse_expected(SyntaxKind::FunctionKeyword)?;
        if self.is_token(SyntaxKind::AsteriskToken) {
            return Err(self.unsupported("Generator function"));
        }
        let name = self.parse_binding_identifier()?;
        self.parse_function_rest(Some(name))
    }

    /// Parameters and body of a function, after its name.
    pub(crate) fn parse_function_rest(&mut self, name: Option<String>) -> ParseResult<Function> {
        let params = self.parse_parameter_list()?;
        let body = self.parse_function_body()?;
        Ok(Function { name, params, body })
    }

    // =========================================================================
    // Control flow
    // =========================================================================

    fn parse_parenthesized_condition(&mut self) -> ParseResult<Expr> {
        self.parse_expected(SyntaxKind::OpenParenToken)?;
        let test = self.allowing_in(Self::parse_expression)?;
        self.parse_expected(SyntaxKind::CloseParenToken)?;
        Ok(test)
    }

    fn parse_if_statement(&mut self) -> ParseResult<Stmt> {
        self.parse_expected(SyntaxKind::IfKeyword)?;
        let test = self.parse_parenthesized_condition()?;
        let consequent = Box::new(self.parse_statement()?);
        let alternate = if self.parse_optional(SyntaxKind::ElseKeyword) {
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };
        Ok(Stmt::If(IfStmt {
            test,
            consequent,
            alternate,
        }))
    }

    fn parse_while_statement(&mut self) -> ParseResult<Stmt> {
        self.parse_expected(SyntaxKind::WhileKeyword)?;
        let test = self.parse_parenthesized_condition()?;
        let body = Box::new(self.parse_statement()?);
        Ok(Stmt::While(WhileStmt { test, body }))
    }

    fn parse_do_statement(&mut self) -> ParseResult<Stmt> {
        self.parse_expected(SyntaxKind::DoKeyword)?;
        let body = Box::new(self.parse_statement()?);
        self.parse_expected(SyntaxKind::WhileKeyword)?;
        let test = self.parse_parenthesized_condition()?;
        // The semicolon after `do ... while (x)` is always optional.
        self.parse_optional(SyntaxKind::SemicolonToken);
        Ok(Stmt::DoWhile(DoWhileStmt { body, test }))
    }

    fn parse_for_statement(&mut self) -> ParseResult<Stmt> {
        self.parse_expected(SyntaxKind::ForKeyword)?;
        if self.is_contextual("await") {
            return Err(self.unsupported("'for await' loop"));
        }
        self.parse_expected(SyntaxKind::OpenParenToken)?;

        let init = match self.token() {
            SyntaxKind::SemicolonToken => None,
            SyntaxKind::VarKeyword | SyntaxKind::LetKeyword | SyntaxKind::ConstKeyword => {
                let decl = self.disallowing_in(Self::parse_variable_declaration_list)?;
                if self.is_token(SyntaxKind::InKeyword) || self.is_contextual("of") {
                    return self.parse_for_each_rest(ForHead::Var(decl));
                }
                Some(ForInit::Var(decl))
            }
            _ => {
                let expr = self.disallowing_in(Self::parse_expression)?;
                if self.is_token(SyntaxKind::InKeyword) || self.is_contextual("of") {
                    return self.parse_for_each_rest(ForHead::Target(expr));
                }
                Some(ForInit::Expr(expr))
            }
        };

        self.parse_expected(SyntaxKind::SemicolonToken)?;
        let test = if self.is_token(SyntaxKind::SemicolonToken) {
            None
        } else {
            Some(self.allowing_in(Self::parse_expression)?)
        };
        self.parse_expected(SyntaxKind::SemicolonToken)?;
        let update = if self.is_token(SyntaxKind::CloseParenToken) {
            None
        } else {
            Some(self.allowing_in(Self::parse_expression)?)
        };
        self.parse_expected(SyntaxKind::CloseParenToken)?;
        let body = Box::new(self.parse_statement()?);

        Ok(Stmt::For(ForStmt {
            init,
            test,
            update,
            body,
        }))
    }

    /// Rest of `for (left in right) body` / `for (left of right) body`,
    /// positioned on the `in` / `of` token.
    fn parse_for_each_rest(&mut self, left: ForHead) -> ParseResult<Stmt> {
        match &left {
            ForHead::Var(decl) => {
                if decl.declarators.len() != 1 || decl.declarators[0].init.is_some() {
                    return Err(self.error_at_current_token(
                        "Only a single variable declaration without an initializer is allowed in a 'for-in' or 'for-of' statement.".to_string(),
                        diagnostic_codes::INVALID_ASSIGNMENT_TARGET,
                    ));
                }
            }
            ForHead::Target(expr) => {
                if !Self::is_valid_destructuring_target(expr) {
                    return Err(self.error_at_current_token(
                        "The left-hand side of a 'for-in' or 'for-of' statement must be a variable or a property access.".to_string(),
                        diagnostic_codes::INVALID_ASSIGNMENT_TARGET,
                    ));
                }
            }
        }

        let is_of = self.is_contextual("of");
        self.next_token();
        let right = if is_of {
            self.allowing_in(Self::parse_assignment_expression)?
        } else {
            self.allowing_in(Self::parse_expression)?
        };
        self.parse_expected(SyntaxKind::CloseParenToken)?;
        let body = Box::new(self.parse_statement()?);

        let stmt = ForEachStmt { left, right, body };
        Ok(if is_of {
            Stmt::ForOf(stmt)
        } else {
            Stmt::ForIn(stmt)
        })
    }

    fn parse_return_statement(&mut self) -> ParseResult<Stmt> {
        self.parse_expected(SyntaxKind::ReturnKeyword)?;
        let argument = if self.can_parse_semicolon() {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.parse_semicolon()?;
        Ok(Stmt::Return(argument))
    }

    fn parse_break_or_continue_statement(&mut self) -> ParseResult<Stmt> {
        let is_break = self.is_token(SyntaxKind::BreakKeyword);
        self.next_token();
        let label = if self.is_token(SyntaxKind::Identifier) && !self.has_preceding_line_break() {
            let label = self.token_text().to_string();
            self.next_token();
            Some(label)
        } else {
            None
        };
        self.parse_semicolon()?;
        Ok(if is_break {
            Stmt::Break(label)
        } else {
            Stmt::Continue(label)
        })
    }

    fn parse_throw_statement(&mut self) -> ParseResult<Stmt> {
        self.parse_expected(SyntaxKind::ThrowKeyword)?;
        if self.has_preceding_line_break() {
            return Err(self.error_at_current_token(
                "Line break not permitted here.".to_string(),
                diagnostic_codes::EXPRESSION_EXPECTED,
            ));
        }
        let argument = self.parse_expression()?;
        self.parse_semicolon()?;
        Ok(Stmt::Throw(argument))
    }

    fn parse_try_statement(&mut self) -> ParseResult<Stmt> {
        self.parse_expected(SyntaxKind::TryKeyword)?;
        let block = self.parse_block()?;

        let handler = if self.parse_optional(SyntaxKind::CatchKeyword) {
            let param = if self.parse_optional(SyntaxKind::OpenParenToken) {
                let pattern = self.parse_binding_target()?;
                self.parse_expected(SyntaxKind::CloseParenToken)?;
                Some(pattern)
            } else {
                None
            };
            let body = self.parse_block()?;
            Some(CatchClause { param, body })
        } else {
            None
        };

        let finalizer = if self.parse_optional(SyntaxKind::FinallyKeyword) {
            Some(self.parse_block()?)
        } else {
            None
        };

        if handler.is_none() && finalizer.is_none() {
            return Err(self.error_at_current_token(
                "'catch' or 'finally' expected.".to_string(),
                diagnostic_codes::EXPECTED_TOKEN,
            ));
        }

        Ok(Stmt::Try(TryStmt {
            block,
            handler,
            finalizer,
        }))
    }

    fn parse_switch_statement(&mut self) -> ParseResult<Stmt> {
        self.parse_expected(SyntaxKind::SwitchKeyword)?;
        let discriminant = self.parse_parenthesized_condition()?;
        self.parse_expected(SyntaxKind::OpenBraceToken)?;

        let mut cases = Vec::new();
        let mut seen_default = false;
        while !self.parse_optional(SyntaxKind::CloseBraceToken) {
            let test = match self.token() {
                SyntaxKind::CaseKeyword => {
                    self.next_token();
                    Some(self.allowing_in(Self::parse_expression)?)
                }
                SyntaxKind::DefaultKeyword if !seen_default => {
                    seen_default = true;
                    self.next_token();
                    None
                }
                SyntaxKind::DefaultKeyword => {
                    return Err(self.error_at_current_token(
                        "A 'default' clause cannot appear more than once in a 'switch' statement."
                            .to_string(),
                        diagnostic_codes::DECLARATION_OR_STATEMENT_EXPECTED,
                    ));
                }
                _ => {
                    return Err(self.error_at_current_token(
                        format_message("'{0}' expected.", &["case"]),
                        diagnostic_codes::EXPECTED_TOKEN,
                    ));
                }
            };
            self.parse_expected(SyntaxKind::ColonToken)?;

            let mut body = Vec::new();
            while !matches!(
                self.token(),
                SyntaxKind::CaseKeyword
                    | SyntaxKind::DefaultKeyword
                    | SyntaxKind::CloseBraceToken
                    | SyntaxKind::EndOfFileToken
            ) {
                body.push(self.parse_statement()?);
            }
            cases.push(SwitchCase { test, body });
        }

        Ok(Stmt::Switch(SwitchStmt {
            discriminant,
            cases,
        }))
    }

    fn parse_labeled_statement(&mut self) -> ParseResult<Stmt> {
        let label = self.token_text().to_string();
        self.next_token();
        self.parse_expected(SyntaxKind::ColonToken)?;
        let body = Box::new(self.parse_statement()?);
        Ok(Stmt::Labeled(LabeledStmt { label, body }))
    }
}
