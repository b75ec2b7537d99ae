//! Statement emission.

use algotrace_parser::{
    Block, CatchClause, ForEachStmt, ForHead, ForInit, Function, IfStmt, Stmt, SwitchCase,
    TryStmt, VarDecl,
};

use super::Printer;

impl Printer {
    /// Emit one statement without a trailing new line.
    pub fn emit_statement(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Function(function) => self.emit_function(function),
            Stmt::Var(decl) => {
                self.emit_var_decl(decl);
                self.write(";");
            }
            Stmt::Expr(expr) => {
                self.emit_expression(expr);
                self.write(";");
            }
            Stmt::Block(block) => self.emit_block(block),
            Stmt::If(if_stmt) => self.emit_if(if_stmt),
            Stmt::For(for_stmt) => {
                self.write("for (");
                match &for_stmt.init {
                    Some(ForInit::Var(decl)) => self.emit_var_decl(decl),
                    Some(ForInit::Expr(expr)) => self.emit_expression(expr),
                    None => {}
                }
                self.write(";");
                if let Some(test) = &for_stmt.test {
                    self.write_space();
                    self.emit_expression(test);
                }
                self.write(";");
                if let Some(update) = &for_stmt.update {
                    self.write_space();
                    self.emit_expression(update);
                }
                self.write(")");
                self.emit_embedded_statement(&for_stmt.body);
            }
            Stmt::ForIn(each) => self.emit_for_each(each, "in"),
            Stmt::ForOf(each) => self.emit_for_each(each, "of"),
            Stmt::While(while_stmt) => {
                self.write("while (");
                self.emit_expression(&while_stmt.test);
                self.write(")");
                self.emit_embedded_statement(&while_stmt.body);
            }
            Stmt::DoWhile(do_while) => {
                self.write("do");
                self.emit_embedded_statement(&do_while.body);
                if matches!(do_while.body.as_ref(), Stmt::Block(_)) {
                    self.write_space();
                } else {
                    self.write_line();
                }
                self.write("while (");
                self.emit_expression(&do_while.test);
                self.write(");");
            }
            Stmt::Return(argument) => {
                self.write("return");
                if let Some(expr) = argument {
                    self.write_space();
                    self.emit_expression(expr);
                }
                self.write(";");
            }
            Stmt::Break(label) => self.emit_jump("break", label.as_deref()),
            Stmt::Continue(label) => self.emit_jump("continue", label.as_deref()),
            Stmt::Throw(expr) => {
                self.write("throw ");
                self.emit_expression(expr);
                self.write(";");
            }
            Stmt::Try(try_stmt) => self.emit_try(try_stmt),
            Stmt::Switch(switch) => {
                self.write("switch (");
                self.emit_expression(&switch.discriminant);
                self.write(") {");
                self.increase_indent();
                for case in &switch.cases {
                    self.write_line();
                    self.emit_switch_case(case);
                }
                self.decrease_indent();
                self.write_line();
                self.write("}");
            }
            Stmt::Labeled(labeled) => {
                self.write(&labeled.label);
                self.write(": ");
                self.emit_statement(&labeled.body);
            }
            Stmt::Debugger => self.write("debugger;"),
            Stmt::Empty => self.write(";"),
        }
    }

    /// `{`, one statement per line at the next indentation level, `}`.
    /// An empty block prints as `{}`.
    pub fn emit_block(&mut self, block: &Block) {
        self.write("{");
        if block.statements.is_empty() {
            self.write("}");
            return;
        }
        self.increase_indent();
        for stmt in &block.statements {
            self.write_line();
            self.emit_statement(stmt);
        }
        self.decrease_indent();
        self.write_line();
        self.write("}");
    }

    /// Body of `if`/`for`/`while`/`do`: a block stays on the header line, any
    /// other statement goes on its own indented line.
    fn emit_embedded_statement(&mut self, stmt: &Stmt) {
        if let Stmt::Block(block) = stmt {
            self.write_space();
            self.emit_block(block);
        } else {
            self.increase_indent();
            self.write_line();
            self.emit_statement(stmt);
            self.decrease_indent();
        }
    }

    pub(super) fn emit_var_decl(&mut self, decl: &VarDecl) {
        self.write(decl.kind.as_str());
        self.write_space();
        self.emit_comma_separated(&decl.declarators, |p, declarator| {
            p.emit_pattern(&declarator.target);
            if let Some(init) = &declarator.init {
                p.write(" = ");
                p.emit_expression(init);
            }
        });
    }

    /// `function name(params) { body }`, shared by declarations and expressions.
    pub(super) fn emit_function(&mut self, function: &Function) {
        self.write("function");
        if let Some(name) = &function.name {
            self.write_space();
            self.write(name);
        }
        self.emit_parameters(&function.params);
        self.write_space();
        self.emit_block(&function.body);
    }

    fn emit_if(&mut self, if_stmt: &IfStmt) {
        self.write("if (");
        self.emit_expression(&if_stmt.test);
        self.write(")");
        self.emit_embedded_statement(&if_stmt.consequent);

        let Some(alternate) = &if_stmt.alternate else {
            return;
        };
        if matches!(if_stmt.consequent.as_ref(), Stmt::Block(_)) {
            self.write(" else");
        } else {
            self.write_line();
            self.write("else");
        }
        if let Stmt::If(nested) = alternate.as_ref() {
            self.write_space();
            self.emit_if(nested);
        } else {
            self.emit_embedded_statement(alternate);
        }
    }

    fn emit_for_each(&mut self, each: &ForEachStmt, keyword: &str) {
        self.write("for (");
        match &each.left {
            ForHead::Var(decl) => self.emit_var_decl(decl),
            ForHead::Target(expr) => self.emit_expression(expr),
        }
        self.write_space();
        self.write(keyword);
        self.write_space();
        self.emit_expression(&each.right);
        self.write(")");
        self.emit_embedded_statement(&each.body);
    }

    fn emit_jump(&mut self, keyword: &str, label: Option<&str>) {
        self.write(keyword);
        if let Some(label) = label {
            self.write_space();
            self.write(label);
        }
        self.write(";");
    }

    fn emit_try(&mut self, try_stmt: &TryStmt) {
        self.write("try ");
        self.emit_block(&try_stmt.block);
        if let Some(CatchClause { param, body }) = &try_stmt.handler {
            self.write(" catch ");
            if let Some(pattern) = param {
                self.write("(");
                self.emit_pattern(pattern);
                self.write(") ");
            }
            self.emit_block(body);
        }
        if let Some(finalizer) = &try_stmt.finalizer {
            self.write(" finally ");
            self.emit_block(finalizer);
        }
    }

    fn emit_switch_case(&mut self, case: &SwitchCase) {
        match &case.test {
            Some(test) => {
                self.write("case ");
                self.emit_expression(test);
                self.write(":");
            }
            None => self.write("default:"),
        }
        self.increase_indent();
        for stmt in &case.body {
            self.write_line();
            self.emit_statement(stmt);
        }
        self.decrease_indent();
    }
}
