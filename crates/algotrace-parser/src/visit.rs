//! Mutable tree walker.
//!
//! Implement [`VisitMut`] for a pass, override the methods it cares about and
//! call the matching `walk_*` function inside the override to keep recursing.
//! Omitting the walk call prunes traversal at that node.
//!
//! Blocks are visited together with their [`BlockOwner`], so a pass can tell a
//! loop body from a function body or a plain nested block without parent
//! pointers in the tree.

use crate::parser::node::*;

/// The syntactic loop form that owns a body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LoopKind {
    /// `for (init; test; update)`
    For,
    While,
    DoWhile,
    /// `for (key in object)`
    ForIn,
    /// `for (value of iterable)`
    ForOf,
}

impl LoopKind {
    pub const fn of(stmt: &Stmt) -> Option<Self> {
        match stmt {
            Stmt::For(_) => Some(Self::For),
            Stmt::While(_) => Some(Self::While),
            Stmt::DoWhile(_) => Some(Self::DoWhile),
            Stmt::ForIn(_) => Some(Self::ForIn),
            Stmt::ForOf(_) => Some(Self::ForOf),
            _ => None,
        }
    }
}

/// What a block is the body of.
#[derive(Clone, Copy, Debug)]
pub enum BlockOwner<'a> {
    /// Body of a function declaration, function expression or arrow function.
    Function(&'a [Param]),
    /// Body of a loop statement.
    Loop(LoopKind),
    /// Body of a `catch` clause, with its binding if present.
    Catch(Option<&'a Pattern>),
    /// A free-standing block, `if` branch, `try` block or `finally` block.
    Other,
}

/// In-place tree visitor. Default implementations recurse into all children.
pub trait VisitMut: Sized {
    fn visit_program(&mut self, program: &mut Program) {
        walk_program(self, program);
    }

    fn visit_stmt(&mut self, stmt: &mut Stmt) {
        walk_stmt(self, stmt);
    }

    fn visit_block(&mut self, block: &mut Block, owner: BlockOwner<'_>) {
        let _ = owner;
        walk_block(self, block);
    }

    fn visit_switch_case(&mut self, case: &mut SwitchCase) {
        walk_switch_case(self, case);
    }

    fn visit_declarator(&mut self, declarator: &mut Declarator) {
        walk_declarator(self, declarator);
    }

    fn visit_function(&mut self, function: &mut Function) {
        walk_function(self, function);
    }

    fn visit_arrow(&mut self, arrow: &mut Arrow) {
        walk_arrow(self, arrow);
    }

    fn visit_param(&mut self, param: &mut Param) {
        walk_binding_element(self, &mut param.binding);
    }

    fn visit_pattern(&mut self, pattern: &mut Pattern) {
        walk_pattern(self, pattern);
    }

    fn visit_expr(&mut self, expr: &mut Expr) {
        walk_expr(self, expr);
    }
}

// =============================================================================
// Walk functions
// =============================================================================

pub fn walk_program<V: VisitMut>(visitor: &mut V, program: &mut Program) {
    for stmt in &mut program.statements {
        visitor.visit_stmt(stmt);
    }
}

pub fn walk_block<V: VisitMut>(visitor: &mut V, block: &mut Block) {
    for stmt in &mut block.statements {
        visitor.visit_stmt(stmt);
    }
}

/// Loop bodies that are blocks are reported as such; a bare statement body
/// (`while (x) x--;`) is visited as an ordinary statement.
fn walk_loop_body<V: VisitMut>(visitor: &mut V, body: &mut Stmt, kind: LoopKind) {
    match body {
        Stmt::Block(block) => visitor.visit_block(block, BlockOwner::Loop(kind)),
        other => visitor.visit_stmt(other),
    }
}

fn walk_var_decl<V: VisitMut>(visitor: &mut V, decl: &mut VarDecl) {
    for declarator in &mut decl.declarators {
        visitor.visit_declarator(declarator);
    }
}

pub fn walk_stmt<V: VisitMut>(visitor: &mut V, stmt: &mut Stmt) {
    match stmt {
        Stmt::Function(function) => visitor.visit_function(function),
        Stmt::Var(decl) => walk_var_decl(visitor, decl),
        Stmt::Expr(expr) | Stmt::Throw(expr) => visitor.visit_expr(expr),
        Stmt::Return(argument) => {
            if let Some(expr) = argument {
                visitor.visit_expr(expr);
            }
        }
        Stmt::Block(block) => visitor.visit_block(block, BlockOwner::Other),
        Stmt::If(if_stmt) => {
            visitor.visit_expr(&mut if_stmt.test);
            visitor.visit_stmt(&mut if_stmt.consequent);
            if let Some(alternate) = &mut if_stmt.alternate {
                visitor.visit_stmt(alternate);
            }
        }
        Stmt::For(for_stmt) => {
            match &mut for_stmt.init {
                Some(ForInit::Var(decl)) => walk_var_decl(visitor, decl),
                Some(ForInit::Expr(expr)) => visitor.visit_expr(expr),
                None => {}
            }
            if let Some(test) = &mut for_stmt.test {
                visitor.visit_expr(test);
            }
            if let Some(update) = &mut for_stmt.update {
                visitor.visit_expr(update);
            }
            walk_loop_body(visitor, &mut for_stmt.body, LoopKind::For);
        }
        Stmt::ForIn(each) => walk_for_each(visitor, each, LoopKind::ForIn),
        Stmt::ForOf(each) => walk_for_each(visitor, each, LoopKind::ForOf),
        Stmt::While(while_stmt) => {
            visitor.visit_expr(&mut while_stmt.test);
            walk_loop_body(visitor, &mut while_stmt.body, LoopKind::While);
        }
        Stmt::DoWhile(do_while) => {
            walk_loop_body(visitor, &mut do_while.body, LoopKind::DoWhile);
            visitor.visit_expr(&mut do_while.test);
        }
        Stmt::Try(try_stmt) => {
            visitor.visit_block(&mut try_stmt.block, BlockOwner::Other);
            if let Some(CatchClause { param, body }) = &mut try_stmt.handler {
                if let Some(pattern) = param.as_mut() {
                    visitor.visit_pattern(pattern);
                }
                visitor.visit_block(body, BlockOwner::Catch(param.as_ref()));
            }
            if let Some(finalizer) = &mut try_stmt.finalizer {
                visitor.visit_block(finalizer, BlockOwner::Other);
            }
        }
        Stmt::Switch(switch) => {
            visitor.visit_expr(&mut switch.discriminant);
            for case in &mut switch.cases {
                visitor.visit_switch_case(case);
            }
        }
        Stmt::Labeled(labeled) => visitor.visit_stmt(&mut labeled.body),
        Stmt::Break(_) | Stmt::Continue(_) | Stmt::Debugger | Stmt::Empty => {}
    }
}

/// The iterated expression is walked before the head binding, matching
/// evaluation order: it runs while the binding does not exist yet.
fn walk_for_each<V: VisitMut>(visitor: &mut V, each: &mut ForEachStmt, kind: LoopKind) {
    visitor.visit_expr(&mut each.right);
    match &mut each.left {
        ForHead::Var(decl) => walk_var_decl(visitor, decl),
        ForHead::Target(expr) => visitor.visit_expr(expr),
    }
    walk_loop_body(visitor, &mut each.body, kind);
}

pub fn walk_switch_case<V: VisitMut>(visitor: &mut V, case: &mut SwitchCase) {
    if let Some(test) = &mut case.test {
        visitor.visit_expr(test);
    }
    for stmt in &mut case.body {
        visitor.visit_stmt(stmt);
    }
}

/// The initializer is walked before the target: it is evaluated before the
/// declared names are initialized.
pub fn walk_declarator<V: VisitMut>(visitor: &mut V, declarator: &mut Declarator) {
    if let Some(init) = &mut declarator.init {
        visitor.visit_expr(init);
    }
    visitor.visit_pattern(&mut declarator.target);
}

pub fn walk_function<V: VisitMut>(visitor: &mut V, function: &mut Function) {
    for param in &mut function.params {
        visitor.visit_param(param);
    }
    visitor.visit_block(&mut function.body, BlockOwner::Function(&function.params));
}

pub fn walk_arrow<V: VisitMut>(visitor: &mut V, arrow: &mut Arrow) {
    for param in &mut arrow.params {
        visitor.visit_param(param);
    }
    match &mut arrow.body {
        ArrowBody::Block(block) => visitor.visit_block(block, BlockOwner::Function(&arrow.params)),
        ArrowBody::Expr(expr) => visitor.visit_expr(expr),
    }
}

pub fn walk_binding_element<V: VisitMut>(visitor: &mut V, element: &mut BindingElement) {
    visitor.visit_pattern(&mut element.target);
    if let Some(default) = &mut element.default {
        visitor.visit_expr(default);
    }
}

pub fn walk_pattern<V: VisitMut>(visitor: &mut V, pattern: &mut Pattern) {
    match pattern {
        Pattern::Identifier(_) => {}
        Pattern::Array(array) => {
            for element in array.elements.iter_mut().flatten() {
                walk_binding_element(visitor, element);
            }
            if let Some(rest) = &mut array.rest {
                visitor.visit_pattern(rest);
            }
        }
        Pattern::Object(object) => {
            for prop in &mut object.properties {
                if let PropertyKey::Computed(key) = &mut prop.key {
                    visitor.visit_expr(key);
                }
                walk_binding_element(visitor, &mut prop.value);
            }
        }
    }
}

pub fn walk_expr<V: VisitMut>(visitor: &mut V, expr: &mut Expr) {
    match expr {
        Expr::Identifier(_)
        | Expr::This
        | Expr::Null
        | Expr::Bool(_)
        | Expr::Number(_)
        | Expr::String(_) => {}
        Expr::Template(template) => {
            for expr in &mut template.exprs {
                visitor.visit_expr(expr);
            }
        }
        Expr::Array(elements) => {
            for element in elements.iter_mut().flatten() {
                visitor.visit_expr(element);
            }
        }
        Expr::Object(properties) => {
            for prop in properties {
                match prop {
                    Property::KeyValue { key, value } => {
                        if let PropertyKey::Computed(key) = key {
                            visitor.visit_expr(key);
                        }
                        visitor.visit_expr(value);
                    }
                    Property::Shorthand(_) => {}
                    Property::Spread(expr) => visitor.visit_expr(expr),
                }
            }
        }
        Expr::Function(function) => visitor.visit_function(function),
        Expr::Arrow(arrow) => visitor.visit_arrow(arrow),
        Expr::Unary { arg, .. } | Expr::Update { arg, .. } => visitor.visit_expr(arg),
        Expr::Binary { left, right, .. } => {
            visitor.visit_expr(left);
            visitor.visit_expr(right);
        }
        Expr::Assign { target, value, .. } => {
            visitor.visit_expr(target);
            visitor.visit_expr(value);
        }
        Expr::Conditional {
            test,
            consequent,
            alternate,
        } => {
            visitor.visit_expr(test);
            visitor.visit_expr(consequent);
            visitor.visit_expr(alternate);
        }
        Expr::Call { callee, args, .. } => {
            visitor.visit_expr(callee);
            for arg in args {
                visitor.visit_expr(arg);
            }
        }
        Expr::New { callee, args } => {
            visitor.visit_expr(callee);
            for arg in args.iter_mut().flatten() {
                visitor.visit_expr(arg);
            }
        }
        Expr::Member { object, .. } => visitor.visit_expr(object),
        Expr::Index { object, index, .. } => {
            visitor.visit_expr(object);
            visitor.visit_expr(index);
        }
        Expr::Sequence(exprs) => {
            for expr in exprs {
                visitor.visit_expr(expr);
            }
        }
        Expr::Paren(inner) | Expr::Spread(inner) => visitor.visit_expr(inner),
    }
}

#[cfg(test)]
#[path = "../tests/visit_tests.rs"]
mod tests;
