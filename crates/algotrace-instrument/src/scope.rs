//! Lexical scope stack for the instrumentation walk.
//!
//! Scopes follow the walk with strict push/pop discipline. The root scope sits
//! at the bottom, holds the ambient names and is never popped.
//!
//! A `let` or `const` is in its temporal dead zone from the start of its block
//! until the declaration runs, and it hides any outer binding of the same name
//! for that whole stretch. `hoist_lexical` records those names up front so
//! `visible_names` can leave them out until they are declared.

use algotrace_parser::{BlockOwner, Param, Pattern, Stmt, VarKind, param_names};
use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;
use smallvec::SmallVec;

/// Names declared in one scope, in declaration order.
type NameSet = IndexSet<String, FxBuildHasher>;

/// What pushed a scope.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScopeKind {
    /// Bottom of the stack, seeded with ambient names.
    Root,
    /// A `{ ... }` block: function, loop, catch or plain block body.
    Block,
    /// Head of a `for`, `for-in` or `for-of` loop.
    LoopHead,
    /// One `case` or `default` clause of a `switch`.
    SwitchCase,
    /// Parameters of an arrow function whose body is an expression.
    ArrowExpression,
}

#[derive(Debug)]
struct Scope {
    kind: ScopeKind,
    names: NameSet,
    /// Lexical names of this scope whose declaration has not run yet.
    pending: NameSet,
}

impl Scope {
    fn new(kind: ScopeKind) -> Self {
        Scope {
            kind,
            names: NameSet::default(),
            pending: NameSet::default(),
        }
    }

    fn binds(&self, name: &str) -> bool {
        self.names.contains(name) || self.pending.contains(name)
    }
}

#[derive(Debug)]
pub struct ScopeTracker {
    scopes: SmallVec<[Scope; 8]>,
}

impl ScopeTracker {
    pub fn new<I, S>(ambient_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut root = Scope::new(ScopeKind::Root);
        root.names.extend(ambient_names.into_iter().map(Into::into));
        let mut scopes = SmallVec::new();
        scopes.push(root);
        ScopeTracker { scopes }
    }

    /// Push the scope of a block. Function bodies are seeded with the names
    /// their parameters bind, catch bodies with the catch binding.
    pub fn enter_block(&mut self, owner: BlockOwner<'_>) {
        self.enter_scope(ScopeKind::Block);
        match owner {
            BlockOwner::Function(params) => self.declare_params(params),
            BlockOwner::Catch(Some(pattern)) => self.declare_pattern(pattern),
            BlockOwner::Catch(None) | BlockOwner::Loop(_) | BlockOwner::Other => {}
        }
    }

    /// Push an empty scope that does not belong to a block.
    pub fn enter_scope(&mut self, kind: ScopeKind) {
        self.scopes.push(Scope::new(kind));
    }

    /// Pop the innermost scope, whatever pushed it.
    ///
    /// # Panics
    ///
    /// Panics if only the root scope is left.
    pub fn leave_block(&mut self) {
        assert!(
            self.scopes.len() > 1,
            "leave_block called with only the root scope on the stack"
        );
        self.scopes.pop();
    }

    /// Add `name` to the innermost scope.
    pub fn declare(&mut self, name: impl Into<String>) {
        if let Some(scope) = self.scopes.last_mut() {
            let name = name.into();
            scope.pending.shift_remove(&name);
            scope.names.insert(name);
        }
    }

    /// Record the `let` and `const` names that `statements` declare directly,
    /// ahead of walking them. Until `declare` runs for one of them, it is not
    /// visible and neither is any outer name it shadows.
    pub fn hoist_lexical(&mut self, statements: &[Stmt]) {
        let Some(scope) = self.scopes.last_mut() else {
            return;
        };
        for stmt in statements {
            let Stmt::Var(decl) = stmt else {
                continue;
            };
            if decl.kind == VarKind::Var {
                continue;
            }
            for declarator in &decl.declarators {
                for name in declarator.target.bound_names() {
                    if !scope.names.contains(&name) {
                        scope.pending.insert(name);
                    }
                }
            }
        }
    }

    pub fn declare_pattern(&mut self, pattern: &Pattern) {
        for name in pattern.bound_names() {
            self.declare(name);
        }
    }

    pub fn declare_params(&mut self, params: &[Param]) {
        for name in param_names(params) {
            self.declare(name);
        }
    }

    /// Union of every scope on the stack, each name once. Outer scopes come
    /// first; within a scope, names keep declaration order. A name whose
    /// innermost binding is still pending is left out.
    pub fn visible_names(&self) -> Vec<String> {
        let mut visible = NameSet::default();
        for scope in &self.scopes {
            for name in &scope.names {
                if !visible.contains(name) && !self.in_dead_zone(name) {
                    visible.insert(name.clone());
                }
            }
        }
        visible.into_iter().collect()
    }

    fn in_dead_zone(&self, name: &str) -> bool {
        self.scopes
            .iter()
            .rev()
            .find(|scope| scope.binds(name))
            .is_some_and(|scope| !scope.names.contains(name))
    }

    /// Number of scopes on the stack, including the root.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    pub fn innermost_kind(&self) -> ScopeKind {
        self.scopes.last().map_or(ScopeKind::Root, |scope| scope.kind)
    }
}

#[cfg(test)]
#[path = "../tests/scope_tests.rs"]
mod tests;
