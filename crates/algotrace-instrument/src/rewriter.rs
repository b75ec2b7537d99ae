//! The instrumentation pass.
//!
//! One walk over the tree. Scopes are pushed and popped as blocks (and the
//! few non-block binding constructs) are entered and left. Every loop body
//! that is a block is rebuilt as `[Log, s1, Log, s2, ..., sN, Log]`.
//! Injected calls are never walked, so no block is rewritten twice.

use algotrace_parser::visit::{walk_arrow, walk_block, walk_declarator, walk_stmt, walk_switch_case};
use algotrace_parser::{
    Arrow, ArrowBody, Block, BlockOwner, Declarator, LoopKind, Program, Stmt, SwitchCase, VisitMut,
};
use serde::Serialize;
use tracing::debug;

use crate::options::VisibilityPolicy;
use crate::scope::{ScopeKind, ScopeTracker};
use crate::synthesize::LogCallSynthesizer;

/// Counters for one instrumentation run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentStats {
    /// Loop bodies rewritten.
    pub loop_bodies: usize,
    /// Log calls injected across all bodies.
    pub log_calls: usize,
}

pub struct LoopRewriter<'a> {
    scopes: ScopeTracker,
    synthesizer: &'a LogCallSynthesizer,
    policy: VisibilityPolicy,
    stats: InstrumentStats,
}

impl<'a> LoopRewriter<'a> {
    pub fn new(
        synthesizer: &'a LogCallSynthesizer,
        ambient_names: &[String],
        policy: VisibilityPolicy,
    ) -> Self {
        LoopRewriter {
            scopes: ScopeTracker::new(ambient_names.iter().cloned()),
            synthesizer,
            policy,
            stats: InstrumentStats::default(),
        }
    }

    /// Instrument every loop body in `program`.
    pub fn run(mut self, program: &mut Program) -> InstrumentStats {
        self.scopes.hoist_lexical(&program.statements);
        self.visit_program(program);
        debug_assert_eq!(self.scopes.depth(), 1, "unbalanced scope stack");
        self.stats
    }

    /// Rebuild a loop body with a log call before, between and after its
    /// statements. Nested statements are walked first so inner loops see
    /// the declarations that precede them.
    fn rewrite_loop_body(&mut self, block: &mut Block, kind: LoopKind) {
        debug_assert_eq!(self.scopes.innermost_kind(), ScopeKind::Block);
        let original = std::mem::take(&mut block.statements);
        let original_len = original.len();
        let entry_names = self.scopes.visible_names();

        debug!(
            ?kind,
            statements = original_len,
            names = %entry_names.join(", "),
            "instrumenting loop body"
        );

        let entry_log = self.synthesizer.build(&entry_names);
        debug_assert!(self.synthesizer.is_log_call(&entry_log));
        let mut statements = Vec::with_capacity(2 * original_len + 1);
        statements.push(entry_log.clone());
        for mut stmt in original {
            self.visit_stmt(&mut stmt);
            statements.push(stmt);
            let log = match self.policy {
                VisibilityPolicy::BlockEntry => entry_log.clone(),
                VisibilityPolicy::Progressive => {
                    self.synthesizer.build(&self.scopes.visible_names())
                }
            };
            statements.push(log);
        }
        block.statements = statements;

        self.stats.loop_bodies += 1;
        self.stats.log_calls += original_len + 1;
    }
}

impl VisitMut for LoopRewriter<'_> {
    fn visit_stmt(&mut self, stmt: &mut Stmt) {
        // Head bindings of counted and iteration loops live between the
        // enclosing block and the body.
        if matches!(stmt, Stmt::For(_) | Stmt::ForIn(_) | Stmt::ForOf(_)) {
            self.scopes.enter_scope(ScopeKind::LoopHead);
            walk_stmt(self, stmt);
            self.scopes.leave_block();
        } else {
            walk_stmt(self, stmt);
        }
    }

    fn visit_block(&mut self, block: &mut Block, owner: BlockOwner<'_>) {
        self.scopes.enter_block(owner);
        self.scopes.hoist_lexical(&block.statements);
        match owner {
            BlockOwner::Loop(kind) => self.rewrite_loop_body(block, kind),
            BlockOwner::Function(_) | BlockOwner::Catch(_) | BlockOwner::Other => {
                walk_block(self, block);
            }
        }
        self.scopes.leave_block();
    }

    fn visit_switch_case(&mut self, case: &mut SwitchCase) {
        self.scopes.enter_scope(ScopeKind::SwitchCase);
        self.scopes.hoist_lexical(&case.body);
        walk_switch_case(self, case);
        self.scopes.leave_block();
    }

    fn visit_declarator(&mut self, declarator: &mut Declarator) {
        walk_declarator(self, declarator);
        self.scopes.declare_pattern(&declarator.target);
    }

    fn visit_arrow(&mut self, arrow: &mut Arrow) {
        // Block bodies are seeded through `visit_block`.
        if matches!(arrow.body, ArrowBody::Expr(_)) {
            self.scopes.enter_scope(ScopeKind::ArrowExpression);
            self.scopes.declare_params(&arrow.params);
            walk_arrow(self, arrow);
            self.scopes.leave_block();
        } else {
            walk_arrow(self, arrow);
        }
    }
}

#[cfg(test)]
#[path = "../tests/rewriter_tests.rs"]
mod tests;
