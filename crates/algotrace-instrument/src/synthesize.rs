//! Log call construction.

use algotrace_parser::{Expr, Property, Stmt};

/// Builds `log_function({ a, b, ... });` statements.
#[derive(Clone, Debug)]
pub struct LogCallSynthesizer {
    log_function: String,
}

impl LogCallSynthesizer {
    pub fn new(log_function: impl Into<String>) -> Self {
        LogCallSynthesizer {
            log_function: log_function.into(),
        }
    }

    pub fn log_function(&self) -> &str {
        &self.log_function
    }

    /// One call statement whose single argument is an object literal with a
    /// shorthand property per name, in the given order.
    pub fn build(&self, visible_names: &[String]) -> Stmt {
        let properties = visible_names
            .iter()
            .map(|name| Property::Shorthand(name.clone()))
            .collect();
        Stmt::Expr(Expr::call(
            Expr::ident(self.log_function.as_str()),
            vec![Expr::object(properties)],
        ))
    }

    /// True if `stmt` is a call this synthesizer would build.
    pub fn is_log_call(&self, stmt: &Stmt) -> bool {
        let Stmt::Expr(Expr::Call {
            callee,
            args,
            optional: false,
        }) = stmt
        else {
            return false;
        };
        matches!(callee.as_ref(), Expr::Identifier(name) if *name == self.log_function)
            && matches!(args.as_slice(), [Expr::Object(properties)]
                if properties.iter().all(|p| matches!(p, Property::Shorthand(_))))
    }
}

#[cfg(test)]
#[path = "../tests/synthesize_tests.rs"]
mod tests;
