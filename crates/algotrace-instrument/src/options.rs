//! Instrumentation options.
//!
//! Options deserialize from camelCase JSON (`logFunction`, `ambientNames`,
//! `visibility`, `indentWidth`, `newLine`) with every field defaulted, so an
//! empty object is a complete configuration.

use algotrace_common::NewLineKind;
use algotrace_emitter::PrinterOptions;
use algotrace_scanner::is_valid_identifier;
use serde::Deserialize;
use thiserror::Error;

/// Default name of the function every injected call invokes.
pub const DEFAULT_LOG_FUNCTION: &str = "__trace";

/// When the visible variable set of a loop body is computed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VisibilityPolicy {
    /// Once, on entry to the loop body. Every call in the body logs the same names.
    #[default]
    BlockEntry,
    /// Before each injected call, so names declared earlier in the same body
    /// show up in the calls after their declaration.
    Progressive,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct InstrumentOptions {
    pub log_function: String,
    /// Names the runtime guarantees to exist. They seed the root scope and are
    /// logged by every call.
    pub ambient_names: Vec<String>,
    pub visibility: VisibilityPolicy,
    pub indent_width: usize,
    pub new_line: NewLineKind,
}

impl Default for InstrumentOptions {
    fn default() -> Self {
        InstrumentOptions {
            log_function: DEFAULT_LOG_FUNCTION.to_string(),
            ambient_names: Vec::new(),
            visibility: VisibilityPolicy::BlockEntry,
            indent_width: 4,
            new_line: NewLineKind::Lf,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum OptionsError {
    #[error("log function name `{0}` is not a valid identifier")]
    InvalidLogFunction(String),
    #[error("ambient name `{0}` is not a valid identifier")]
    InvalidAmbientName(String),
}

impl InstrumentOptions {
    /// Check that every configured name can appear in generated code.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !is_valid_identifier(&self.log_function) {
            return Err(OptionsError::InvalidLogFunction(self.log_function.clone()));
        }
        if let Some(name) = self.ambient_names.iter().find(|name| !is_valid_identifier(name)) {
            return Err(OptionsError::InvalidAmbientName(name.clone()));
        }
        Ok(())
    }

    pub const fn printer_options(&self) -> PrinterOptions {
        PrinterOptions {
            indent_width: self.indent_width,
            new_line: self.new_line,
        }
    }
}

#[cfg(test)]
#[path = "../tests/options_tests.rs"]
mod tests;
