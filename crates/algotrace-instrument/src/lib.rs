//! Loop-body instrumentation.
//!
//! This crate provides:
//! - `ScopeTracker` - Lexical scope stack with ambient root names
//! - `LogCallSynthesizer` - Builds the injected `__trace({ ... })` statements
//! - `LoopRewriter` - The single-walk pass that rewrites loop bodies
//! - `Instrumenter` - Parse, rewrite and print, falling back to the input on failure

pub mod options;
pub use options::{DEFAULT_LOG_FUNCTION, InstrumentOptions, OptionsError, VisibilityPolicy};

pub mod scope;
pub use scope::{ScopeKind, ScopeTracker};

pub mod synthesize;
pub use synthesize::LogCallSynthesizer;

pub mod rewriter;
pub use rewriter::{InstrumentStats, LoopRewriter};

pub mod error;
pub use error::InstrumentError;

pub mod driver;
pub use driver::{DEFAULT_FILE_NAME, Instrumented, Instrumenter};
