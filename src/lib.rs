//! algotrace - loop-state instrumentation for algorithm visualizations.
//!
//! Rewrites every braced loop body of a script so that a call to a tracing
//! function runs before, between and after its statements. Each call receives
//! an object holding the variables in scope at that point:
//!
//! ```text
//! let sum = 0;                 let sum = 0;
//! for (const x of xs) {        for (const x of xs) {
//!     sum += x;         =>         __trace({ sum, x });
//! }                                sum += x;
//!                                  __trace({ sum, x });
//!                              }
//! ```
//!
//! Source that does not parse is returned unchanged.

pub use algotrace_common as common;
pub use algotrace_emitter as emitter;
pub use algotrace_instrument as instrument_pass;
pub use algotrace_parser as parser;
pub use algotrace_scanner as scanner;

pub use algotrace_common::{Diagnostic, DiagnosticCategory, NewLineKind};
pub use algotrace_instrument::{
    DEFAULT_LOG_FUNCTION, InstrumentError, InstrumentOptions, InstrumentStats, Instrumented,
    Instrumenter, OptionsError, VisibilityPolicy,
};

/// Instrument `source` with the default options.
///
/// Returns `source` unchanged if it does not parse; the parse error is
/// reported through `tracing` at `warn` level.
pub fn instrument(source: &str) -> String {
    Instrumenter::default().instrument(source)
}
