//! Entry points: parse, rewrite, print.
//!
//! Each call builds its own tree and scope stack, so one `Instrumenter` can
//! serve any number of threads.

use algotrace_emitter::Printer;
use algotrace_parser::parse_source;
use tracing::warn;

use crate::error::InstrumentError;
use crate::options::{InstrumentOptions, OptionsError};
use crate::rewriter::{InstrumentStats, LoopRewriter};
use crate::synthesize::LogCallSynthesizer;

/// File name used in diagnostics when the caller does not supply one.
pub const DEFAULT_FILE_NAME: &str = "input.js";

/// Successful instrumentation output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instrumented {
    pub code: String,
    pub stats: InstrumentStats,
}

#[derive(Clone, Debug)]
pub struct Instrumenter {
    options: InstrumentOptions,
    synthesizer: LogCallSynthesizer,
}

impl Default for Instrumenter {
    fn default() -> Self {
        let options = InstrumentOptions::default();
        Instrumenter {
            synthesizer: LogCallSynthesizer::new(options.log_function.as_str()),
            options,
        }
    }
}

impl Instrumenter {
    pub fn new(options: InstrumentOptions) -> Result<Self, OptionsError> {
        options.validate()?;
        Ok(Instrumenter {
            synthesizer: LogCallSynthesizer::new(options.log_function.as_str()),
            options,
        })
    }

    pub fn options(&self) -> &InstrumentOptions {
        &self.options
    }

    /// Instrument `source`, or return it unchanged if it does not parse.
    pub fn instrument(&self, source: &str) -> String {
        self.instrument_file(DEFAULT_FILE_NAME, source)
    }

    /// Like [`Instrumenter::instrument`], naming `file_name` in the logged diagnostic.
    pub fn instrument_file(&self, file_name: &str, source: &str) -> String {
        match self.try_instrument_file(file_name, source) {
            Ok(instrumented) => instrumented.code,
            Err(InstrumentError::Parse { file, diagnostic }) => {
                warn!(
                    file = %file,
                    code = diagnostic.code,
                    start = diagnostic.start,
                    message = %diagnostic.message,
                    "source did not parse; returning it unchanged"
                );
                source.to_string()
            }
        }
    }

    pub fn try_instrument(&self, source: &str) -> Result<Instrumented, InstrumentError> {
        self.try_instrument_file(DEFAULT_FILE_NAME, source)
    }

    #[tracing::instrument(level = "debug", skip_all, fields(file = file_name, bytes = source.len()))]
    pub fn try_instrument_file(
        &self,
        file_name: &str,
        source: &str,
    ) -> Result<Instrumented, InstrumentError> {
        let mut program =
            parse_source(file_name, source).map_err(|diagnostic| InstrumentError::Parse {
                file: file_name.to_string(),
                diagnostic,
            })?;

        let stats = LoopRewriter::new(
            &self.synthesizer,
            &self.options.ambient_names,
            self.options.visibility,
        )
        .run(&mut program);

        let mut printer = Printer::with_capacity(self.options.printer_options(), source.len() * 2);
        printer.emit_program(&program);
        Ok(Instrumented {
            code: printer.take_output(),
            stats,
        })
    }
}

#[cfg(test)]
#[path = "../tests/driver_tests.rs"]
mod tests;
