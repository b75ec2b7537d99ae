//! Instrumentation errors.

use algotrace_common::Diagnostic;
use algotrace_parser::ParseDiagnostic;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InstrumentError {
    /// The source could not be parsed. Nothing was rewritten.
    #[error("{file}: {diagnostic}")]
    Parse {
        file: String,
        #[source]
        diagnostic: ParseDiagnostic,
    },
}

impl InstrumentError {
    pub fn file(&self) -> &str {
        match self {
            Self::Parse { file, .. } => file,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::from(self.clone())
    }
}

impl From<InstrumentError> for Diagnostic {
    fn from(err: InstrumentError) -> Self {
        match err {
            InstrumentError::Parse { file, diagnostic } => diagnostic.into_diagnostic(file),
        }
    }
}
