use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use algotrace::{NewLineKind, VisibilityPolicy};

/// CLI arguments for the algotrace binary.
#[derive(Parser, Debug)]
#[command(
    name = "algotrace",
    version,
    about = "Instrument loop bodies with calls that log the variables in scope"
)]
pub struct CliArgs {
    /// Files or directories to instrument. Directories are searched for `*.js`
    /// files. Reads standard input when no path is given.
    #[arg(value_name = "PATHS")]
    pub paths: Vec<PathBuf>,

    /// Path to algotrace.json or a directory containing it.
    #[arg(short = 'p', long = "project")]
    pub project: Option<PathBuf>,

    // ==================== Instrumentation ====================
    /// Name of the function every injected call invokes.
    #[arg(long = "log-function", value_name = "NAME")]
    pub log_function: Option<String>,

    /// Names the runtime always defines; they are logged by every call.
    #[arg(long = "ambient", value_delimiter = ',', value_name = "NAMES")]
    pub ambient: Option<Vec<String>>,

    /// When the logged variable set of a loop body is computed.
    #[arg(long, value_enum)]
    pub visibility: Option<Visibility>,

    // ==================== Output ====================
    /// Spaces per indentation level in the generated code.
    #[arg(long = "indent-width", value_name = "N")]
    pub indent_width: Option<usize>,

    /// Line terminator of the generated code.
    #[arg(long = "new-line", value_enum)]
    pub new_line: Option<NewLine>,

    /// Write each instrumented file into this directory, keeping its file name.
    #[arg(long = "out-dir", value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Exit with status 1 if any input fails to parse.
    #[arg(long)]
    pub strict: bool,

    /// How parse failures are reported on stderr.
    #[arg(long, value_enum, default_value_t = DiagnosticsFormat::Pretty)]
    pub diagnostics: DiagnosticsFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Visibility {
    /// Compute the set once, on entry to the loop body.
    BlockEntry,
    /// Recompute the set before every injected call.
    Progressive,
}

impl From<Visibility> for VisibilityPolicy {
    fn from(value: Visibility) -> Self {
        match value {
            Visibility::BlockEntry => VisibilityPolicy::BlockEntry,
            Visibility::Progressive => VisibilityPolicy::Progressive,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum NewLine {
    Lf,
    Crlf,
}

impl From<NewLine> for NewLineKind {
    fn from(value: NewLine) -> Self {
        match value {
            NewLine::Lf => NewLineKind::Lf,
            NewLine::Crlf => NewLineKind::Crlf,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum DiagnosticsFormat {
    /// `file(line,col): error AT<code>: message`
    Pretty,
    /// One JSON object per diagnostic.
    Json,
}

#[cfg(test)]
#[path = "../tests/args_tests.rs"]
mod tests;
