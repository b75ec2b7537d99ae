//! Diagnostic logging for the `algotrace` binary.
//!
//! Logging is off unless `ALGOTRACE_LOG` (or `RUST_LOG`) holds a filter.
//! Everything goes to stderr; stdout only ever carries instrumented code, so
//! `algotrace < in.js > out.js` stays clean with logging on.
//!
//! | level   | what is logged                                          |
//! |---------|---------------------------------------------------------|
//! | `warn`  | inputs left unchanged, with the parse error              |
//! | `info`  | one summary per run (files, failures, bodies, calls)     |
//! | `debug` | one event per rewritten loop body, inside a file span    |
//!
//! `ALGOTRACE_LOG_FORMAT` picks the layout: `text` (default), `tree` (file
//! spans with their loop bodies indented below) or `json` (one object per
//! line, for collecting runs over a corpus).
//!
//! ```bash
//! ALGOTRACE_LOG=warn algotrace lessons/ --out-dir build/
//! ALGOTRACE_LOG=algotrace_instrument=debug ALGOTRACE_LOG_FORMAT=tree algotrace sort.js
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

const LOG_ENV: &str = "ALGOTRACE_LOG";
const FORMAT_ENV: &str = "ALGOTRACE_LOG_FORMAT";

/// Layout of log lines on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Tree,
    Json,
}

impl LogFormat {
    /// Unrecognised values fall back to `Text`.
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("tree") {
            Self::Tree
        } else if value.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Logging settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// Filter directives; `None` leaves logging off.
    pub filter: Option<String>,
    pub format: LogFormat,
}

impl LogSettings {
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// `ALGOTRACE_LOG` wins over `RUST_LOG`.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        LogSettings {
            filter: var(LOG_ENV).or_else(|| var(EnvFilter::DEFAULT_ENV)),
            format: var(FORMAT_ENV).map_or(LogFormat::Text, |value| LogFormat::parse(&value)),
        }
    }

    /// Install the global subscriber. Does nothing when no filter is set.
    pub fn install(self) {
        let Some(directives) = self.filter else {
            return;
        };
        let filter = EnvFilter::builder().parse_lossy(directives);
        let registry = Registry::default().with(filter);

        match self.format {
            LogFormat::Text => registry
                .with(fmt::layer().with_writer(std::io::stderr))
                .init(),
            LogFormat::Json => registry
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init(),
            LogFormat::Tree => registry
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_writer(std::io::stderr)
                        .with_targets(true)
                        .with_deferred_spans(true),
                )
                .init(),
        }
    }
}

/// Read the logging settings and install them.
pub fn init_tracing() {
    LogSettings::from_env().install();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(vars: &[(&str, &str)]) -> LogSettings {
        LogSettings::from_vars(|name| {
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value).to_string())
        })
    }

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("tree"), LogFormat::Tree);
        assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::parse("text"), LogFormat::Text);
        assert_eq!(LogFormat::parse("yaml"), LogFormat::Text);
    }

    #[test]
    fn test_logging_is_off_without_a_filter() {
        assert_eq!(
            settings(&[("ALGOTRACE_LOG_FORMAT", "json")]),
            LogSettings {
                filter: None,
                format: LogFormat::Json,
            }
        );
    }

    #[test]
    fn test_algotrace_log_wins_over_rust_log() {
        let both = settings(&[("RUST_LOG", "info"), ("ALGOTRACE_LOG", "debug")]);
        assert_eq!(both.filter.as_deref(), Some("debug"));
        let fallback = settings(&[("RUST_LOG", "warn")]);
        assert_eq!(fallback.filter.as_deref(), Some("warn"));
        assert_eq!(fallback.format, LogFormat::Text);
    }
}
