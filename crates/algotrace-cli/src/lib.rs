//! Command-line front end for the algotrace instrumenter.
//!
//! This crate provides:
//! - `args` - Command-line arguments (clap)
//! - `config` - `algotrace.json` discovery and option merging
//! - `driver` - Input collection and parallel instrumentation
//! - `reporter` - Diagnostic rendering (pretty or JSON)
//! - `tracing_config` - Opt-in `tracing` subscriber setup

pub mod args;
pub mod config;
pub mod driver;
pub mod reporter;
pub mod tracing_config;
