#![allow(clippy::print_stderr)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{IsTerminal, Read, Write};
use std::path::PathBuf;

use algotrace::Instrumenter;
use algotrace_cli::args::CliArgs;
use algotrace_cli::driver::{self, FileOutput, STDIN_FILE_NAME};
use algotrace_cli::reporter::Reporter;
use algotrace_cli::{config, tracing_config};

/// Exit status when `--strict` is set and an input failed to parse.
const EXIT_PARSE_FAILURE: i32 = 1;

fn main() -> Result<()> {
    // Initialize tracing if ALGOTRACE_LOG or RUST_LOG is set.
    tracing_config::init_tracing();

    let args = CliArgs::parse();
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;
    let options = config::resolve_options(&args, &cwd)?;
    let instrumenter = Instrumenter::new(options).context("invalid instrumentation options")?;
    let reporter = Reporter::new(args.diagnostics, std::io::stderr().is_terminal());

    let (files, print_to_stdout) = if args.paths.is_empty() {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("failed to read standard input")?;
        let output = driver::instrument_source(&instrumenter, PathBuf::from(STDIN_FILE_NAME), source);
        (vec![output], true)
    } else {
        let result = driver::run(&args, &cwd, &instrumenter)?;
        (result.files, args.out_dir.is_none())
    };

    let mut failures = 0;
    for file in &files {
        if report_failure(&reporter, file)? {
            failures += 1;
        }
    }

    if print_to_stdout {
        let mut stdout = std::io::stdout().lock();
        for file in &files {
            stdout
                .write_all(file.code.as_bytes())
                .context("failed to write standard output")?;
        }
        stdout.flush().context("failed to write standard output")?;
    }

    if args.strict && failures > 0 {
        std::process::exit(EXIT_PARSE_FAILURE);
    }
    Ok(())
}

/// Print the diagnostic of a failed file. Returns whether the file failed.
fn report_failure(reporter: &Reporter, file: &FileOutput) -> Result<bool> {
    let Some(error) = &file.error else {
        return Ok(false);
    };
    let line = reporter.format_diagnostic(&error.to_diagnostic(), &file.source)?;
    eprintln!("{line}");
    Ok(true)
}
