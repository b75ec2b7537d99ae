//! File collection and parallel instrumentation.

use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use algotrace::{InstrumentError, InstrumentStats, Instrumented, Instrumenter};

use crate::args::CliArgs;

/// File name reported for source read from standard input.
pub const STDIN_FILE_NAME: &str = "<stdin>";

/// Worker stack size. Parsing recurses once per nesting level, up to the
/// parser's depth limit.
const WORKER_STACK_SIZE: usize = 16 * 1024 * 1024;

/// The result of instrumenting one input.
#[derive(Debug)]
pub struct FileOutput {
    /// Path as given or found on disk; `<stdin>` for standard input.
    pub path: PathBuf,
    pub source: String,
    /// Instrumented code, or `source` unchanged when it failed to parse.
    pub code: String,
    pub stats: InstrumentStats,
    pub error: Option<InstrumentError>,
}

impl FileOutput {
    pub fn failed(&self) -> bool {
        self.error.is_some()
    }
}

#[derive(Debug, Default)]
pub struct RunResult {
    /// One entry per input, in input order.
    pub files: Vec<FileOutput>,
    /// Files written under `--out-dir`.
    pub written: Vec<PathBuf>,
}

impl RunResult {
    pub fn failure_count(&self) -> usize {
        self.files.iter().filter(|file| file.failed()).count()
    }

    pub fn total_stats(&self) -> InstrumentStats {
        self.files
            .iter()
            .fold(InstrumentStats::default(), |total, file| InstrumentStats {
                loop_bodies: total.loop_bodies + file.stats.loop_bodies,
                log_calls: total.log_calls + file.stats.log_calls,
            })
    }
}

/// Instrument one in-memory source. A parse failure keeps the source as the
/// output and records the error.
pub fn instrument_source(instrumenter: &Instrumenter, path: PathBuf, source: String) -> FileOutput {
    let file_name = path.to_string_lossy();
    match instrumenter.try_instrument_file(&file_name, &source) {
        Ok(Instrumented { code, stats }) => FileOutput {
            path,
            source,
            code,
            stats,
            error: None,
        },
        Err(error) => {
            tracing::warn!(file = %file_name, %error, "leaving file unchanged");
            FileOutput {
                code: source.clone(),
                path,
                source,
                stats: InstrumentStats::default(),
                error: Some(error),
            }
        }
    }
}

/// Expand `paths` into the list of files to instrument. Files are taken as
/// given; directories are searched recursively for `*.js`, in sorted order.
pub fn collect_input_files(paths: &[PathBuf], cwd: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        let resolved = if path.is_absolute() {
            path.clone()
        } else {
            cwd.join(path)
        };
        if resolved.is_dir() {
            for entry in WalkDir::new(&resolved).follow_links(true).sort_by_file_name() {
                let entry = entry
                    .with_context(|| format!("failed to walk {}", resolved.display()))?;
                let candidate = entry.path();
                if entry.file_type().is_file()
                    && candidate.extension().is_some_and(|ext| ext == "js")
                {
                    files.push(candidate.to_path_buf());
                }
            }
        } else if resolved.is_file() {
            files.push(resolved);
        } else {
            bail!("input not found: {}", path.display());
        }
    }
    Ok(files)
}

/// Read and instrument `files` in parallel. The output keeps input order.
pub fn instrument_files(instrumenter: &Instrumenter, files: &[PathBuf]) -> Result<Vec<FileOutput>> {
    let pool = rayon::ThreadPoolBuilder::new()
        .stack_size(WORKER_STACK_SIZE)
        .build()
        .context("failed to start worker threads")?;

    pool.install(|| {
        files
            .par_iter()
            .map(|path| -> Result<FileOutput> {
                let source = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                Ok(instrument_source(instrumenter, path.clone(), source))
            })
            .collect()
    })
}

/// Instrument every input named on the command line, writing results under
/// `--out-dir` when it is set.
pub fn run(args: &CliArgs, cwd: &Path, instrumenter: &Instrumenter) -> Result<RunResult> {
    let files = collect_input_files(&args.paths, cwd)?;
    if args.out_dir.is_none() && files.len() > 1 {
        bail!(
            "{} input files found; use --out-dir to instrument more than one file",
            files.len()
        );
    }

    let out_dir = args.out_dir.as_ref().map(|dir| {
        if dir.is_absolute() {
            dir.clone()
        } else {
            cwd.join(dir)
        }
    });
    let targets = match &out_dir {
        Some(dir) => output_paths(&files, dir)?,
        None => Vec::new(),
    };

    let outputs = instrument_files(instrumenter, &files)?;

    let mut written = Vec::with_capacity(targets.len());
    if let Some(dir) = &out_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
        for (output, target) in outputs.iter().zip(targets) {
            std::fs::write(&target, &output.code)
                .with_context(|| format!("failed to write {}", target.display()))?;
            written.push(target);
        }
    }

    let result = RunResult {
        files: outputs,
        written,
    };
    let stats = result.total_stats();
    tracing::info!(
        files = result.files.len(),
        failed = result.failure_count(),
        loop_bodies = stats.loop_bodies,
        log_calls = stats.log_calls,
        "instrumentation finished"
    );
    Ok(result)
}

/// `out_dir/<file name>` for each input. Two inputs with the same file name
/// would overwrite each other, so that is an error.
fn output_paths(files: &[PathBuf], out_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut seen = FxHashSet::default();
    let mut targets = Vec::with_capacity(files.len());
    for file in files {
        let Some(name) = file.file_name() else {
            bail!("input has no file name: {}", file.display());
        };
        if !seen.insert(name.to_os_string()) {
            bail!(
                "several inputs are named {}; they would overwrite each other in {}",
                name.to_string_lossy(),
                out_dir.display()
            );
        }
        targets.push(out_dir.join(name));
    }
    Ok(targets)
}

#[cfg(test)]
#[path = "../tests/driver_tests.rs"]
mod tests;
