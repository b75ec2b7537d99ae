//! `algotrace.json` loading.
//!
//! The file holds an `InstrumentOptions` object in camelCase. Command-line
//! flags override whatever the file sets.

use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};

use algotrace::InstrumentOptions;

use crate::args::CliArgs;

pub const CONFIG_FILE_NAME: &str = "algotrace.json";

pub fn find_config(cwd: &Path) -> Option<PathBuf> {
    let candidate = cwd.join(CONFIG_FILE_NAME);
    candidate.is_file().then_some(candidate)
}

/// The config file to use: `project` if given (a file, or a directory holding
/// `algotrace.json`), otherwise `algotrace.json` in `cwd` if it exists.
pub fn resolve_config_path(cwd: &Path, project: Option<&Path>) -> Result<Option<PathBuf>> {
    let Some(project) = project else {
        return Ok(find_config(cwd));
    };

    let mut candidate = if project.is_absolute() {
        project.to_path_buf()
    } else {
        cwd.join(project)
    };

    if candidate.is_dir() {
        candidate = candidate.join(CONFIG_FILE_NAME);
    }

    if !candidate.exists() {
        bail!("config not found at {}", candidate.display());
    }

    if !candidate.is_file() {
        bail!("project path is not a file: {}", candidate.display());
    }

    Ok(Some(candidate))
}

pub fn parse_config(source: &str) -> Result<InstrumentOptions> {
    serde_json::from_str(source).context("failed to parse config JSON")
}

pub fn load_config(path: &Path) -> Result<InstrumentOptions> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    parse_config(&source).with_context(|| format!("failed to parse config: {}", path.display()))
}

/// Options from the config file (if any) with command-line flags applied on top.
pub fn resolve_options(args: &CliArgs, cwd: &Path) -> Result<InstrumentOptions> {
    let mut options = match resolve_config_path(cwd, args.project.as_deref())? {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            load_config(&path)?
        }
        None => InstrumentOptions::default(),
    };
    apply_cli_overrides(&mut options, args);
    Ok(options)
}

pub fn apply_cli_overrides(options: &mut InstrumentOptions, args: &CliArgs) {
    if let Some(log_function) = &args.log_function {
        options.log_function.clone_from(log_function);
    }
    if let Some(ambient) = &args.ambient {
        options.ambient_names.clone_from(ambient);
    }
    if let Some(visibility) = args.visibility {
        options.visibility = visibility.into();
    }
    if let Some(indent_width) = args.indent_width {
        options.indent_width = indent_width;
    }
    if let Some(new_line) = args.new_line {
        options.new_line = new_line.into();
    }
}

#[cfg(test)]
#[path = "../tests/config_tests.rs"]
mod tests;
