use super::*;
use algotrace::{NewLineKind, VisibilityPolicy};
use clap::Parser;
use std::fs;
use tempfile::TempDir;

fn cli(args: &[&str]) -> CliArgs {
    let mut argv = vec!["algotrace"];
    argv.extend_from_slice(args);
    match CliArgs::try_parse_from(argv) {
        Ok(args) => args,
        Err(err) => panic!("{err}"),
    }
}

fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

fn write(path: &Path, contents: &str) {
    if let Err(err) = fs::write(path, contents) {
        panic!("failed to write {}: {err}", path.display());
    }
}

#[test]
fn test_no_config_means_defaults() {
    let dir = temp_dir();
    let options = match resolve_options(&cli(&[]), dir.path()) {
        Ok(options) => options,
        Err(err) => panic!("{err:#}"),
    };
    assert_eq!(options, InstrumentOptions::default());
}

#[test]
fn test_config_in_cwd_is_picked_up() {
    let dir = temp_dir();
    write(
        &dir.path().join(CONFIG_FILE_NAME),
        r#"{ "logFunction": "snap", "visibility": "progressive" }"#,
    );
    let options = match resolve_options(&cli(&[]), dir.path()) {
        Ok(options) => options,
        Err(err) => panic!("{err:#}"),
    };
    assert_eq!(options.log_function, "snap");
    assert_eq!(options.visibility, VisibilityPolicy::Progressive);
}

#[test]
fn test_project_may_name_a_directory_or_a_file() {
    let dir = temp_dir();
    let nested = dir.path().join("cfg");
    if let Err(err) = fs::create_dir(&nested) {
        panic!("{err}");
    }
    write(&nested.join(CONFIG_FILE_NAME), "{}");
    write(&dir.path().join("other.json"), "{}");

    let from_dir = resolve_config_path(dir.path(), Some(Path::new("cfg")));
    assert_eq!(from_dir.ok().flatten(), Some(nested.join(CONFIG_FILE_NAME)));

    let from_file = resolve_config_path(dir.path(), Some(Path::new("other.json")));
    assert_eq!(from_file.ok().flatten(), Some(dir.path().join("other.json")));
}

#[test]
fn test_missing_project_is_an_error() {
    let dir = temp_dir();
    let err = match resolve_config_path(dir.path(), Some(Path::new("nope.json"))) {
        Ok(path) => panic!("expected an error, got {path:?}"),
        Err(err) => err,
    };
    assert!(err.to_string().starts_with("config not found at"));
}

#[test]
fn test_invalid_json_names_the_file() {
    let dir = temp_dir();
    let path = dir.path().join(CONFIG_FILE_NAME);
    write(&path, "{ logFunction: }");
    let err = match load_config(&path) {
        Ok(options) => panic!("expected an error, got {options:?}"),
        Err(err) => err,
    };
    assert!(format!("{err:#}").contains(CONFIG_FILE_NAME));
}

#[test]
fn test_flags_override_the_file() {
    let dir = temp_dir();
    write(
        &dir.path().join(CONFIG_FILE_NAME),
        r#"{ "logFunction": "snap", "ambientNames": ["a"], "indentWidth": 8 }"#,
    );
    let args = cli(&[
        "--log-function",
        "trace",
        "--ambient",
        "b,c",
        "--new-line",
        "crlf",
    ]);
    let options = match resolve_options(&args, dir.path()) {
        Ok(options) => options,
        Err(err) => panic!("{err:#}"),
    };
    assert_eq!(options.log_function, "trace");
    assert_eq!(options.ambient_names, ["b", "c"]);
    assert_eq!(options.indent_width, 8);
    assert_eq!(options.new_line, NewLineKind::Crlf);
}
