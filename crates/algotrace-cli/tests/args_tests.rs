use super::*;

fn parse(args: &[&str]) -> CliArgs {
    let mut argv = vec!["algotrace"];
    argv.extend_from_slice(args);
    match CliArgs::try_parse_from(argv) {
        Ok(args) => args,
        Err(err) => panic!("failed to parse {args:?}: {err}"),
    }
}

#[test]
fn test_no_arguments_means_stdin() {
    let args = parse(&[]);
    assert!(args.paths.is_empty());
    assert!(!args.strict);
    assert_eq!(args.diagnostics, DiagnosticsFormat::Pretty);
    assert!(args.log_function.is_none());
}

#[test]
fn test_paths_and_flags() {
    let args = parse(&[
        "src",
        "main.js",
        "--log-function",
        "snap",
        "--ambient",
        "pointer,stack",
        "--visibility",
        "progressive",
        "--indent-width",
        "2",
        "--new-line",
        "crlf",
        "--out-dir",
        "out",
        "--strict",
        "--diagnostics",
        "json",
        "-p",
        "cfg",
    ]);
    assert_eq!(args.paths, [PathBuf::from("src"), PathBuf::from("main.js")]);
    assert_eq!(args.log_function.as_deref(), Some("snap"));
    assert_eq!(
        args.ambient,
        Some(vec!["pointer".to_string(), "stack".to_string()])
    );
    assert_eq!(args.visibility, Some(Visibility::Progressive));
    assert_eq!(args.indent_width, Some(2));
    assert_eq!(args.new_line, Some(NewLine::Crlf));
    assert_eq!(args.out_dir, Some(PathBuf::from("out")));
    assert!(args.strict);
    assert_eq!(args.diagnostics, DiagnosticsFormat::Json);
    assert_eq!(args.project, Some(PathBuf::from("cfg")));
}

#[test]
fn test_visibility_values_are_kebab_case() {
    let args = parse(&["--visibility", "block-entry"]);
    assert_eq!(
        args.visibility.map(VisibilityPolicy::from),
        Some(VisibilityPolicy::BlockEntry)
    );
}

#[test]
fn test_unknown_visibility_is_rejected() {
    assert!(CliArgs::try_parse_from(["algotrace", "--visibility", "sometimes"]).is_err());
}
