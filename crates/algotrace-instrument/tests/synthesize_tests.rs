use super::*;
use algotrace_emitter::{Printer, PrinterOptions};

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|name| (*name).to_string()).collect()
}

fn print(stmt: &Stmt) -> String {
    let mut printer = Printer::new(PrinterOptions::default());
    printer.emit_statement(stmt);
    printer.take_output()
}

#[test]
fn test_build_one_shorthand_property_per_name() {
    let synthesizer = LogCallSynthesizer::new("__trace");
    let stmt = synthesizer.build(&names(&["arr", "s", "i"]));
    assert_eq!(print(&stmt), "__trace({ arr, s, i });");
}

#[test]
fn test_build_with_no_names() {
    let synthesizer = LogCallSynthesizer::new("__trace");
    assert_eq!(print(&synthesizer.build(&[])), "__trace({});");
}

#[test]
fn test_configured_function_name() {
    let synthesizer = LogCallSynthesizer::new("snapshot");
    assert_eq!(synthesizer.log_function(), "snapshot");
    assert_eq!(print(&synthesizer.build(&names(&["x"]))), "snapshot({ x });");
}

#[test]
fn test_build_is_pure() {
    let synthesizer = LogCallSynthesizer::new("__trace");
    let input = names(&["a", "b"]);
    assert_eq!(synthesizer.build(&input), synthesizer.build(&input));
}

#[test]
fn test_is_log_call() {
    let synthesizer = LogCallSynthesizer::new("__trace");
    assert!(synthesizer.is_log_call(&synthesizer.build(&names(&["a"]))));
    assert!(!LogCallSynthesizer::new("other").is_log_call(&synthesizer.build(&[])));
    assert!(!synthesizer.is_log_call(&Stmt::Expr(Expr::call(Expr::ident("__trace"), vec![]))));
    assert!(!synthesizer.is_log_call(&Stmt::Empty));
}
