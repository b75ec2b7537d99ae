//! Tests for statement parsing in the parser.
use crate::parser::node::*;
use crate::parser::{ParseDiagnostic, ParserState};
use algotrace_common::diagnostics::diagnostic_codes;

fn parse_ok(source: &str) -> Program {
    let mut parser = ParserState::new("test.js".to_string(), source.to_string());
    match parser.parse_source_file() {
        Ok(program) => program,
        Err(diag) => panic!("unexpected parse error for {source:?}: {diag}"),
    }
}

fn parse_err(source: &str) -> ParseDiagnostic {
    let mut parser = ParserState::new("test.js".to_string(), source.to_string());
    match parser.parse_source_file() {
        Ok(program) => panic!("expected a parse error for {source:?}, got {program:?}"),
        Err(diag) => diag,
    }
}

fn single_statement(source: &str) -> Stmt {
    let mut program = parse_ok(source);
    assert_eq!(program.statements.len(), 1, "source: {source}");
    program.statements.remove(0)
}

fn kinds(statements: &[Stmt]) -> Vec<StmtKind> {
    statements.iter().map(Stmt::kind).collect()
}

#[test]
fn parse_function_declaration_with_params_and_body() {
    let Stmt::Function(function) = single_statement("function f(arr, n) { let s = 0; return s; }")
    else {
        panic!("expected a function declaration");
    };
    assert_eq!(function.name.as_deref(), Some("f"));
    assert_eq!(param_names(&function.params), vec!["arr", "n"]);
    assert_eq!(
        kinds(&function.body.statements),
        vec![StmtKind::Var, StmtKind::Return]
    );
}

#[test]
fn parse_counted_loop_with_let_head() {
    let Stmt::For(for_stmt) =
        single_statement("for (let i = 0; i < arr.length; i++) { s = s + arr[i]; }")
    else {
        panic!("expected a for statement");
    };
    let Some(ForInit::Var(decl)) = &for_stmt.init else {
        panic!("expected a declaration in the for head");
    };
    assert_eq!(decl.kind, VarKind::Let);
    assert_eq!(decl.declarators[0].target, Pattern::Identifier("i".to_string()));
    assert!(for_stmt.test.is_some());
    assert!(for_stmt.update.is_some());
    let Stmt::Block(body) = for_stmt.body.as_ref() else {
        panic!("expected a block body");
    };
    assert_eq!(kinds(&body.statements), vec![StmtKind::Expr]);
}

#[test]
fn parse_for_with_empty_head() {
    let Stmt::For(for_stmt) = single_statement("for (;;) {}") else {
        panic!("expected a for statement");
    };
    assert!(for_stmt.init.is_none());
    assert!(for_stmt.test.is_none());
    assert!(for_stmt.update.is_none());
}

#[test]
fn parse_for_in_and_for_of_heads() {
    let program = parse_ok("for (const k in obj) {}\nfor (x of xs) x;");
    let [Stmt::ForIn(for_in), Stmt::ForOf(for_of)] = program.statements.as_slice() else {
        panic!("expected for-in then for-of, got {:?}", kinds(&program.statements));
    };

    let ForHead::Var(decl) = &for_in.left else {
        panic!("expected a declaration head");
    };
    assert_eq!(decl.kind, VarKind::Const);
    assert_eq!(for_in.right, Expr::ident("obj"));

    assert_eq!(for_of.left, ForHead::Target(Expr::ident("x")));
    assert_eq!(for_of.body.kind(), StmtKind::Expr);
}

#[test]
fn parse_in_operator_inside_parenthesized_for_initializer() {
    let Stmt::For(for_stmt) = single_statement("for (let i = (\"a\" in o) ? 1 : 0; i < 3; i++) {}")
    else {
        panic!("expected a for statement");
    };
    assert!(matches!(for_stmt.init, Some(ForInit::Var(_))));
}

#[test]
fn parse_for_of_rejects_multiple_declarators() {
    let diag = parse_err("for (let a, b of xs) {}");
    assert_eq!(diag.code, diagnostic_codes::INVALID_ASSIGNMENT_TARGET);
}

#[test]
fn parse_for_of_with_destructuring_head() {
    let Stmt::ForOf(for_of) = single_statement("for (const [k, v] of entries) {}") else {
        panic!("expected a for-of statement");
    };
    let ForHead::Var(decl) = &for_of.left else {
        panic!("expected a declaration head");
    };
    assert_eq!(decl.declarators[0].target.bound_names(), vec!["k", "v"]);
}

#[test]
fn parse_while_and_do_while() {
    let program = parse_ok("while (i < n) { i++; }\ndo { i-- } while (i > 0) let done = true;");
    assert_eq!(
        kinds(&program.statements),
        vec![StmtKind::While, StmtKind::DoWhile, StmtKind::Var]
    );
}

#[test]
fn parse_automatic_semicolon_insertion_at_line_breaks() {
    let program = parse_ok("let a = 1\nlet b = 2\na = b");
    assert_eq!(
        kinds(&program.statements),
        vec![StmtKind::Var, StmtKind::Var, StmtKind::Expr]
    );
}

#[test]
fn parse_missing_semicolon_on_one_line_is_an_error() {
    let diag = parse_err("let a = 1 let b = 2");
    assert_eq!(diag.code, diagnostic_codes::EXPECTED_TOKEN);
    assert_eq!(diag.message, "';' expected.");
}

#[test]
fn parse_return_before_line_break_has_no_argument() {
    let Stmt::Function(function) = single_statement("function f() { return\n1 }") else {
        panic!("expected a function declaration");
    };
    assert_eq!(
        function.body.statements,
        vec![Stmt::Return(None), Stmt::Expr(Expr::Number("1".to_string()))]
    );
}

#[test]
fn parse_try_catch_finally() {
    let Stmt::Try(try_stmt) = single_statement("try { a() } catch (e) { b(e) } finally { c() }")
    else {
        panic!("expected a try statement");
    };
    let handler = try_stmt.handler.as_ref().expect("catch clause");
    assert_eq!(handler.param, Some(Pattern::Identifier("e".to_string())));
    assert_eq!(handler.body.statements.len(), 1);
    assert!(try_stmt.finalizer.is_some());
}

#[test]
fn parse_catch_without_binding() {
    let Stmt::Try(try_stmt) = single_statement("try {} catch {}") else {
        panic!("expected a try statement");
    };
    assert_eq!(try_stmt.handler.map(|h| h.param), Some(None));
}

#[test]
fn parse_try_without_handler_is_an_error() {
    let diag = parse_err("try {}");
    assert_eq!(diag.code, diagnostic_codes::EXPECTED_TOKEN);
}

#[test]
fn parse_switch_cases() {
    let Stmt::Switch(switch) = single_statement("switch (x) { case 1: a(); break; default: b() }")
    else {
        panic!("expected a switch statement");
    };
    assert_eq!(switch.cases.len(), 2);
    assert_eq!(
        kinds(&switch.cases[0].body),
        vec![StmtKind::Expr, StmtKind::Break]
    );
    assert!(switch.cases[1].test.is_none());
}

#[test]
fn parse_switch_rejects_second_default() {
    let diag = parse_err("switch (x) { default: a(); default: b() }");
    assert_eq!(diag.code, diagnostic_codes::DECLARATION_OR_STATEMENT_EXPECTED);
}

#[test]
fn parse_labeled_loop_with_labeled_break() {
    let Stmt::Labeled(labeled) = single_statement("outer: for (;;) { break outer; }") else {
        panic!("expected a labeled statement");
    };
    assert_eq!(labeled.label, "outer");
    let Stmt::For(for_stmt) = labeled.body.as_ref() else {
        panic!("expected a labeled for statement");
    };
    let Stmt::Block(body) = for_stmt.body.as_ref() else {
        panic!("expected a block body");
    };
    assert_eq!(body.statements, vec![Stmt::Break(Some("outer".to_string()))]);
}

#[test]
fn parse_if_else_chain() {
    let Stmt::If(if_stmt) = single_statement("if (a) b(); else if (c) { d() } else e()") else {
        panic!("expected an if statement");
    };
    assert_eq!(if_stmt.consequent.kind(), StmtKind::Expr);
    let Some(alternate) = &if_stmt.alternate else {
        panic!("expected an else branch");
    };
    assert_eq!(alternate.kind(), StmtKind::If);
}

#[test]
fn parse_destructuring_declarations() {
    let Stmt::Var(decl) =
        single_statement("const [a, , b = 2, ...rest] = xs, { p, q: r, ...others } = o;")
    else {
        panic!("expected a variable declaration");
    };
    let names: Vec<String> = decl
        .declarators
        .iter()
        .flat_map(|d| d.target.bound_names())
        .collect();
    assert_eq!(names, vec!["a", "b", "rest", "p", "r", "others"]);
}

#[test]
fn parse_debugger_and_empty_statements() {
    let program = parse_ok("debugger;;");
    assert_eq!(
        kinds(&program.statements),
        vec![StmtKind::Debugger, StmtKind::Empty]
    );
}

#[test]
fn parse_throw_with_line_break_is_an_error() {
    let diag = parse_err("throw\nnew Error()");
    assert_eq!(diag.code, diagnostic_codes::EXPRESSION_EXPECTED);
}

#[test]
fn parse_shebang_is_skipped() {
    let program = parse_ok("#!/usr/bin/env node\nlet a = 1;");
    assert_eq!(kinds(&program.statements), vec![StmtKind::Var]);
}

#[test]
fn parse_unsupported_constructs_are_reported() {
    for source in [
        "class A {}",
        "import x from 'y';",
        "export const a = 1;",
        "async function f() {}",
        "function* gen() {}",
        "let re = /ab+c/;",
        "with (o) {}",
        "for await (const x of xs) {}",
    ] {
        let diag = parse_err(source);
        assert_eq!(
            diag.code,
            diagnostic_codes::UNSUPPORTED_SYNTAX,
            "source: {source}, diagnostic: {diag}"
        );
    }
}

#[test]
fn parse_async_as_plain_identifier() {
    let program = parse_ok("let async = 1; async + 1; async(2);");
    assert_eq!(program.statements.len(), 3);
}

#[test]
fn parse_malformed_declaration_reports_expression_expected() {
    let mut parser = ParserState::new(
        "test.js".to_string(),
        "function f(arr){ let s = ; }".to_string(),
    );
    let diag = parser.parse_source_file().expect_err("malformed input");
    assert_eq!(diag.code, diagnostic_codes::EXPRESSION_EXPECTED);
    assert_eq!(diag.start, 25);
    assert_eq!(parser.get_diagnostics(), &[diag]);
}

#[test]
fn parse_unterminated_comment_is_an_error() {
    let diag = parse_err("let a = 1; /* oops");
    assert_eq!(diag.code, diagnostic_codes::UNTERMINATED_COMMENT);
}

#[test]
fn parse_deep_nesting_is_rejected_without_overflow() {
    let source = format!("let x = {}1{};", "(".repeat(400), ")".repeat(400));
    // Unoptimized builds use large frames; give the parser room to reach the limit.
    let diag = std::thread::Builder::new()
        .stack_size(32 * 1024 * 1024)
        .spawn(move || parse_err(&source))
        .expect("spawn parser thread")
        .join()
        .expect("parser thread panicked");
    assert_eq!(diag.code, diagnostic_codes::NESTING_TOO_DEEP);
}

#[test]
fn parse_stray_close_brace_is_an_error() {
    let diag = parse_err("let a = 1; }");
    assert_eq!(diag.code, diagnostic_codes::DECLARATION_OR_STATEMENT_EXPECTED);
}
