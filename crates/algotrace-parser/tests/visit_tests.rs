use super::*;
use crate::parser::parse_source;

/// Records the owner of every visited block and every declared name.
#[derive(Default)]
struct OwnerRecorder {
    owners: Vec<String>,
    declared: Vec<String>,
}

impl VisitMut for OwnerRecorder {
    fn visit_block(&mut self, block: &mut Block, owner: BlockOwner<'_>) {
        let label = match owner {
            BlockOwner::Function(params) => format!("function({})", param_names(params).join(",")),
            BlockOwner::Loop(kind) => format!("loop({kind:?})"),
            BlockOwner::Catch(Some(param)) => format!("catch({})", param.bound_names().join(",")),
            BlockOwner::Catch(None) => "catch".to_string(),
            BlockOwner::Other => "other".to_string(),
        };
        self.owners.push(label);
        walk_block(self, block);
    }

    fn visit_declarator(&mut self, declarator: &mut Declarator) {
        walk_declarator(self, declarator);
        self.declared.extend(declarator.target.bound_names());
    }
}

fn record(source: &str) -> OwnerRecorder {
    let mut program = parse_source("test.js", source).expect("valid source");
    let mut recorder = OwnerRecorder::default();
    recorder.visit_program(&mut program);
    recorder
}

#[test]
fn test_loop_bodies_report_their_loop_kind() {
    let recorder = record(
        "for (;;) {} while (a) {} do {} while (a); for (k in o) {} for (v of xs) {}",
    );
    assert_eq!(
        recorder.owners,
        vec![
            "loop(For)",
            "loop(While)",
            "loop(DoWhile)",
            "loop(ForIn)",
            "loop(ForOf)",
        ]
    );
}

#[test]
fn test_function_bodies_carry_their_params() {
    let recorder = record("function f(a, [b, c]) { const g = (d) => { if (d) {} }; }");
    assert_eq!(
        recorder.owners,
        vec!["function(a,b,c)", "function(d)", "other"]
    );
}

#[test]
fn test_catch_body_carries_its_binding() {
    let recorder = record("try {} catch ({ message }) {} finally {}");
    assert_eq!(recorder.owners, vec!["other", "catch(message)", "other"]);
}

#[test]
fn test_statement_loop_body_is_not_a_block() {
    let recorder = record("while (i < 3) i++;");
    assert!(recorder.owners.is_empty());
}

#[test]
fn test_nested_functions_in_expressions_are_visited() {
    let recorder = record("run(function () { for (;;) {} }, x => { while (x) {} });");
    assert_eq!(
        recorder.owners,
        vec!["function()", "loop(For)", "function(x)", "loop(While)"]
    );
}

#[test]
fn test_initializer_is_walked_before_its_target() {
    let recorder = record("let a = () => { let inner = 1; }, b = 2;");
    assert_eq!(recorder.declared, vec!["inner", "a", "b"]);
}

#[test]
fn test_for_of_right_side_is_walked_before_head() {
    let recorder = record("for (const v of (() => { let w; return []; })()) {}");
    assert_eq!(recorder.declared, vec!["w", "v"]);
}

#[test]
fn test_loop_kind_of_statement() {
    let program = parse_source("test.js", "for (;;) {} if (a) {}").expect("valid source");
    assert_eq!(LoopKind::of(&program.statements[0]), Some(LoopKind::For));
    assert_eq!(LoopKind::of(&program.statements[1]), None);
}
