//! Tests for expression parsing in the parser.
use crate::parser::node::*;
use crate::parser::{ParseDiagnostic, ParserState};
use algotrace_common::diagnostics::diagnostic_codes;

fn parse_expr(source: &str) -> Expr {
    let mut parser = ParserState::new("test.js".to_string(), source.to_string());
    let program = match parser.parse_source_file() {
        Ok(program) => program,
        Err(diag) => panic!("unexpected parse error for {source:?}: {diag}"),
    };
    match program.statements.into_iter().next() {
        Some(Stmt::Expr(expr)) => expr,
        other => panic!("expected an expression statement, got {other:?}"),
    }
}

fn parse_err(source: &str) -> ParseDiagnostic {
    let mut parser = ParserState::new("test.js".to_string(), source.to_string());
    match parser.parse_source_file() {
        Ok(program) => panic!("expected a parse error for {source:?}, got {program:?}"),
        Err(diag) => diag,
    }
}

fn id(name: &str) -> Expr {
    Expr::ident(name)
}

fn num(raw: &str) -> Expr {
    Expr::Number(raw.to_string())
}

fn bin(op: BinaryOp, left: Expr, right: Expr) -> Expr {
    Expr::Binary {
        op,
        left: Box::new(left),
        right: Box::new(right),
    }
}

fn assign(target: Expr, value: Expr) -> Expr {
    Expr::Assign {
        op: AssignOp::Assign,
        target: Box::new(target),
        value: Box::new(value),
    }
}

fn member(object: Expr, property: &str, optional: bool) -> Expr {
    Expr::Member {
        object: Box::new(object),
        property: property.to_string(),
        optional,
    }
}

#[test]
fn parse_multiplication_binds_tighter_than_addition() {
    assert_eq!(
        parse_expr("a + b * c"),
        bin(BinaryOp::Add, id("a"), bin(BinaryOp::Mul, id("b"), id("c")))
    );
}

#[test]
fn parse_subtraction_is_left_associative() {
    assert_eq!(
        parse_expr("a - b - c"),
        bin(BinaryOp::Sub, bin(BinaryOp::Sub, id("a"), id("b")), id("c"))
    );
}

#[test]
fn parse_exponent_is_right_associative() {
    assert_eq!(
        parse_expr("a ** b ** c"),
        bin(BinaryOp::Exp, id("a"), bin(BinaryOp::Exp, id("b"), id("c")))
    );
}

#[test]
fn parse_unary_operand_of_exponent_is_an_error() {
    let diag = parse_err("-a ** b");
    assert_eq!(diag.code, diagnostic_codes::EXPRESSION_EXPECTED);
}

#[test]
fn parse_logical_and_comparison_precedence() {
    assert_eq!(
        parse_expr("a < b && c || d"),
        bin(
            BinaryOp::Or,
            bin(BinaryOp::And, bin(BinaryOp::Lt, id("a"), id("b")), id("c")),
            id("d"),
        )
    );
    assert_eq!(
        parse_expr("a ?? b === c"),
        bin(BinaryOp::Coalesce, id("a"), bin(BinaryOp::StrictEq, id("b"), id("c")))
    );
}

#[test]
fn parse_chained_assignment_is_right_associative() {
    assert_eq!(
        parse_expr("a = b = 1"),
        assign(id("a"), assign(id("b"), num("1")))
    );
}

#[test]
fn parse_compound_assignment_to_member() {
    assert_eq!(
        parse_expr("arr[i] += 2"),
        Expr::Assign {
            op: AssignOp::Add,
            target: Box::new(Expr::Index {
                object: Box::new(id("arr")),
                index: Box::new(id("i")),
                optional: false,
            }),
            value: Box::new(num("2")),
        }
    );
}

#[test]
fn parse_invalid_assignment_target_is_an_error() {
    let diag = parse_err("a + b = 1");
    assert_eq!(diag.code, diagnostic_codes::INVALID_ASSIGNMENT_TARGET);
    let diag = parse_err("a + b += 1");
    assert_eq!(diag.code, diagnostic_codes::INVALID_ASSIGNMENT_TARGET);
}

#[test]
fn parse_array_destructuring_swap() {
    assert_eq!(
        parse_expr("[a, b] = [b, a]"),
        assign(
            Expr::Array(vec![Some(id("a")), Some(id("b"))]),
            Expr::Array(vec![Some(id("b")), Some(id("a"))]),
        )
    );
}

#[test]
fn parse_parenthesized_object_destructuring() {
    let Expr::Paren(inner) = parse_expr("({ a, b: c } = o)") else {
        panic!("expected a parenthesized expression");
    };
    let Expr::Assign { target, .. } = *inner else {
        panic!("expected an assignment");
    };
    assert_eq!(
        *target,
        Expr::Object(vec![
            Property::Shorthand("a".to_string()),
            Property::KeyValue {
                key: PropertyKey::Identifier("b".to_string()),
                value: id("c"),
            },
        ])
    );
}

#[test]
fn parse_prefix_and_postfix_updates() {
    assert_eq!(
        parse_expr("i++"),
        Expr::Update {
            op: UpdateOp::Increment,
            prefix: false,
            arg: Box::new(id("i")),
        }
    );
    assert_eq!(
        parse_expr("--i"),
        Expr::Update {
            op: UpdateOp::Decrement,
            prefix: true,
            arg: Box::new(id("i")),
        }
    );
}

#[test]
fn parse_update_of_literal_is_an_error() {
    let diag = parse_err("1++");
    assert_eq!(diag.code, diagnostic_codes::INVALID_ASSIGNMENT_TARGET);
}

#[test]
fn parse_parenthesized_arrow_with_default() {
    let Expr::Arrow(arrow) = parse_expr("(a, b = 1) => a + b") else {
        panic!("expected an arrow function");
    };
    assert_eq!(param_names(&arrow.params), vec!["a", "b"]);
    assert!(!arrow.bare_param);
    assert_eq!(
        arrow.body,
        ArrowBody::Expr(Box::new(bin(BinaryOp::Add, id("a"), id("b"))))
    );
}

#[test]
fn parse_bare_arrow_as_call_argument() {
    let Expr::Call { args, .. } = parse_expr("xs.map(x => { return x * 2; })") else {
        panic!("expected a call");
    };
    let [Expr::Arrow(arrow)] = args.as_slice() else {
        panic!("expected one arrow argument");
    };
    assert!(arrow.bare_param);
    assert!(matches!(arrow.body, ArrowBody::Block(_)));
}

#[test]
fn parse_parenthesized_sequence_is_not_an_arrow() {
    assert_eq!(
        parse_expr("(a, b)"),
        Expr::Paren(Box::new(Expr::Sequence(vec![id("a"), id("b")])))
    );
}

#[test]
fn parse_arrow_with_template_default() {
    let Expr::Arrow(arrow) = parse_expr("(a = `x${1}y`) => a") else {
        panic!("expected an arrow function");
    };
    assert_eq!(param_names(&arrow.params), vec!["a"]);
}

#[test]
fn parse_optional_chain() {
    let expected = Expr::Call {
        callee: Box::new(Expr::Index {
            object: Box::new(member(id("a"), "b", true)),
            index: Box::new(num("0")),
            optional: true,
        }),
        args: vec![num("1")],
        optional: true,
    };
    assert_eq!(parse_expr("a?.b?.[0]?.(1)"), expected);
}

#[test]
fn parse_new_expressions() {
    assert_eq!(
        parse_expr("new Map()"),
        Expr::New {
            callee: Box::new(id("Map")),
            args: Some(Vec::new()),
        }
    );
    assert_eq!(
        parse_expr("new Foo"),
        Expr::New {
            callee: Box::new(id("Foo")),
            args: None,
        }
    );
    assert_eq!(
        parse_expr("new a.C(1).d"),
        member(
            Expr::New {
                callee: Box::new(member(id("a"), "C", false)),
                args: Some(vec![num("1")]),
            },
            "d",
            false,
        )
    );
}

#[test]
fn parse_template_with_substitutions() {
    assert_eq!(
        parse_expr("`sum: ${a + b} and ${ {k: 1}.k }`"),
        Expr::Template(Template {
            quasis: vec!["sum: ".to_string(), " and ".to_string(), String::new()],
            exprs: vec![
                bin(BinaryOp::Add, id("a"), id("b")),
                member(
                    Expr::Object(vec![Property::KeyValue {
                        key: PropertyKey::Identifier("k".to_string()),
                        value: num("1"),
                    }]),
                    "k",
                    false,
                ),
            ],
        })
    );
}

#[test]
fn parse_nested_conditional() {
    assert_eq!(
        parse_expr("a ? b : c ? d : e"),
        Expr::Conditional {
            test: Box::new(id("a")),
            consequent: Box::new(id("b")),
            alternate: Box::new(Expr::Conditional {
                test: Box::new(id("c")),
                consequent: Box::new(id("d")),
                alternate: Box::new(id("e")),
            }),
        }
    );
}

#[test]
fn parse_object_literal_property_forms() {
    let Expr::Paren(inner) = parse_expr("({ a, \"b\": 1, 2: x, [k]: v, ...rest })") else {
        panic!("expected a parenthesized expression");
    };
    assert_eq!(
        *inner,
        Expr::Object(vec![
            Property::Shorthand("a".to_string()),
            Property::KeyValue {
                key: PropertyKey::String("\"b\"".to_string()),
                value: num("1"),
            },
            Property::KeyValue {
                key: PropertyKey::Number("2".to_string()),
                value: id("x"),
            },
            Property::KeyValue {
                key: PropertyKey::Computed(Box::new(id("k"))),
                value: id("v"),
            },
            Property::Spread(id("rest")),
        ])
    );
}

#[test]
fn parse_method_and_accessor_shorthand_are_unsupported() {
    for source in ["({ m() {} })", "({ get x() { return 1 } })", "({ *g() {} })"] {
        let diag = parse_err(source);
        assert_eq!(diag.code, diagnostic_codes::UNSUPPORTED_SYNTAX, "source: {source}");
    }
}

#[test]
fn parse_reserved_words_as_property_names() {
    assert_eq!(
        parse_expr("a.default.new"),
        member(member(id("a"), "default", false), "new", false)
    );
}

#[test]
fn parse_in_operator_outside_for_head() {
    assert_eq!(
        parse_expr("\"k\" in o"),
        bin(BinaryOp::In, Expr::String("\"k\"".to_string()), id("o"))
    );
}

#[test]
fn parse_comma_sequence() {
    assert_eq!(
        parse_expr("i++, j--"),
        Expr::Sequence(vec![
            Expr::Update {
                op: UpdateOp::Increment,
                prefix: false,
                arg: Box::new(id("i")),
            },
            Expr::Update {
                op: UpdateOp::Decrement,
                prefix: false,
                arg: Box::new(id("j")),
            },
        ])
    );
}

#[test]
fn parse_unary_keywords() {
    assert_eq!(
        parse_expr("typeof x"),
        Expr::Unary {
            op: UnaryOp::TypeOf,
            arg: Box::new(id("x")),
        }
    );
}

#[test]
fn parse_array_holes_and_spread() {
    assert_eq!(
        parse_expr("[1, , ...xs]"),
        Expr::Array(vec![
            Some(num("1")),
            None,
            Some(Expr::Spread(Box::new(id("xs")))),
        ])
    );
}

#[test]
fn parse_unsupported_expressions_are_reported() {
    for source in [
        "tag`x`",
        "f = async (x) => x",
        "f = async x => x",
        "super.x",
        "new.target",
        "yield x",
        "await work()",
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
fn parse_function_expression_with_name() {
    let Expr::Paren(inner) = parse_expr("(function fact(n) { return n; })") else {
        panic!("expected a parenthesized expression");
    };
    let Expr::Function(function) = *inner else {
        panic!("expected a function expression");
    };
    assert_eq!(function.name.as_deref(), Some("fact"));
    assert_eq!(param_names(&function.params), vec!["n"]);
}

fn chain_depth(expr: &Expr) -> usize {
    let mut depth = 0;
    let mut current = expr;
    loop {
        current = match current {
            Expr::Binary { left, .. } => left.as_ref(),
            Expr::Member { object, .. } | Expr::Index { object, .. } => object.as_ref(),
            Expr::Call { callee, .. } => callee.as_ref(),
            _ => return depth,
        };
        depth += 1;
    }
}

#[test]
fn parse_long_operator_chain_hits_the_depth_limit() {
    let diag = parse_err(&["a"; 3_000].join(" - "));
    assert_eq!(diag.code, diagnostic_codes::NESTING_TOO_DEEP);
}

#[test]
fn parse_long_member_and_call_chains_hit_the_depth_limit() {
    let diag = parse_err(&format!("a{}", ".b".repeat(3_000)));
    assert_eq!(diag.code, diagnostic_codes::NESTING_TOO_DEEP);
    let diag = parse_err(&format!("f{}", "(x)[0]".repeat(1_500)));
    assert_eq!(diag.code, diagnostic_codes::NESTING_TOO_DEEP);
}

#[test]
fn parse_chain_below_the_depth_limit_is_accepted() {
    let expr = parse_expr(&["a"; 200].join(" + "));
    assert_eq!(chain_depth(&expr), 199);
    let expr = parse_expr(&format!("a{}", ".b".repeat(100)));
    assert_eq!(chain_depth(&expr), 100);
}

#[test]
fn parse_sibling_chains_do_not_share_depth() {
    // Each argument's chain gives its levels back once it is complete.
    let arg = ["a"; 150].join(" + ");
    let source = format!("f({})", [arg.as_str(); 4].join(", "));
    match parse_expr(&source) {
        Expr::Call { args, .. } => assert_eq!(args.len(), 4),
        other => panic!("expected a call, got {other:?}"),
    }
}
