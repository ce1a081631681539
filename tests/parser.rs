use april::{
    ast::{BinaryOperator, Expr, NodeKind, Position, Program, Statement, UnaryOperator},
    error::{Category, ParseError},
    interpreter::{lexer::scan, parser::core::parse},
};
use pretty_assertions::assert_eq;

fn parse_source(source: &str) -> Program {
    let tokens = scan(source).unwrap_or_else(|e| panic!("scan failed: {e}"));
    parse(&tokens).unwrap_or_else(|e| panic!("parse failed: {e}"))
}

fn parse_error(source: &str) -> ParseError {
    let tokens = scan(source).unwrap_or_else(|e| panic!("scan failed: {e}"));
    match parse(&tokens) {
        Ok(program) => panic!("expected a parse error, got {program:?}"),
        Err(e) => e,
    }
}

fn expression(source: &str) -> Expr {
    match parse_source(source).body.first() {
        Some(Statement::Expression(expr)) => expr.clone(),
        other => panic!("expected an expression statement, got {other:?}"),
    }
}

/// Renders an expression with explicit grouping, for shape assertions.
fn shape(expr: &Expr) -> String {
    match expr {
        Expr::Assignment { target, value, .. } => format!("({} = {})", shape(target), shape(value)),
        Expr::Binary { left, op, right, .. } => format!("({} {op} {})", shape(left), shape(right)),
        Expr::Unary { op, operand, .. } => format!("({op}{})", shape(operand)),
        Expr::Call { callee, arguments, .. } => {
            let arguments: Vec<_> = arguments.iter().map(shape).collect();
            format!("{}({})", shape(callee), arguments.join(", "))
        },
        Expr::Identifier { name, .. } => name.clone(),
        Expr::NumericLiteral { value, .. } => value.to_string(),
        Expr::BooleanLiteral { value, .. } => value.to_string(),
    }
}

#[test]
fn precedence_tiers() {
    assert_eq!(shape(&expression("2 + 3 * 4")), "(2 + (3 * 4))");
    assert_eq!(shape(&expression("(2 + 3) * 4")), "((2 + 3) * 4)");
    assert_eq!(shape(&expression("a + b % c * d")), "((a + b) % (c * d))");
    assert_eq!(shape(&expression("a < b == c >= d")), "((a < b) == (c >= d))");
    assert_eq!(shape(&expression("a == b && c != d || e")),
               "(((a == b) && (c != d)) || e)");
    assert_eq!(shape(&expression("!a && !!b")), "((!a) && (!(!b)))");
    assert_eq!(shape(&expression("!f(x)")), "(!f(x))");
}

#[test]
fn binary_tiers_are_left_associative() {
    assert_eq!(shape(&expression("10 - 3 - 2")), "((10 - 3) - 2)");
    assert_eq!(shape(&expression("a / b * c")), "((a / b) * c)");
    assert_eq!(shape(&expression("a || b && c")), "((a || b) && c)");
}

#[test]
fn assignment_is_right_associative() {
    assert_eq!(shape(&expression("a = b = c + 1")), "(a = (b = (c + 1)))");
    assert_eq!(shape(&expression("a = b || c")), "(a = (b || c))");
}

#[test]
fn call_chains_nest() {
    assert_eq!(shape(&expression("f()(1)(2, g(3))")), "f()(1)(2, g(3))");

    let call = expression("f()(1)");
    let Expr::Call { callee, arguments, .. } = &call else {
        panic!("expected a call");
    };
    assert_eq!(arguments.len(), 1);
    assert_eq!(callee.kind(), NodeKind::CallExpr);
}

#[test]
fn node_kinds_and_positions() {
    let program = parse_source("let x = 1;\nfn f(a) { a }\nfor 2 { x }\nwhile x < 1 { x }\n!x;");
    let kinds: Vec<_> = program.body.iter().map(Statement::kind).collect();

    assert_eq!(program.kind(), NodeKind::Program);
    assert_eq!(kinds,
               vec![NodeKind::VarDeclaration,
                    NodeKind::FuncDeclaration,
                    NodeKind::ForStatement,
                    NodeKind::WhileStatement,
                    NodeKind::UnaryExpr]);

    let lines: Vec<_> = program.body.iter().map(|s| s.position().line).collect();
    assert_eq!(lines, vec![1, 2, 3, 4, 5]);
}

#[test]
fn compound_expressions_start_at_their_leftmost_token() {
    assert_eq!(expression("a +\n  true").position(), Position::new(1, 1));
    assert_eq!(expression("  f(1)(2)").position(), Position::new(1, 3));
    assert_eq!(expression("x = y = 1").position(), Position::new(1, 1));
    assert_eq!(expression("!a && b").position(), Position::new(1, 1));
    assert_eq!(expression("b && !a").position(), Position::new(1, 1));

    let Expr::Binary { right, .. } = &expression("1 * (2 - 3)") else {
        panic!("expected a binary expression");
    };
    assert_eq!(right.position(), Position::new(1, 6));
}

#[test]
fn declarations() {
    let program = parse_source("let a; let b = 2; const c = b;");

    assert_eq!(program.body[0],
               Statement::VarDeclaration { name:     "a".into(),
                                           value:    None,
                                           constant: false,
                                           position: Position::new(1, 1), });
    assert!(matches!(&program.body[1],
                     Statement::VarDeclaration { value: Some(Expr::NumericLiteral { value, .. }),
                                                 constant: false,
                                                 .. } if *value == 2.0));
    assert!(matches!(&program.body[2], Statement::VarDeclaration { constant: true, .. }));
}

#[test]
fn function_declarations() {
    let program = parse_source("fn add(a, b) { let s = a + b; s } fn nothing() {}");

    let Statement::FuncDeclaration(add) = &program.body[0] else {
        panic!("expected a function declaration");
    };
    assert_eq!(add.name, "add");
    assert_eq!(add.parameters, vec!["a".to_string(), "b".to_string()]);
    assert_eq!(add.body.len(), 2);

    let Statement::FuncDeclaration(nothing) = &program.body[1] else {
        panic!("expected a function declaration");
    };
    assert!(nothing.parameters.is_empty());
    assert!(nothing.body.is_empty());
}

#[test]
fn deeply_nested_trees_drop_without_recursion() {
    let depth = 200_000;
    let negations = parse_source(&format!("{}x", "!".repeat(depth)));
    drop(negations);

    let blocks = parse_source(&format!("{}{}", "while x {".repeat(20_000), "}".repeat(20_000)));
    assert_eq!(blocks.body.len(), 1);
    drop(blocks);
}

#[test]
fn loops() {
    let program = parse_source("for 3 { x = x + 1; } while !done { step() }");

    assert!(matches!(&program.body[0],
                     Statement::ForStatement { iterations: 3, body, .. } if body.len() == 1));
    let Statement::WhileStatement { condition, body, .. } = &program.body[1] else {
        panic!("expected a while statement");
    };
    assert!(matches!(condition, Expr::Unary { op: UnaryOperator::Not, .. }));
    assert_eq!(body.len(), 1);
}

#[test]
fn optional_semicolons_after_statements() {
    assert_eq!(parse_source("fn f() { 1 }; f();").body.len(), 2);
    assert_eq!(parse_source("for 1 {}; while false {};").body.len(), 2);
    assert_eq!(parse_source("1 2 3").body.len(), 3);
    assert_eq!(parse_source("").body.len(), 0);
}

#[test]
fn var_declaration_requires_semicolon() {
    let err = parse_error("let x = 10\nx");
    assert_eq!(err,
               ParseError::MissingSemicolon { expected: "';'".into(),
                                              found:    "identifier 'x'".into(),
                                              position: Position::new(2, 1), });
    assert_eq!(err.code(), 250);
    assert_eq!(err.category(), Category::Syntax);
}

#[test]
fn declaration_errors() {
    assert_eq!(parse_error("let 1 = 2;").code(), 251);
    assert_eq!(parse_error("const = 2;").code(), 251);

    let err = parse_error("const answer;");
    assert_eq!(err,
               ParseError::MissingConstantValue { name:     "answer".into(),
                                                  position: Position::new(1, 1), });
    assert_eq!(err.code(), 252);

    let err = parse_error("let x 5;");
    assert_eq!(err.code(), 300);
    assert_eq!(err.category(), Category::Parser);
}

#[test]
fn function_declaration_errors() {
    assert_eq!(parse_error("fn (a) { a }").code(), 200);
    assert_eq!(parse_error("fn 5() {}").code(), 200);
    assert_eq!(parse_error("fn f { }").code(), 201);

    let err = parse_error("fn f(a, 2) {}");
    assert_eq!(err, ParseError::InvalidParameter { position: Position::new(1, 9) });
    assert_eq!(err.code(), 202);

    assert_eq!(parse_error("fn f(a b) {}").code(), 300);
    assert_eq!(parse_error("fn f(a) a").code(), 300);
}

#[test]
fn iteration_count_errors() {
    let err = parse_error("for 1.5 { }");
    assert_eq!(err.code(), 253);
    assert_eq!(err.position(), Position::new(1, 5));

    assert_eq!(parse_error("for n { }").code(), 300);
}

#[test]
fn unexpected_tokens() {
    for source in ["1 +", "(1", "f(1", "f(1,)", ")", "{ }", "let x = ;", "while x { 1", "1 = = 2"] {
        let err = parse_error(source);
        assert_eq!(err.code(), 300, "{source}: {err}");
    }
}

#[test]
fn running_off_the_end_reports_end_of_file() {
    let err = parse_error("fn f(a) {");
    assert_eq!(err,
               ParseError::UnexpectedToken { expected: "'}'".into(),
                                             found:    "end of file".into(),
                                             position: Position::new(1, 10), });
}

#[test]
fn parsing_is_deterministic() {
    let source = "fn f(a) { a * 2 } let x = f(3) + 1; while x > 0 { x = x - 1 }";
    assert_eq!(parse_source(source), parse_source(source));
}

#[test]
fn binary_operator_display() {
    let ops = [BinaryOperator::Add, BinaryOperator::Mod, BinaryOperator::LessEqual, BinaryOperator::Or];
    let rendered: Vec<_> = ops.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, vec!["+", "%", "<=", "||"]);
}
