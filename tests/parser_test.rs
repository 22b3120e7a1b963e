// Integration tests for the Monkey parser

use monkey::parser::ast::{Expression, LetStatement, ReturnStatement, Statement};
use monkey::parser::token::TokenKind;
use monkey::parser::{parse, Lexer, ParseError, Parser, ParserConfig};

fn parse_clean(input: &str) -> monkey::parser::ast::Program {
    let (program, errors) = parse(input);
    assert!(
        errors.is_empty(),
        "unexpected errors for {input:?}: {:?}",
        errors.iter().map(ToString::to_string).collect::<Vec<_>>()
    );
    program
}

#[test]
fn test_operator_precedence() {
    let cases = [
        ("-a * b", "((-a) * b);"),
        ("!-a", "(!(-a));"),
        ("a + b + c", "((a + b) + c);"),
        ("a + b - c", "((a + b) - c);"),
        ("a * b * c", "((a * b) * c);"),
        ("a * b / c", "((a * b) / c);"),
        ("a + b / c", "(a + (b / c));"),
        ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f);"),
        ("3 + 4; -5 * 5", "(3 + 4);\n((-5) * 5);"),
        ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4));"),
        ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4));"),
        ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)));"),
        ("true", "true;"),
        ("3 > 5 == false", "((3 > 5) == false);"),
        ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4);"),
        ("(5 + 5) * 2", "((5 + 5) * 2);"),
        ("2 / (5 + 5)", "(2 / (5 + 5));"),
        ("-(5 + 5)", "(-(5 + 5));"),
        ("!(true == true)", "(!(true == true));"),
        ("a + add(b * c) + d", "((a + add((b * c))) + d);"),
        (
            "add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
            "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)));",
        ),
        ("add(a + b + c * d / f + g)", "add((((a + b) + ((c * d) / f)) + g));"),
    ];

    for (input, expected) in cases {
        let program = parse_clean(input);
        assert_eq!(program.to_string(), expected, "input: {input}");
    }
}

#[test]
fn test_let_statement_values() {
    let cases = [
        ("let x = 5;", "x", "5"),
        ("let y = true;", "y", "true"),
        ("let foobar = y;", "foobar", "y"),
    ];

    for (input, name, value) in cases {
        let program = parse_clean(input);
        assert_eq!(program.statements.len(), 1);
        match &program.statements[0] {
            Statement::Let(LetStatement {
                name: ident,
                value: expr,
                ..
            }) => {
                assert_eq!(ident.value, name);
                assert_eq!(expr.to_string(), value);
            }
            other => panic!("Expected let statement, got {other:?}"),
        }
    }
}

#[test]
fn test_return_statement_values() {
    let program = parse_clean("return 5; return 10; return add(1, 2);");
    assert_eq!(program.statements.len(), 3);

    let rendered: Vec<String> = program
        .statements
        .iter()
        .map(|stmt| match stmt {
            Statement::Return(ReturnStatement { value, .. }) => value.to_string(),
            other => panic!("Expected return statement, got {other:?}"),
        })
        .collect();
    assert_eq!(rendered, vec!["5", "10", "add(1, 2)"]);
}

#[test]
fn test_function_bound_and_called() {
    let program = parse_clean(
        r#"
let add = fn(x, y) {
    x + y;
};
let result = add(five, ten);
"#,
    );

    assert_eq!(program.statements.len(), 2);
    assert_eq!(
        program.to_string(),
        "let add = fn(x, y) { (x + y); };\nlet result = add(five, ten);"
    );
}

#[test]
fn test_call_on_function_literal() {
    let program = parse_clean("fn(x) { x; }(5)");
    match &program.statements[0] {
        Statement::Expression(stmt) => match &stmt.expression {
            Expression::Call(call) => {
                assert!(matches!(*call.function, Expression::Function(_)));
                assert_eq!(call.arguments.len(), 1);
            }
            other => panic!("Expected call expression, got {other:?}"),
        },
        other => panic!("Expected expression statement, got {other:?}"),
    }
}

#[test]
fn test_errors_are_accumulated_in_order() {
    let (program, errors) = parse("let x 5;\nlet = 10;\nlet 838383;");

    let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
    assert_eq!(
        messages,
        vec![
            "expected next token `=` but got `INT`",
            "expected next token `IDENT` but got `=`",
            "no prefix parse function for =",
            "expected next token `IDENT` but got `INT`",
        ]
    );

    // Statements after each failure are still parsed
    let rendered: Vec<String> = program.statements.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, vec!["5;", "10;", "838383;"]);
}

#[test]
fn test_error_locations() {
    let (_, errors) = parse("let a = 1;\nlet b 2;");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].location().line, 2);
    assert_eq!(errors[0].location().column, 7);
}

#[test]
fn test_illegal_token_reports_missing_prefix() {
    let (_, errors) = parse("let a = #;");
    assert!(matches!(
        errors.first(),
        Some(ParseError::NoPrefixParseFn {
            kind: TokenKind::Illegal,
            ..
        })
    ));
}

#[test]
fn test_parser_from_lexer() {
    let mut parser = Parser::from_lexer(Lexer::new("return x;"));
    let program = parser.parse_program();
    assert!(parser.errors().is_empty());
    assert_eq!(program.token_literal(), "return");
}

#[test]
fn test_empty_input() {
    let (program, errors) = parse("");
    assert!(program.statements.is_empty());
    assert!(errors.is_empty());

    let (program, errors) = parse("   \n\t  ");
    assert!(program.statements.is_empty());
    assert!(errors.is_empty());
}

#[test]
fn test_independent_parsers_on_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let source = format!("let v{i} = {i} * 2;");
                let (program, errors) = parse(&source);
                assert!(errors.is_empty());
                program.to_string()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), format!("let v{i} = ({i} * 2);"));
    }
}

#[test]
fn test_deep_nesting_reports_error_on_default_thread_stack() {
    let limit = ParserConfig::default().max_depth;

    // Spawned threads get the default 2 MiB stack
    let errors = std::thread::spawn(move || {
        let ifs = format!("{}x{}", "if x { ".repeat(limit), " }".repeat(limit));
        let fns = format!("{}x{}", "fn() { ".repeat(limit), " }".repeat(limit));
        let parens = format!("{}x{}", "(".repeat(limit + 1), ")".repeat(limit + 1));
        [ifs, fns, parens].map(|source| parse(&source).1)
    })
    .join()
    .unwrap();

    for diagnostics in errors {
        assert!(
            diagnostics
                .iter()
                .any(|e| matches!(e, ParseError::NestingTooDeep { .. })),
            "{diagnostics:?}"
        );
    }
}
