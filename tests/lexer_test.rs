// Integration tests for the Monkey lexer

use monkey::parser::token::TokenKind;
use monkey::parser::Lexer;

fn assert_stream(input: &str, expected: &[(TokenKind, &str)]) {
    let mut lexer = Lexer::new(input);
    for (n, (kind, literal)) in expected.iter().enumerate() {
        let token = lexer.next_token();
        assert_eq!(token.kind, *kind, "token [{n}] has the wrong kind");
        assert_eq!(token.literal, *literal, "token [{n}] has the wrong literal");
    }
}

#[test]
fn test_single_character_symbols() {
    let mut lexer = Lexer::new("=+-(){}!*/<>,;");
    let expected = [
        (TokenKind::Assign, "="),
        (TokenKind::Plus, "+"),
        (TokenKind::Minus, "-"),
        (TokenKind::LParen, "("),
        (TokenKind::RParen, ")"),
        (TokenKind::LBrace, "{"),
        (TokenKind::RBrace, "}"),
        (TokenKind::Bang, "!"),
        (TokenKind::Asterisk, "*"),
        (TokenKind::Slash, "/"),
        (TokenKind::Lt, "<"),
        (TokenKind::Gt, ">"),
        (TokenKind::Comma, ","),
        (TokenKind::Semicolon, ";"),
    ];

    for (kind, literal) in expected {
        let token = lexer.next_token();
        assert_eq!(token.kind, kind);
        assert_eq!(token.literal, literal);
    }

    // End of input is sticky
    for _ in 0..3 {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Eof);
        assert_eq!(token.literal, "");
    }
}

#[test]
fn test_program_token_stream() {
    let input = r#"
let five = 5;
let ten = 10;

let add = fn(x, y) {
    x + y;
};

let result = add(five, ten);
!-/*5;
5 < 10 > 5;

if (5 < 10) {
    return true;
} else {
    return false;
}

10 == 10;
10 != 9;
"#;

    assert_stream(
        input,
        &[
            (TokenKind::Let, "let"),
            (TokenKind::Ident, "five"),
            (TokenKind::Assign, "="),
            (TokenKind::Int, "5"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Let, "let"),
            (TokenKind::Ident, "ten"),
            (TokenKind::Assign, "="),
            (TokenKind::Int, "10"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Let, "let"),
            (TokenKind::Ident, "add"),
            (TokenKind::Assign, "="),
            (TokenKind::Function, "fn"),
            (TokenKind::LParen, "("),
            (TokenKind::Ident, "x"),
            (TokenKind::Comma, ","),
            (TokenKind::Ident, "y"),
            (TokenKind::RParen, ")"),
            (TokenKind::LBrace, "{"),
            (TokenKind::Ident, "x"),
            (TokenKind::Plus, "+"),
            (TokenKind::Ident, "y"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::RBrace, "}"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Let, "let"),
            (TokenKind::Ident, "result"),
            (TokenKind::Assign, "="),
            (TokenKind::Ident, "add"),
            (TokenKind::LParen, "("),
            (TokenKind::Ident, "five"),
            (TokenKind::Comma, ","),
            (TokenKind::Ident, "ten"),
            (TokenKind::RParen, ")"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Bang, "!"),
            (TokenKind::Minus, "-"),
            (TokenKind::Slash, "/"),
            (TokenKind::Asterisk, "*"),
            (TokenKind::Int, "5"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Int, "5"),
            (TokenKind::Lt, "<"),
            (TokenKind::Int, "10"),
            (TokenKind::Gt, ">"),
            (TokenKind::Int, "5"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::If, "if"),
            (TokenKind::LParen, "("),
            (TokenKind::Int, "5"),
            (TokenKind::Lt, "<"),
            (TokenKind::Int, "10"),
            (TokenKind::RParen, ")"),
            (TokenKind::LBrace, "{"),
            (TokenKind::Return, "return"),
            (TokenKind::True, "true"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::RBrace, "}"),
            (TokenKind::Else, "else"),
            (TokenKind::LBrace, "{"),
            (TokenKind::Return, "return"),
            (TokenKind::False, "false"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::RBrace, "}"),
            (TokenKind::Int, "10"),
            (TokenKind::Eq, "=="),
            (TokenKind::Int, "10"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Int, "10"),
            (TokenKind::NotEq, "!="),
            (TokenKind::Int, "9"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Eof, ""),
        ],
    );
}

#[test]
fn test_equals_lookahead() {
    assert_stream("a==b", &[
        (TokenKind::Ident, "a"),
        (TokenKind::Eq, "=="),
        (TokenKind::Ident, "b"),
        (TokenKind::Eof, ""),
    ]);
    assert_stream("a=b", &[
        (TokenKind::Ident, "a"),
        (TokenKind::Assign, "="),
        (TokenKind::Ident, "b"),
        (TokenKind::Eof, ""),
    ]);
    assert_stream("!!=", &[
        (TokenKind::Bang, "!"),
        (TokenKind::NotEq, "!="),
        (TokenKind::Eof, ""),
    ]);
    assert_stream("===", &[
        (TokenKind::Eq, "=="),
        (TokenKind::Assign, "="),
        (TokenKind::Eof, ""),
    ]);
}

#[test]
fn test_literals_are_exact_source_text() {
    let input = "let   answer_42 =\t0042 ;";
    for token in Lexer::new(input).tokenize() {
        if token.kind != TokenKind::Eof {
            assert!(input.contains(&token.literal), "{token}");
        }
    }
}
