use april::{
    ast::Position,
    error::LexError,
    interpreter::lexer::{Span, TokenKind, scan},
};
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind> {
    scan(source).unwrap_or_else(|e| panic!("scan failed: {e}"))
                .into_iter()
                .map(|token| token.kind)
                .collect()
}

#[test]
fn keywords_identifiers_and_numbers() {
    assert_eq!(kinds("let const fn for while lettuce _x1 3 4.25"),
               vec![TokenKind::Let,
                    TokenKind::Const,
                    TokenKind::Fn,
                    TokenKind::For,
                    TokenKind::While,
                    TokenKind::Identifier("lettuce".into()),
                    TokenKind::Identifier("_x1".into()),
                    TokenKind::Number(3.0),
                    TokenKind::Number(4.25),
                    TokenKind::EndOfFile]);
}

#[test]
fn one_and_two_character_operators() {
    assert_eq!(kinds("= == ! != < <= > >= && || + - * / %"),
               vec![TokenKind::Equals,
                    TokenKind::EqualEqual,
                    TokenKind::Bang,
                    TokenKind::BangEqual,
                    TokenKind::Less,
                    TokenKind::LessEqual,
                    TokenKind::Greater,
                    TokenKind::GreaterEqual,
                    TokenKind::AndAnd,
                    TokenKind::OrOr,
                    TokenKind::Plus,
                    TokenKind::Minus,
                    TokenKind::Star,
                    TokenKind::Slash,
                    TokenKind::Percent,
                    TokenKind::EndOfFile]);
}

#[test]
fn operators_need_no_spaces() {
    assert_eq!(kinds("a<=b==!c"),
               vec![TokenKind::Identifier("a".into()),
                    TokenKind::LessEqual,
                    TokenKind::Identifier("b".into()),
                    TokenKind::EqualEqual,
                    TokenKind::Bang,
                    TokenKind::Identifier("c".into()),
                    TokenKind::EndOfFile]);
}

#[test]
fn punctuation() {
    assert_eq!(kinds("(){},;"),
               vec![TokenKind::LParen,
                    TokenKind::RParen,
                    TokenKind::LBrace,
                    TokenKind::RBrace,
                    TokenKind::Comma,
                    TokenKind::Semicolon,
                    TokenKind::EndOfFile]);
}

#[test]
fn empty_source_is_just_end_of_file() {
    let tokens = scan("").unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EndOfFile);
    assert_eq!(tokens[0].position, Position::new(1, 1));
    assert_eq!(tokens[0].span, Span { start: 0, end: 0 });
}

#[test]
fn positions_and_spans() {
    let source = "let x = 1;\n  x = 22;";
    let tokens = scan(source).unwrap();

    let positions: Vec<_> = tokens.iter().map(|t| (t.position.line, t.position.column)).collect();
    assert_eq!(positions,
               vec![(1, 1), (1, 5), (1, 7), (1, 9), (1, 10), (2, 3), (2, 5), (2, 7), (2, 9), (2, 10)]);

    assert_eq!(tokens[7].span, Span { start: 17, end: 19 });
    assert_eq!(tokens[7].lexeme(source), "22");
}

#[test]
fn columns_count_characters_not_bytes() {
    let source = "@ ünïcode\nlet é = 1;";
    let err = scan(source).unwrap_err();
    assert_eq!(err, LexError::IllegalCharacter { character: 'é',
                                                 position:  Position::new(2, 5), });
}

#[test]
fn line_comments_run_to_end_of_line() {
    assert_eq!(kinds("1 @ 2 3\n4"),
               vec![TokenKind::Number(1.0), TokenKind::Number(4.0), TokenKind::EndOfFile]);
    assert_eq!(kinds("@ comment at end of input"), vec![TokenKind::EndOfFile]);
}

#[test]
fn block_comments_nest_and_track_lines() {
    let source = "#| outer\n #| inner\n |#\n still outer |# x";
    let tokens = scan(source).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier("x".into()));
    assert_eq!(tokens[0].position, Position::new(4, 17));
}

#[test]
fn unterminated_block_comment() {
    let err = scan("1 #| never closed").unwrap_err();
    assert_eq!(err, LexError::UnterminatedBlockComment { position: Position::new(1, 3) });
    assert_eq!(err.code(), 101);

    let err = scan("#| #| |#").unwrap_err();
    assert_eq!(err.code(), 101);
}

#[test]
fn malformed_block_comment() {
    let err = scan("x # y").unwrap_err();
    assert_eq!(err, LexError::MalformedBlockComment { position: Position::new(1, 3) });
    assert_eq!(err.code(), 101);

    assert!(matches!(scan("#"), Err(LexError::MalformedBlockComment { .. })));
}

#[test]
fn illegal_characters() {
    for source in ["$", "a & b", "a | b", "\"text\"", ".5"] {
        let err = scan(source).unwrap_err();
        assert_eq!(err.code(), 100, "{source}");
    }
}

#[test]
fn numbers_have_no_exponent_or_trailing_dot() {
    assert_eq!(kinds("1e5"),
               vec![TokenKind::Number(1.0), TokenKind::Identifier("e5".into()), TokenKind::EndOfFile]);
    assert!(scan("1.").is_err());
}
