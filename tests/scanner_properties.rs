//! Property tests for the scanner over generated, well-formed token streams.

use april::interpreter::lexer::{TokenKind, scan};
use proptest::prelude::*;

const OPERATORS: &[&str] = &["=", "==", "!", "!=", "<", "<=", ">", ">=", "&&", "||", "+", "-", "*",
                             "/", "%", "(", ")", "{", "}", ",", ";"];

fn is_keyword(s: &str) -> bool {
    matches!(s, "let" | "const" | "fn" | "for" | "while")
}

fn identifier_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z_][a-z0-9_]{0,10}").expect("valid regex")
                                                       .prop_filter("not a keyword",
                                                                    |s| !is_keyword(s))
}

fn number_strategy() -> impl Strategy<Value = String> {
    prop_oneof![(0u32..100_000).prop_map(|n| n.to_string()),
                (0u32..1000, 0u32..1000).prop_map(|(whole, frac)| format!("{whole}.{frac}"))]
}

fn operator_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(OPERATORS).prop_map(str::to_string)
}

fn piece_strategy() -> impl Strategy<Value = String> {
    prop_oneof![identifier_strategy(), number_strategy(), operator_strategy()]
}

fn pieces_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(piece_strategy(), 0..40)
}

proptest! {
    #[test]
    fn lexemes_reproduce_the_pieces(pieces in pieces_strategy()) {
        let source = pieces.join(" ");
        let tokens = scan(&source).expect("generated source scans");

        prop_assert_eq!(tokens.len(), pieces.len() + 1);
        for (token, piece) in tokens.iter().zip(&pieces) {
            prop_assert_eq!(token.lexeme(&source), piece.as_str());
        }
        prop_assert_eq!(&tokens[pieces.len()].kind, &TokenKind::EndOfFile);
    }

    #[test]
    fn scanning_is_deterministic(pieces in pieces_strategy()) {
        let source = pieces.join("\n");
        prop_assert_eq!(scan(&source), scan(&source));
    }

    #[test]
    fn positions_are_increasing(pieces in pieces_strategy()) {
        let source = pieces.join(" \n ");
        let tokens = scan(&source).expect("generated source scans");

        for pair in tokens.windows(2) {
            let (a, b) = (pair[0].position, pair[1].position);
            prop_assert!((a.line, a.column) < (b.line, b.column));
            prop_assert!(pair[0].span.end <= pair[1].span.start);
        }
    }

    #[test]
    fn numbers_keep_their_value(n in 0u32..1_000_000) {
        let tokens = scan(&n.to_string()).expect("number scans");
        prop_assert_eq!(&tokens[0].kind, &TokenKind::Number(f64::from(n)));
    }
}
