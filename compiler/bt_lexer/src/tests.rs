use super::*;
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).0.into_iter().map(|t| t.kind).collect()
}

#[test]
fn test_lex_nested_list() {
    use TokenKind::{Comma, Eof, Equals, LBracket, Name, RBracket};
    assert_eq!(
        kinds("[a, b=c, [d, e]]"),
        vec![
            LBracket, Name, Comma, Name, Equals, Name, Comma, LBracket, Name, Comma, Name,
            RBracket, RBracket, Eof
        ]
    );
}

#[test]
fn test_lexeme_and_span() {
    let (tokens, errors) = lex("[ abc ]");
    assert!(errors.is_empty());
    assert_eq!(tokens[1].text, "abc");
    assert_eq!(tokens[1].span, Span::new(2, 5));
    assert_eq!(tokens[2].span, Span::new(6, 7));
    assert_eq!(tokens[3], Token::eof(7));
}

#[test]
fn test_names_are_maximal_letter_runs() {
    let (tokens, _) = lex("abC de");
    assert_eq!(tokens[0].text, "abC");
    assert_eq!(tokens[1].text, "de");
}

#[test]
fn test_whitespace_only_is_just_eof() {
    assert_eq!(kinds(" \t\r\n "), vec![TokenKind::Eof]);
    assert_eq!(kinds(""), vec![TokenKind::Eof]);
}

#[test]
fn test_infinite_eof_tail() {
    let mut lexer = Lexer::new("a");
    assert_eq!(lexer.next_token().kind, TokenKind::Name);
    for _ in 0..4 {
        assert_eq!(lexer.next_token(), Token::eof(1));
    }
}

#[test]
fn test_invalid_character_is_skipped_and_recorded() {
    let (tokens, errors) = lex("[a, 1b]");
    let texts: Vec<&str> = tokens.iter().map(|t| t.text).collect();
    assert_eq!(texts, vec!["[", "a", ",", "b", "]", "<EOF>"]);
    assert_eq!(errors, vec![LexError::new(Span::new(4, 5), '1')]);
}

#[test]
fn test_lexer_is_lazy() {
    let mut lexer = Lexer::new("a # b");
    assert_eq!(lexer.next_token().text, "a");
    // The `#` has not been scanned yet.
    assert!(!lexer.has_errors());
    assert_eq!(lexer.next_token().text, "b");
    assert_eq!(lexer.errors().len(), 1);
    assert_eq!(lexer.take_errors().len(), 1);
    assert!(!lexer.has_errors());
}

mod proptest_lexer {
    use super::super::lex;
    use bt_ir::TokenKind;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn lexemes_reassemble_without_whitespace(
            source in "[a-z\\[\\],= ]{0,64}"
        ) {
            let (tokens, errors) = lex(&source);
            prop_assert!(errors.is_empty());
            prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
            let joined: String = tokens
                .iter()
                .filter(|t| !t.is_eof())
                .map(|t| t.text)
                .collect();
            let stripped: String = source.chars().filter(|c| *c != ' ').collect();
            prop_assert_eq!(joined, stripped);
        }

        #[test]
        fn spans_index_the_source(source in "[a-zA-Z\\[\\],= \\n]{0,64}") {
            let (tokens, _) = lex(&source);
            for token in tokens.iter().filter(|t| !t.is_eof()) {
                prop_assert_eq!(&source[token.span.to_range()], token.text);
            }
        }

        #[test]
        fn every_bad_character_is_reported(source in "[a-z0-9 ]{0,32}") {
            let (_, errors) = lex(&source);
            let digits = source.chars().filter(char::is_ascii_digit).count();
            prop_assert_eq!(errors.len(), digits);
        }
    }
}
