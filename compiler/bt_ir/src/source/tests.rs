use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_vec_source_yields_in_order() {
    let mut source = VecSource::from_kinds(&[
        (TokenKind::LBracket, "["),
        (TokenKind::Name, "a"),
        (TokenKind::RBracket, "]"),
    ]);

    assert_eq!(source.next_token().kind, TokenKind::LBracket);
    assert_eq!(source.next_token().text, "a");
    assert_eq!(source.next_token().kind, TokenKind::RBracket);
    assert_eq!(source.handed_out(), 3);
}

#[test]
fn test_vec_source_infinite_eof_tail() {
    let mut source = VecSource::new(vec![Token::new(
        TokenKind::Name,
        "abc",
        Span::new(2, 5),
    )]);

    source.next_token();
    for _ in 0..5 {
        let token = source.next_token();
        assert!(token.is_eof());
        assert_eq!(token.span, Span::point(5));
    }
}

#[test]
fn test_empty_vec_source() {
    let mut source = VecSource::new(Vec::new());
    assert_eq!(source.next_token(), Token::eof(0));
}

#[test]
fn test_source_through_mut_reference() {
    fn pull<'src>(mut source: impl TokenSource<'src>) -> Token<'src> {
        source.next_token()
    }

    let mut source = VecSource::from_kinds(&[(TokenKind::Comma, ",")]);
    assert_eq!(pull(&mut source).kind, TokenKind::Comma);
    assert!(source.next_token().is_eof());
}
