use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_discriminant_index_uniqueness() {
    let mut seen = [false; 8];
    for kind in TokenKind::ALL {
        let idx = kind.discriminant_index() as usize;
        assert!(!seen[idx], "duplicate discriminant index {idx} for {kind:?}");
        seen[idx] = true;
    }
}

#[test]
fn test_token_display_matches_dump_format() {
    let token = Token::dummy(TokenKind::Name, "abc");
    assert_eq!(token.to_string(), "<'abc', NAME>");

    let eof = Token::eof(12);
    assert_eq!(eof.to_string(), "<'<EOF>', EOF>");
    assert_eq!(eof.span, Span::point(12));
}

#[test]
fn test_token_is_copy() {
    let a = Token::dummy(TokenKind::LBracket, "[");
    let b = a;
    assert_eq!(a, b);
}

#[test]
fn test_token_set_membership() {
    let set = TokenSet::new()
        .with(TokenKind::Name)
        .with(TokenKind::LBracket);

    assert!(set.contains(TokenKind::Name));
    assert!(set.contains(TokenKind::LBracket));
    assert!(!set.contains(TokenKind::Eof));
    assert_eq!(set.count(), 2);
    assert!(!set.is_empty());
    assert!(TokenSet::new().is_empty());
}

#[test]
fn test_token_set_union_and_insert() {
    let mut set = TokenSet::single(TokenKind::Comma);
    set.insert(TokenKind::RBracket);
    let merged = set.union(TokenSet::single(TokenKind::Comma));
    assert_eq!(merged, set);
    assert_eq!(
        merged.iter().collect::<Vec<_>>(),
        vec![TokenKind::Comma, TokenKind::RBracket]
    );
}

#[test]
fn test_token_set_format_expected() {
    assert_eq!(TokenSet::new().format_expected(), "nothing");
    assert_eq!(TokenSet::single(TokenKind::Eof).format_expected(), "end of input");

    let two: TokenSet = [TokenKind::LBracket, TokenKind::Name].into_iter().collect();
    assert_eq!(two.format_expected(), "name or `[`");

    let three = TokenSet::new()
        .with(TokenKind::Comma)
        .with(TokenKind::RBracket)
        .with(TokenKind::Equals);
    assert_eq!(three.to_string(), "`,`, `]`, or `=`");
}
