use super::*;

#[test]
fn test_lex_error_message() {
    let err = LexError::new(Span::new(3, 4), '1');
    assert_eq!(err.to_string(), "invalid character `1`");

    let tab = LexError::new(Span::new(0, 1), '\u{7}');
    assert_eq!(tab.to_string(), "invalid character `\\u{7}`");
}

#[test]
fn test_lex_error_diagnostic() {
    let diag = LexError::new(Span::new(3, 4), '#').to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E0001);
    assert_eq!(diag.message, "invalid character `#`");
    assert_eq!(diag.primary_span(), Some(Span::new(3, 4)));
}
