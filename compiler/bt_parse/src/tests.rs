use super::*;
use bt_diagnostic::ErrorCode;
use pretty_assertions::assert_eq;

#[test]
fn test_parse_source_accepts_statement() {
    let m = parse_source("[a, b=c]", TopRule::Stat, ParseConfig::default());
    let m = m.unwrap_or_else(|err| panic!("rejected: {err}"));
    assert_eq!(m.lexemes(), vec!["[", "a", ",", "b", "=", "c", "]", "<EOF>"]);
}

#[test]
fn test_lexical_error_wins_over_syntax() {
    let err = parse_source("[a, 1", TopRule::Stat, ParseConfig::default())
        .err()
        .map(|e| e.code());
    assert_eq!(err, Some(ErrorCode::E0001));
}

#[test]
fn test_lexical_error_rejects_otherwise_valid_input() {
    let result = parse_source("[a, #b]", TopRule::Stat, ParseConfig::default());
    assert!(matches!(result, Err(ParseError::Lexical(e)) if e.found == '#'));
}

#[test]
fn test_syntax_error_when_scanning_is_clean() {
    let result = parse_source("[a,", TopRule::List, ParseConfig::default());
    assert_eq!(result.err().map(|e| e.code()), Some(ErrorCode::E1002));
}
