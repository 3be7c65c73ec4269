use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_diagnostic_builder() {
    let diag = Diagnostic::error(ErrorCode::E1001)
        .with_message("expected `]`, found `=`")
        .with_label(Span::new(5, 6), "unexpected `=`")
        .with_secondary_label(Span::new(0, 1), "list opened here")
        .with_note("while recognizing `list`");

    assert_eq!(diag.code, ErrorCode::E1001);
    assert!(diag.is_error());
    assert_eq!(diag.labels.len(), 2);
    assert_eq!(diag.primary_span(), Some(Span::new(5, 6)));
    assert_eq!(diag.notes, vec!["while recognizing `list`".to_string()]);
}

#[test]
fn test_diagnostic_display() {
    let diag = Diagnostic::error(ErrorCode::E1002).with_message("unexpected end of input");
    assert_eq!(diag.to_string(), "error[E1002]: unexpected end of input");
}

#[test]
fn test_primary_span_skips_secondary_labels() {
    let diag = Diagnostic::warning(ErrorCode::E0001)
        .with_secondary_label(Span::new(0, 1), "context")
        .with_label(Span::new(3, 4), "here");
    assert!(!diag.is_error());
    assert_eq!(diag.primary_span(), Some(Span::new(3, 4)));
}

#[test]
fn test_no_labels_no_primary_span() {
    let diag = Diagnostic::error(ErrorCode::E1003);
    assert_eq!(diag.primary_span(), None);
}
