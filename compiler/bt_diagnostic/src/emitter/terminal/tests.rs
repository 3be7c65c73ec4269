use super::*;
use crate::ErrorCode;
use pretty_assertions::assert_eq;

fn sample_diagnostic() -> Diagnostic {
    Diagnostic::error(ErrorCode::E1002)
        .with_message("expected name or `[`, found end of input")
        .with_label(Span::point(3), "expected name or `[`")
        .with_note("while recognizing `list`")
}

fn render(diag: &Diagnostic, source: Option<&str>, colors: bool) -> String {
    let mode = if colors {
        ColorMode::Always
    } else {
        ColorMode::Never
    };
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), mode, false);
    if let Some(src) = source {
        emitter = emitter.with_source(src);
    }
    emitter.emit(diag);
    emitter.flush();
    String::from_utf8(emitter.into_inner()).unwrap()
}

#[test]
fn test_terminal_emitter_no_color_no_source() {
    let text = render(&sample_diagnostic(), None, false);
    assert!(text.starts_with("error[E1002]: expected name or `[`"));
    assert!(text.contains("--> 3..3: expected name or `[`"));
    assert!(text.contains("= note: while recognizing `list`"));
    assert!(!text.contains("\x1b["));
}

#[test]
fn test_terminal_emitter_snippet() {
    let text = render(&sample_diagnostic(), Some("[a,"), false);
    let expected = "\
error[E1002]: expected name or `[`, found end of input
 --> 1:4
  |
1 | [a,
  |    ^ expected name or `[`
  = note: while recognizing `list`

";
    assert_eq!(text, expected);
}

#[test]
fn test_terminal_emitter_snippet_on_second_line() {
    let diag = Diagnostic::error(ErrorCode::E1001)
        .with_message("expected end of input, found `=`")
        .with_label(Span::new(9, 10), "unexpected `=`");
    let text = render(&diag, Some("[a, b]\n  = [c]"), false);
    assert!(text.contains(" --> 2:3\n"));
    assert!(text.contains("2 |   = [c]\n"));
    assert!(text.contains("  |   ^ unexpected `=`\n"));
}

#[test]
fn test_terminal_emitter_with_color() {
    let text = render(&sample_diagnostic(), Some("[a,"), true);
    assert!(text.contains("\x1b["));
    assert!(text.contains("E1002"));
}

#[test]
fn test_span_outside_source_falls_back() {
    let diag = Diagnostic::error(ErrorCode::E1001)
        .with_message("oops")
        .with_label(Span::new(40, 41), "here");
    let text = render(&diag, Some("[a]"), false);
    assert!(text.contains("--> 40..41: here"));
}

#[test]
fn test_emit_summary() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    emitter.emit_summary(0);
    emitter.emit_summary(1);
    emitter.emit_summary(2);
    let text = String::from_utf8(emitter.into_inner()).unwrap();
    assert_eq!(
        text,
        "error: input rejected due to previous error\n\
         error: input rejected due to 2 previous errors\n"
    );
}

#[test]
fn test_emit_all() {
    let diags = vec![
        Diagnostic::error(ErrorCode::E0001).with_message("invalid character `1`"),
        Diagnostic::error(ErrorCode::E1001).with_message("unexpected token"),
    ];
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    emitter.emit_all(&diags);
    let text = String::from_utf8(emitter.into_inner()).unwrap();
    assert!(text.contains("[E0001]"));
    assert!(text.contains("[E1001]"));
}
