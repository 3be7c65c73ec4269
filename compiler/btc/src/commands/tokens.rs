//! The `tokens` command: dump the scanner's output.

use std::io::{self, Write};

use bt_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};

/// Print one token per line with its span, then any lexical diagnostics.
///
/// Returns whether scanning was clean.
pub fn tokens(
    input: &str,
    color: ColorMode,
    is_tty: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<bool> {
    let (tokens, errors) = bt_lexer::lex(input);
    for token in &tokens {
        writeln!(out, "{:<16} {}", token.to_string(), token.span)?;
    }

    if !errors.is_empty() {
        let mut emitter = TerminalEmitter::with_color_mode(&mut *err, color, is_tty).with_source(input);
        for error in &errors {
            emitter.emit(&error.to_diagnostic());
        }
        emitter.emit_summary(errors.len());
        emitter.flush();
    }
    Ok(errors.is_empty())
}
