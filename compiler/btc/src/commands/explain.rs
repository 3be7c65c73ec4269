//! The `explain` command: describe an error code.

use std::io::{self, Write};

use bt_diagnostic::ErrorCode;

/// Print the description of `code`, e.g. `E1002` or `e1002`.
///
/// Returns `false` for codes that do not exist.
pub fn explain(code: &str, out: &mut impl Write, err: &mut impl Write) -> io::Result<bool> {
    let Some(code) = ErrorCode::from_str_opt(code) else {
        writeln!(err, "Unknown error code: {code}")?;
        let known: Vec<&str> = ErrorCode::ALL.iter().map(ErrorCode::as_str).collect();
        writeln!(err, "Known codes: {}", known.join(", "))?;
        return Ok(false);
    };
    writeln!(out, "{code}: {}", code.description())?;
    Ok(true)
}
