//! Scanning errors.
//!
//! Recovery policy lives here, not in the parser: the scanner skips the
//! offending character, records a [`LexError`] and keeps going, so the token
//! stream it hands out never has holes.

use bt_diagnostic::{Diagnostic, ErrorCode};
use bt_ir::Span;

/// A character that starts no token.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("invalid character `{}`", .found.escape_default())]
pub struct LexError {
    pub span: Span,
    pub found: char,
}

impl LexError {
    pub fn new(span: Span, found: char) -> Self {
        LexError { span, found }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(ErrorCode::E0001)
            .with_message(self.to_string())
            .with_label(self.span, "not part of any token")
            .with_note("names are ASCII letters; the only punctuation is `[`, `]`, `,` and `=`")
    }
}

#[cfg(test)]
mod tests;
