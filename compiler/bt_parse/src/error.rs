//! Parse errors and their diagnostics.
//!
//! Errors own their data (`'static`), so they outlive the source text and
//! the parser that produced them.

use bt_diagnostic::{Diagnostic, ErrorCode};
use bt_ir::{Span, Token, TokenKind, TokenSet};
use bt_lexer::LexError;

/// The input stopped matching the grammar.
///
/// Reported at the furthest position any alternative reached, listing every
/// token kind that would have let some alternative continue there.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{}", describe(.expected, .found, .lexeme))]
pub struct SyntaxError {
    /// Input-wide token index of the offending token.
    pub position: usize,
    pub found: TokenKind,
    pub lexeme: String,
    pub span: Span,
    pub expected: TokenSet,
}

#[allow(clippy::trivially_copy_pass_by_ref)] // called with field references from the derived Display
fn describe(expected: &TokenSet, found: &TokenKind, lexeme: &str) -> String {
    let found = if *found == TokenKind::Eof {
        found.display_name().to_string()
    } else {
        format!("`{lexeme}`")
    };
    if expected.is_empty() {
        format!("unexpected {found}")
    } else {
        format!("expected {expected}, found {found}")
    }
}

impl SyntaxError {
    pub fn new(position: usize, found: Token<'_>, expected: TokenSet) -> Self {
        SyntaxError {
            position,
            found: found.kind,
            lexeme: found.text.to_string(),
            span: found.span,
            expected,
        }
    }

    /// The input ended while the grammar still expected more.
    pub fn is_unexpected_eof(&self) -> bool {
        self.found == TokenKind::Eof
    }

    pub fn code(&self) -> ErrorCode {
        if self.is_unexpected_eof() {
            ErrorCode::E1002
        } else {
            ErrorCode::E1001
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = if self.expected.is_empty() {
            "unexpected token".to_string()
        } else {
            format!("expected {}", self.expected)
        };
        Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_label(self.span, label)
    }
}

/// Why a source string was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Lexical(#[from] LexError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// Nested bodies went deeper than the configured limit.
    #[error("input nests deeper than {limit} levels")]
    NestingLimit {
        limit: usize,
        position: usize,
        span: Span,
    },
}

impl ParseError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::Lexical(_) => ErrorCode::E0001,
            ParseError::Syntax(err) => err.code(),
            ParseError::NestingLimit { .. } => ErrorCode::E1003,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            ParseError::Lexical(err) => err.span,
            ParseError::Syntax(err) => err.span,
            ParseError::NestingLimit { span, .. } => *span,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ParseError::Lexical(err) => err.to_diagnostic(),
            ParseError::Syntax(err) => err.to_diagnostic(),
            ParseError::NestingLimit { span, .. } => Diagnostic::error(ErrorCode::E1003)
                .with_message(self.to_string())
                .with_label(*span, "nesting limit reached here")
                .with_note("raise the limit with BT_MAX_DEPTH"),
        }
    }
}

/// A top-level rule name no grammar entry answers to.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown rule `{0}` (expected `stat`, `list` or `assign`)")]
pub struct UnknownRule(pub String);
