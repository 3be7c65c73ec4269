//! Token types for the list language.
//!
//! A token is a `(kind, lexeme, span)` triple. The lexeme borrows from the
//! scanned text, which keeps `Token` `Copy`: the lookahead buffer, rollback and
//! match replay all move tokens by value.

mod kind;
mod set;

pub use kind::TokenKind;
pub use set::TokenSet;

use std::fmt;

use super::Span;

/// Lexeme carried by every end-of-input token.
pub const EOF_TEXT: &str = "<EOF>";

/// A token with its lexeme and its span in the source.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub span: Span,
}

impl<'src> Token<'src> {
    #[inline]
    pub const fn new(kind: TokenKind, text: &'src str, span: Span) -> Self {
        Token { kind, text, span }
    }

    /// The canonical end-of-input token, positioned at `offset`.
    #[inline]
    pub const fn eof(offset: u32) -> Self {
        Token {
            kind: TokenKind::Eof,
            text: EOF_TEXT,
            span: Span::point(offset),
        }
    }

    /// Create a token without a source location, for tests and synthetic input.
    pub const fn dummy(kind: TokenKind, text: &'src str) -> Self {
        Token {
            kind,
            text,
            span: Span::DUMMY,
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

/// Renders as `<'text', KIND>`.
impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<'{}', {}>", self.text, self.kind.name())
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self, self.span)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Token, TokenKind, TokenSet};
    // &str (16) + Span (8) + kind (1), padded.
    crate::static_assert_size!(Token<'static>, 32);
    crate::static_assert_size!(TokenKind, 1);
    crate::static_assert_size!(TokenSet, 1);
}

#[cfg(test)]
mod tests;
