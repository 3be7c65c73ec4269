//! Scanner for the list language using logos.
//!
//! [`Lexer`] is a lazy [`TokenSource`]: each `next_token` call scans exactly
//! one more token, so the parser's lookahead decides how much of the input is
//! ever looked at. [`lex`] drains a whole input eagerly for dumps and tests.

mod lex_error;

use bt_ir::{Span, Token, TokenKind, TokenSource};
use logos::Logos;
use tracing::trace;

pub use lex_error::LexError;

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
enum RawToken {
    #[regex(r"[a-zA-Z]+")]
    Name,
    #[token(",")]
    Comma,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("=")]
    Equals,
}

impl RawToken {
    fn kind(self) -> TokenKind {
        match self {
            RawToken::Name => TokenKind::Name,
            RawToken::Comma => TokenKind::Comma,
            RawToken::LBracket => TokenKind::LBracket,
            RawToken::RBracket => TokenKind::RBracket,
            RawToken::Equals => TokenKind::Equals,
        }
    }
}

/// Spans past `u32::MAX` collapse onto the last representable offset.
fn span_of(range: std::ops::Range<usize>) -> Span {
    Span::try_from_range(range).unwrap_or(Span::point(u32::MAX))
}

/// Lazy scanner over one source string.
pub struct Lexer<'src> {
    raw: logos::Lexer<'src, RawToken>,
    eof: Token<'src>,
    errors: Vec<LexError>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Lexer {
            raw: RawToken::lexer(source),
            eof: Token::eof(span_of(source.len()..source.len()).start),
            errors: Vec::new(),
        }
    }

    /// Characters skipped so far, in source order.
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Take the recorded errors, leaving none behind.
    pub fn take_errors(&mut self) -> Vec<LexError> {
        std::mem::take(&mut self.errors)
    }
}

impl<'src> TokenSource<'src> for Lexer<'src> {
    fn next_token(&mut self) -> Token<'src> {
        while let Some(result) = self.raw.next() {
            let span = span_of(self.raw.span());
            let slice = self.raw.slice();
            match result {
                Ok(raw) => return Token::new(raw.kind(), slice, span),
                Err(()) => {
                    for (offset, found) in slice.char_indices() {
                        let start = span.start as usize + offset;
                        let span = span_of(start..start + found.len_utf8());
                        trace!(%span, ?found, "skipping invalid character");
                        self.errors.push(LexError::new(span, found));
                    }
                }
            }
        }
        self.eof
    }
}

/// Scan `source` to the first end-of-input token (included).
pub fn lex(source: &str) -> (Vec<Token<'_>>, Vec<LexError>) {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        tokens.push(token);
        if token.is_eof() {
            break;
        }
    }
    (tokens, lexer.take_errors())
}

#[cfg(test)]
mod tests;
