//! The token-source contract.
//!
//! The parser never scans text itself. It pulls tokens one at a time through
//! [`TokenSource`], and only as many as its lookahead actually needs.

use super::{Span, Token, TokenKind};

/// A producer of tokens, pulled one at a time.
///
/// # Contract
///
/// - Every call returns a token; there is no "absent" value.
/// - Once input is exhausted, every further call returns an end-of-input
///   token ([`TokenKind::Eof`]). The tail is infinite.
/// - Scanning problems (unrecognized characters) are the source's own
///   business to record and recover from; they never surface as a missing
///   token.
pub trait TokenSource<'src> {
    fn next_token(&mut self) -> Token<'src>;
}

impl<'src, S: TokenSource<'src> + ?Sized> TokenSource<'src> for &mut S {
    #[inline]
    fn next_token(&mut self) -> Token<'src> {
        (**self).next_token()
    }
}

/// A token source over a pre-built token sequence.
///
/// Any end-of-input tokens inside `tokens` are returned like any other token;
/// once the sequence runs out, an end-of-input token positioned just after
/// the last token is returned forever.
#[derive(Clone, Debug)]
pub struct VecSource<'src> {
    tokens: Vec<Token<'src>>,
    pos: usize,
    eof: Token<'src>,
}

impl<'src> VecSource<'src> {
    pub fn new(tokens: Vec<Token<'src>>) -> Self {
        let end = tokens.last().map_or(0, |t| t.span.end);
        VecSource {
            tokens,
            pos: 0,
            eof: Token::eof(end),
        }
    }

    /// Build a source from `(kind, text)` pairs with dummy spans.
    pub fn from_kinds(pairs: &[(TokenKind, &'src str)]) -> Self {
        Self::new(
            pairs
                .iter()
                .map(|&(kind, text)| Token::new(kind, text, Span::DUMMY))
                .collect(),
        )
    }

    /// Number of tokens handed out so far, end-of-input tail included.
    pub fn handed_out(&self) -> usize {
        self.pos
    }
}

impl<'src> TokenSource<'src> for VecSource<'src> {
    fn next_token(&mut self) -> Token<'src> {
        let token = self.tokens.get(self.pos).copied().unwrap_or(self.eof);
        self.pos += 1;
        token
    }
}

#[cfg(test)]
mod tests;
