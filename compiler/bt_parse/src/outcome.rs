//! The result of a successful top-level recognition.

use std::ops::Range;

use bt_ir::{Span, Token};

/// Tokens a rule consumed, in order, with their input-wide position.
///
/// Copied out of the lookahead buffer before the final commit, so a match
/// stays valid after the buffer compacts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Match<'src> {
    /// Input-wide index of the first consumed token.
    pub start: usize,
    pub tokens: Vec<Token<'src>>,
}

impl<'src> Match<'src> {
    pub fn new(start: usize, tokens: Vec<Token<'src>>) -> Self {
        Match { start, tokens }
    }

    /// Input-wide index one past the last consumed token.
    pub fn end(&self) -> usize {
        self.start + self.tokens.len()
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Source region covered, from the first token to the last.
    pub fn span(&self) -> Option<Span> {
        let first = self.tokens.first()?;
        let last = self.tokens.last()?;
        Some(first.span.merge(last.span))
    }

    /// Replay the consumed tokens.
    pub fn replay(&self) -> impl Iterator<Item = Token<'src>> + '_ {
        self.tokens.iter().copied()
    }

    pub fn lexemes(&self) -> Vec<&'src str> {
        self.tokens.iter().map(|t| t.text).collect()
    }
}
