//! Lookahead buffer over a [`TokenSource`].
//!
//! Tokens are pulled from the source only when some lookahead or consume
//! needs them, and stay buffered until the engine compacts. Positions handed
//! out by [`LookaheadBuffer::mark`] are indices into the live buffer; they
//! stay valid until the next [`discard_consumed`](LookaheadBuffer::discard_consumed).
//! [`LookaheadBuffer::absolute`] turns one into a stable input-wide index for
//! reporting.

use bt_ir::{Token, TokenKind, TokenSource};

pub struct LookaheadBuffer<'src, S> {
    source: S,
    tokens: Vec<Token<'src>>,
    /// Index of the next token to consume.
    p: usize,
    /// Tokens discarded by earlier compactions.
    base: usize,
    pulled: usize,
}

impl<'src, S: TokenSource<'src>> LookaheadBuffer<'src, S> {
    pub fn new(source: S) -> Self {
        LookaheadBuffer {
            source,
            tokens: Vec::new(),
            p: 0,
            base: 0,
            pulled: 0,
        }
    }

    /// The token `k` positions ahead of the cursor (`k = 1` is the next one).
    ///
    /// # Panics
    ///
    /// Panics if `k` is zero.
    pub fn lookahead(&mut self, k: usize) -> Token<'src> {
        assert!(k >= 1, "lookahead distance starts at 1");
        self.sync(k);
        self.tokens[self.p + k - 1]
    }

    /// Kind of [`lookahead(k)`](Self::lookahead).
    pub fn la(&mut self, k: usize) -> TokenKind {
        self.lookahead(k).kind
    }

    /// Advance past the next token, pulling it first if needed.
    pub fn consume(&mut self) {
        self.sync(1);
        self.p += 1;
    }

    /// Current cursor position, to hand back to [`seek`](Self::seek).
    #[inline]
    pub fn mark(&self) -> usize {
        self.p
    }

    /// Move the cursor to a previously marked position.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies beyond the buffered tokens.
    pub fn seek(&mut self, pos: usize) {
        assert!(
            pos <= self.tokens.len(),
            "seek to {pos} past {} buffered tokens",
            self.tokens.len()
        );
        self.p = pos;
    }

    /// Every buffered token has been consumed.
    #[inline]
    pub fn at_end(&self) -> bool {
        self.p == self.tokens.len()
    }

    /// Number of tokens currently buffered.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Input-wide index of buffer position `pos`.
    #[inline]
    pub fn absolute(&self, pos: usize) -> usize {
        self.base + pos
    }

    /// The buffered token at `pos`, if any.
    pub fn get(&self, pos: usize) -> Option<Token<'src>> {
        self.tokens.get(pos).copied()
    }

    /// Buffered tokens in `start..end`.
    pub fn slice(&self, start: usize, end: usize) -> &[Token<'src>] {
        &self.tokens[start..end]
    }

    /// Total tokens ever taken from the source.
    #[inline]
    pub fn pulled(&self) -> usize {
        self.pulled
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }

    /// Drop every buffered token and restart positions at zero.
    ///
    /// Only valid once everything buffered has been consumed; the engine
    /// calls this from its compaction step alone.
    pub(crate) fn discard_consumed(&mut self) {
        debug_assert!(self.at_end(), "discarding unconsumed tokens");
        self.base += self.tokens.len();
        self.tokens.clear();
        self.p = 0;
    }

    /// Ensure tokens `p..p + k` are buffered.
    fn sync(&mut self, k: usize) {
        let needed = self.p + k;
        if needed > self.tokens.len() {
            self.fill(needed - self.tokens.len());
        }
    }

    fn fill(&mut self, n: usize) {
        self.tokens.reserve(n);
        for _ in 0..n {
            self.tokens.push(self.source.next_token());
            self.pulled += 1;
        }
    }
}
