//! The speculative parsing engine.
//!
//! [`Parser`] owns a [`LookaheadBuffer`], the [`SpeculationStack`] and the
//! [`MemoTables`]. Grammar rules are plain methods returning `bool`; the
//! combinators here give them backtracking:
//!
//! - every attempt runs between an `open` and exactly one `abandon` (rewind)
//!   or `commit` (keep the cursor);
//! - a committed attempt at depth zero with every buffered token consumed
//!   compacts the buffer and clears all memo tables in the same step;
//! - while speculating, memoized rules record their outcome per position and
//!   replay it instead of re-running their body.
//!
//! Failures are values, not errors. The furthest point any terminal match
//! reached, with every kind expected there, is kept for the top-level error.
//! Memo entries carry the furthest failure their body reached, so a replayed
//! outcome reports the same error as a re-run would.

use bt_ir::{Span, Token, TokenKind, TokenSet, TokenSource};
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::buffer::LookaheadBuffer;
use crate::memo::{FailurePoint, MemoEntry, MemoTables, RuleId};
use crate::speculation::SpeculationStack;
use crate::stack::ensure_sufficient_stack;
use crate::{Match, ParseConfig, ParseError, ParseStats, SyntaxError};

/// A grammar procedure: consume input and report whether it matched.
pub type Rule<'src, S> = fn(&mut Parser<'src, S>) -> bool;

/// Furthest terminal mismatch seen during one recognition.
#[derive(Default)]
struct FurthestFailure<'src> {
    at: Option<(usize, Token<'src>)>,
    expected: TokenSet,
}

impl<'src> FurthestFailure<'src> {
    fn record(&mut self, position: usize, found: Token<'src>, expected: TokenSet) {
        match self.at {
            Some((furthest, _)) if position < furthest => {}
            Some((furthest, _)) if position == furthest => {
                self.expected = self.expected.union(expected);
            }
            _ => {
                self.at = Some((position, found));
                self.expected = expected;
            }
        }
    }

    fn merge(&mut self, other: FurthestFailure<'src>) {
        if let Some((position, found)) = other.at {
            self.record(position, found, other.expected);
        }
    }

    fn point(&self) -> Option<FailurePoint> {
        self.at.map(|(position, _)| FailurePoint {
            position,
            expected: self.expected,
        })
    }
}

pub struct Parser<'src, S> {
    buffer: LookaheadBuffer<'src, S>,
    marks: SpeculationStack,
    memo: MemoTables,
    config: ParseConfig,
    furthest: FurthestFailure<'src>,
    rule_bodies: FxHashMap<RuleId, usize>,
    compactions: usize,
    /// Nested bodies currently running.
    depth: usize,
    /// Where the depth limit was first hit in this recognition.
    nesting_limit: Option<(usize, Span)>,
}

impl<'src, S: TokenSource<'src>> Parser<'src, S> {
    pub fn new(source: S) -> Self {
        Self::with_config(source, ParseConfig::default())
    }

    pub fn with_config(source: S, config: ParseConfig) -> Self {
        Parser {
            buffer: LookaheadBuffer::new(source),
            marks: SpeculationStack::new(),
            memo: MemoTables::new(),
            config,
            furthest: FurthestFailure::default(),
            rule_bodies: FxHashMap::default(),
            compactions: 0,
            depth: 0,
            nesting_limit: None,
        }
    }

    // === Cursor ===

    /// The token `k` positions ahead (`k >= 1`).
    #[inline]
    pub fn lookahead(&mut self, k: usize) -> Token<'src> {
        self.buffer.lookahead(k)
    }

    #[inline]
    pub fn la(&mut self, k: usize) -> TokenKind {
        self.buffer.la(k)
    }

    /// Buffer-relative cursor position.
    #[inline]
    pub fn position(&self) -> usize {
        self.buffer.mark()
    }

    /// Input-wide cursor position.
    #[inline]
    pub fn absolute_position(&self) -> usize {
        self.buffer.absolute(self.buffer.mark())
    }

    // === Speculation ===

    #[inline]
    pub fn is_speculating(&self) -> bool {
        !self.marks.is_empty()
    }

    pub fn speculation_depth(&self) -> usize {
        self.marks.depth()
    }

    /// Push the current cursor as a rollback point.
    pub fn open(&mut self) {
        let mark = self.buffer.mark();
        self.marks.open(mark);
        trace!(depth = self.marks.depth(), pos = mark, "open");
    }

    /// Pop the innermost rollback point and rewind to it.
    pub fn abandon(&mut self) {
        let mark = self.marks.abandon();
        trace!(depth = self.marks.depth(), from = self.buffer.mark(), to = mark, "abandon");
        self.buffer.seek(mark);
    }

    /// Pop the innermost rollback point, keeping the cursor.
    ///
    /// The outermost commit compacts once every buffered token is consumed,
    /// so buffer positions taken before it must not be reused afterwards.
    pub fn commit(&mut self) {
        let mark = self.marks.commit();
        trace!(depth = self.marks.depth(), from = mark, to = self.buffer.mark(), "commit");
        if self.can_compact() && !self.buffer.is_empty() {
            self.compact();
        }
    }

    /// Nothing is open and nothing buffered is left unconsumed.
    pub fn can_compact(&self) -> bool {
        !self.is_speculating() && self.buffer.at_end()
    }

    /// Discard every buffered token and clear every memo table.
    ///
    /// # Panics
    ///
    /// Panics unless [`can_compact`](Self::can_compact) holds.
    pub fn compact(&mut self) {
        assert!(
            self.can_compact(),
            "compaction while speculating or with unconsumed tokens"
        );
        let dropped = self.buffer.len();
        self.buffer.discard_consumed();
        self.memo.clear();
        self.compactions += 1;
        debug!(dropped, base = self.buffer.absolute(0), "compacted");
    }

    // === Combinators ===

    /// Run `attempt` as one speculation: kept if it matches, rewound if not.
    pub fn speculate(&mut self, attempt: impl FnOnce(&mut Self) -> bool) -> bool {
        self.open();
        if attempt(self) {
            self.commit();
            true
        } else {
            self.abandon();
            false
        }
    }

    /// Match the next token if it has the given kind.
    pub fn match_token(&mut self, kind: TokenKind) -> bool {
        self.open();
        let token = self.buffer.lookahead(1);
        if token.kind == kind {
            self.buffer.consume();
            trace!(%token, "match");
            self.commit();
            true
        } else {
            let position = self.absolute_position();
            self.furthest.record(position, token, TokenSet::single(kind));
            self.abandon();
            false
        }
    }

    /// Note that `kind` would have been accepted here, without consuming.
    fn expect_here(&mut self, kind: TokenKind) {
        let token = self.buffer.lookahead(1);
        let position = self.absolute_position();
        self.furthest.record(position, token, TokenSet::single(kind));
    }

    /// Every step in order; all or nothing.
    pub fn sequence(&mut self, steps: &[Rule<'src, S>]) -> bool {
        self.speculate(|p| steps.iter().all(|step| step(p)))
    }

    /// The first alternative that matches, each tried from the same start.
    pub fn one_of(&mut self, alternatives: &[Rule<'src, S>]) -> bool {
        alternatives.iter().any(|alt| self.speculate(*alt))
    }

    /// Try `clause`; the enclosing rule goes on either way.
    ///
    /// Returns whether the clause matched.
    pub fn optional(&mut self, clause: impl FnOnce(&mut Self) -> bool) -> bool {
        self.speculate(clause)
    }

    /// `element (delimiter element)*`.
    ///
    /// Once a delimiter is consumed an element must follow; otherwise the
    /// whole repetition fails.
    pub fn separated(&mut self, element: Rule<'src, S>, delimiter: TokenKind) -> bool {
        self.speculate(|p| {
            if !element(p) {
                return false;
            }
            loop {
                if p.buffer.la(1) != delimiter {
                    p.expect_here(delimiter);
                    return true;
                }
                if !(p.match_token(delimiter) && element(p)) {
                    return false;
                }
            }
        })
    }

    /// Run a rule body through its memo table.
    ///
    /// While speculating, a recorded outcome at the current position is
    /// replayed: success moves the cursor to the recorded end without running
    /// `body`, failure returns `false` at once. Either way the furthest
    /// failure the body reached is merged back in. Otherwise `body` runs as
    /// its own speculation and its outcome is recorded.
    pub fn memoized(&mut self, rule: RuleId, body: impl FnOnce(&mut Self) -> bool) -> bool {
        let start = self.buffer.mark();
        let use_memo = self.config.memoize && self.is_speculating();

        if use_memo {
            match self.memo.lookup(rule, start) {
                Some(MemoEntry::Parsed { end, furthest }) => {
                    debug!(%rule, pos = start, end, "memo hit: parsed");
                    self.replay_failure(furthest);
                    self.buffer.seek(end);
                    return true;
                }
                Some(MemoEntry::Failed { furthest }) => {
                    debug!(%rule, pos = start, "memo hit: failed");
                    self.replay_failure(furthest);
                    return false;
                }
                None => {}
            }
        }

        *self.rule_bodies.entry(rule).or_default() += 1;
        if !use_memo {
            return self.speculate(body);
        }

        // Collect the body's own furthest failure, then fold the caller's back in.
        let outer = std::mem::take(&mut self.furthest);
        let matched = self.speculate(body);
        let furthest = self.furthest.point();
        self.furthest.merge(outer);

        // Outcomes cut short by the depth limit say nothing about the input.
        if self.nesting_limit.is_none() {
            let entry = if matched {
                MemoEntry::Parsed {
                    end: self.buffer.mark(),
                    furthest,
                }
            } else {
                MemoEntry::Failed { furthest }
            };
            self.memo.record(rule, start, entry);
        }
        matched
    }

    /// Merge a memoized failure point into the current recognition.
    fn replay_failure(&mut self, point: Option<FailurePoint>) {
        let Some(point) = point else {
            return;
        };
        // Memo entries never outlive a compaction, so the token is still buffered.
        let found = point
            .position
            .checked_sub(self.buffer.absolute(0))
            .and_then(|pos| self.buffer.get(pos));
        if let Some(found) = found {
            self.furthest.record(point.position, found, point.expected);
        }
    }

    /// Run `body` one nesting level deeper.
    ///
    /// A level is one enclosing nested body, so for a bracketed construct the
    /// level at a position is its bracket depth there, whichever rules led to
    /// it. Past `max_depth` the attempt fails, and a recognition that fails
    /// overall reports [`ParseError::NestingLimit`].
    pub fn nested(&mut self, body: impl FnOnce(&mut Self) -> bool) -> bool {
        if self.depth >= self.config.max_depth {
            self.hit_nesting_limit();
            return false;
        }
        self.depth += 1;
        let matched = ensure_sufficient_stack(|| body(self));
        self.depth -= 1;
        matched
    }

    fn hit_nesting_limit(&mut self) {
        if self.nesting_limit.is_none() {
            let span = self.buffer.lookahead(1).span;
            let position = self.absolute_position();
            debug!(limit = self.config.max_depth, position, "nesting limit reached");
            self.nesting_limit = Some((position, span));
        }
    }

    // === Top level ===

    /// Run `rule` as a top-level recognition.
    ///
    /// On success the consumed tokens are copied out and committed, which may
    /// compact. On failure the cursor is restored and the furthest failure is
    /// reported.
    pub fn recognize(
        &mut self,
        rule: impl FnOnce(&mut Self) -> bool,
    ) -> Result<Match<'src>, ParseError> {
        self.furthest = FurthestFailure::default();
        self.nesting_limit = None;

        self.open();
        let start = self.buffer.mark();
        let first = self.buffer.absolute(start);
        if rule(self) {
            let end = self.buffer.mark();
            let tokens = self.buffer.slice(start, end).to_vec();
            self.commit();
            Ok(Match::new(first, tokens))
        } else {
            self.abandon();
            Err(self.failure())
        }
    }

    fn failure(&mut self) -> ParseError {
        if let Some((position, span)) = self.nesting_limit {
            return ParseError::NestingLimit {
                limit: self.config.max_depth,
                position,
                span,
            };
        }
        let (position, found, expected) = match self.furthest.at {
            Some((position, found)) => (position, found, self.furthest.expected),
            // The rule gave up without trying a single terminal.
            None => (
                self.absolute_position(),
                self.buffer.lookahead(1),
                TokenSet::new(),
            ),
        };
        SyntaxError::new(position, found, expected).into()
    }

    // === Introspection ===

    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    pub fn buffer(&self) -> &LookaheadBuffer<'src, S> {
        &self.buffer
    }

    pub fn memo(&self) -> &MemoTables {
        &self.memo
    }

    pub fn source(&self) -> &S {
        self.buffer.source()
    }

    pub fn source_mut(&mut self) -> &mut S {
        self.buffer.source_mut()
    }

    pub fn into_source(self) -> S {
        self.buffer.into_source()
    }

    pub fn stats(&self) -> ParseStats {
        ParseStats {
            opens: self.marks.opens(),
            abandons: self.marks.abandons(),
            commits: self.marks.commits(),
            memo_hits: self.memo.hits(),
            memo_misses: self.memo.misses(),
            memo_entries: self.memo.len(),
            compactions: self.compactions,
            tokens_pulled: self.buffer.pulled(),
            rule_bodies: self.rule_bodies.clone(),
        }
    }
}
