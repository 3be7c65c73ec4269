//! Counters describing how much work a parser did.

use rustc_hash::FxHashMap;

use crate::RuleId;

/// Snapshot of a parser's counters, from [`Parser::stats`](crate::Parser::stats).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseStats {
    pub opens: usize,
    pub abandons: usize,
    pub commits: usize,
    pub memo_hits: usize,
    pub memo_misses: usize,
    /// Memo entries currently held.
    pub memo_entries: usize,
    pub compactions: usize,
    /// Tokens taken from the token source, including end-of-input tokens.
    pub tokens_pulled: usize,
    /// How often each memoized rule's body actually ran.
    pub rule_bodies: FxHashMap<RuleId, usize>,
}

impl ParseStats {
    pub fn body_runs(&self, rule: RuleId) -> usize {
        self.rule_bodies.get(&rule).copied().unwrap_or(0)
    }

    /// Every open was matched by exactly one abandon or commit.
    pub fn is_balanced(&self) -> bool {
        self.opens == self.abandons + self.commits
    }
}
