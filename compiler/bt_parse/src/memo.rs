//! Per-rule memo tables.
//!
//! Each memoized rule owns a table keyed by the buffer position it was
//! attempted at. Entries record whether the attempt succeeded, where it
//! stopped, and the furthest failure seen on the way. Keys are buffer-relative, so every table is cleared in
//! the same step that compacts the buffer.

use std::fmt;

use bt_ir::TokenSet;
use rustc_hash::FxHashMap;

/// Identity of a memoized rule.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleId(&'static str);

impl RuleId {
    pub const fn new(name: &'static str) -> Self {
        RuleId(name)
    }

    pub const fn name(self) -> &'static str {
        self.0
    }
}

impl fmt::Debug for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RuleId({})", self.0)
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Furthest terminal mismatch inside one memoized attempt.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FailurePoint {
    /// Input-wide token index.
    pub position: usize,
    pub expected: TokenSet,
}

/// Outcome of an earlier attempt at one position.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MemoEntry {
    /// Succeeded, leaving the cursor at `end`.
    Parsed {
        end: usize,
        furthest: Option<FailurePoint>,
    },
    Failed { furthest: Option<FailurePoint> },
}

/// Memo for a single rule.
#[derive(Debug, Default)]
pub struct MemoTable {
    entries: FxHashMap<usize, MemoEntry>,
}

impl MemoTable {
    pub fn get(&self, pos: usize) -> Option<MemoEntry> {
        self.entries.get(&pos).copied()
    }

    pub fn insert(&mut self, pos: usize, entry: MemoEntry) {
        self.entries.insert(pos, entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Every rule's memo table, plus hit/miss counters.
#[derive(Debug, Default)]
pub struct MemoTables {
    tables: FxHashMap<RuleId, MemoTable>,
    hits: usize,
    misses: usize,
}

impl MemoTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look `rule` up at `pos`, counting the hit or miss.
    pub fn lookup(&mut self, rule: RuleId, pos: usize) -> Option<MemoEntry> {
        let entry = self.tables.get(&rule).and_then(|table| table.get(pos));
        if entry.is_some() {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
        entry
    }

    pub fn record(&mut self, rule: RuleId, pos: usize, entry: MemoEntry) {
        self.tables.entry(rule).or_default().insert(pos, entry);
    }

    pub fn table(&self, rule: RuleId) -> Option<&MemoTable> {
        self.tables.get(&rule)
    }

    /// Empty every table at once.
    pub fn clear(&mut self) {
        for table in self.tables.values_mut() {
            table.clear();
        }
    }

    /// Entries across all tables.
    pub fn len(&self) -> usize {
        self.tables.values().map(MemoTable::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.values().all(MemoTable::is_empty)
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }
}
