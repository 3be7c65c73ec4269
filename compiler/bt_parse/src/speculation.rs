//! Stack of open speculation marks.
//!
//! Each open speculation pushes the buffer cursor it started at. Abandoning
//! pops the mark and rewinds to it; committing pops the mark and keeps the
//! cursor. Nesting is shallow for real grammars, so marks live inline.

use smallvec::SmallVec;

#[derive(Debug, Default)]
pub struct SpeculationStack {
    marks: SmallVec<[usize; 16]>,
    opens: usize,
    abandons: usize,
    commits: usize,
}

impl SpeculationStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, mark: usize) {
        self.marks.push(mark);
        self.opens += 1;
    }

    /// Pop the innermost mark for rewinding.
    ///
    /// # Panics
    ///
    /// Panics if nothing is open.
    pub fn abandon(&mut self) -> usize {
        self.abandons += 1;
        self.pop("abandon")
    }

    /// Pop the innermost mark, keeping the cursor where it is.
    ///
    /// # Panics
    ///
    /// Panics if nothing is open.
    pub fn commit(&mut self) -> usize {
        self.commits += 1;
        self.pop("commit")
    }

    fn pop(&mut self, action: &str) -> usize {
        match self.marks.pop() {
            Some(mark) => mark,
            None => panic!("unbalanced speculation: {action} without a matching open"),
        }
    }

    /// Number of speculations currently open.
    #[inline]
    pub fn depth(&self) -> usize {
        self.marks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Oldest live mark; nothing below it may be discarded.
    pub fn oldest(&self) -> Option<usize> {
        self.marks.first().copied()
    }

    pub fn opens(&self) -> usize {
        self.opens
    }

    pub fn abandons(&self) -> usize {
        self.abandons
    }

    pub fn commits(&self) -> usize {
        self.commits
    }
}
