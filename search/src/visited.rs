//! Visited-state set.
//!
//! Keys are [`Board::canonical_key`] strings. The set only grows: a key is
//! added when its state is first *generated*, so each distinct state becomes
//! a node at most once per run.
//!
//! Uses `BTreeSet` (not `HashSet`) for deterministic iteration order when the
//! set is dumped into reports.

use std::collections::BTreeSet;

use tileslide_kernel::board::Board;

#[derive(Debug, Clone, Default)]
pub struct VisitedSet {
    keys: BTreeSet<String>,
}

impl VisitedSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a canonical key. Returns `false` (and changes nothing) if it was
    /// already present.
    pub fn insert(&mut self, key: String) -> bool {
        self.keys.insert(key)
    }

    /// Add a board's canonical key. Same contract as [`VisitedSet::insert`].
    pub fn mark(&mut self, board: &Board) -> bool {
        self.insert(board.canonical_key())
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Keys in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }
}
