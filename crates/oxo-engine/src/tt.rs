//! Per-decision transposition table.
//!
//! A plain `HashMap` keyed by a cell sequence — either the raw cells
//! or their canonical form, depending on the engine. The table lives
//! for exactly one top-level decision and is cleared at the start of
//! the next, so stored depths (plies from the decision root) are
//! always comparable.

use std::collections::HashMap;

use oxo_core::Cells;

/// Classifies a stored score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// The true minimax value.
    Exact,
    /// A lower bound — the search failed high against beta.
    Lower,
    /// An upper bound — the search failed low against alpha.
    Upper,
}

/// A stored position value.
#[derive(Debug, Clone, Copy)]
pub struct TtEntry {
    /// Score from the engine's perspective, depth-adjusted.
    pub score: i32,
    /// Plies from the decision root at which the score was computed.
    pub depth: u8,
    /// Whether the score is exact or a window bound.
    pub bound: Bound,
}

/// Transposition table with hit/store accounting.
#[derive(Debug, Default)]
pub struct TranspositionTable {
    map: HashMap<Cells, TtEntry>,
    hits: u64,
    stores: u64,
}

impl TranspositionTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all entries and reset the counters. Called at the top of
    /// every decision.
    pub fn clear(&mut self) {
        self.map.clear();
        self.hits = 0;
        self.stores = 0;
    }

    /// Look up `key` and return its score if the entry is usable at
    /// the current depth and window.
    ///
    /// An entry is usable when its stored depth is at least `depth`
    /// (deeper entries carry at least as much information) and its
    /// bound subsumes the `(alpha, beta)` window: exact entries
    /// always, lower bounds only when they already force a beta
    /// cutoff, upper bounds only when they cannot raise alpha.
    pub fn probe(&mut self, key: &Cells, depth: u8, alpha: i32, beta: i32) -> Option<i32> {
        let entry = self.map.get(key)?;
        if entry.depth < depth {
            return None;
        }
        let usable = match entry.bound {
            Bound::Exact => true,
            Bound::Lower => entry.score >= beta,
            Bound::Upper => entry.score <= alpha,
        };
        if usable {
            self.hits += 1;
            Some(entry.score)
        } else {
            None
        }
    }

    /// Store a computed value, replacing any previous entry for `key`.
    pub fn store(&mut self, key: Cells, score: i32, depth: u8, bound: Bound) {
        self.map.insert(key, TtEntry { score, depth, bound });
        self.stores += 1;
    }

    /// Probes that returned a usable score.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Total stores since the last clear.
    pub fn stores(&self) -> u64 {
        self.stores
    }

    /// Number of distinct positions held.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
