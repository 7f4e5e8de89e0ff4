//! Per-decision search statistics.

use std::time::Duration;

use oxo_core::Square;

/// Diagnostics produced by one top-level [`decide`] call.
///
/// One plain record covers every engine; counters an engine does not
/// track stay zero. Consumers (benchmark runners, reports) read this
/// record only — no engine reads it back.
///
/// [`decide`]: crate::Engine::decide
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes entered by the recursive search.
    pub nodes_evaluated: u64,
    /// Siblings skipped by alpha-beta cutoffs.
    pub nodes_pruned: u64,
    /// Transposition-table probes that returned a usable score.
    pub cache_hits: u64,
    /// Transposition-table stores.
    pub cache_stores: u64,
    /// Symmetry-folded reuses: root dedups plus usable canonical-key
    /// table probes.
    pub symmetry_hits: u64,
    /// Distinct canonical positions held by the table when the
    /// decision completed.
    pub unique_positions: u64,
    /// Zero-width scout searches issued by NegaScout.
    pub null_window_searches: u64,
    /// Scout searches that failed inside the window and were re-run
    /// with the full window.
    pub re_searches: u64,
    /// Wall time of the decision.
    pub elapsed: Duration,
    /// Every root move with the score recorded for it, in the order
    /// the root loop visited them. For pruning engines the scores of
    /// non-chosen moves may be window bounds rather than exact values.
    pub move_scores: Vec<(Square, i32)>,
}
