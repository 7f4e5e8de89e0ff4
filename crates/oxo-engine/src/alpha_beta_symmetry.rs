//! Alpha-beta with a transposition table keyed by canonical form.

use std::collections::HashMap;
use std::time::Instant;

use oxo_core::symmetry::canonical_form;
use oxo_core::{Board, Cells, Mark, MoveError, rules};
use tracing::debug;

use crate::stats::SearchStats;
use crate::tt::{Bound, TranspositionTable};
use crate::{DecideError, Decision, Engine, INF};

/// Alpha-beta engine folding the 8 board symmetries.
///
/// Identical to the raw-cells table engine except that entries are
/// keyed by the canonical (lexicographically smallest) orientation, so
/// any of the up-to-8 equivalent orientations of a seen position reuse
/// its value. Root children are also deduplicated by canonical form:
/// a move leading into a symmetry-equivalent position copies the score
/// already recorded for its twin instead of searching again.
///
/// Symmetry folding changes how much work is done, never the value of
/// the result; the chosen move may differ from the other engines only
/// among moves of equal score.
#[derive(Debug)]
pub struct AlphaBetaSymmetry {
    mark: Mark,
    tt: TranspositionTable,
}

struct Ctx<'a> {
    mark: Mark,
    nodes: u64,
    pruned: u64,
    tt: &'a mut TranspositionTable,
}

impl AlphaBetaSymmetry {
    /// Create an engine playing `mark` with an empty table.
    pub fn new(mark: Mark) -> Self {
        Self {
            mark,
            tt: TranspositionTable::new(),
        }
    }
}

impl Engine for AlphaBetaSymmetry {
    fn name(&self) -> &'static str {
        "alpha-beta-symmetry"
    }

    fn decide(&mut self, board: &Board) -> Result<Decision, DecideError> {
        if rules::is_terminal(board) {
            return Err(DecideError::NoLegalMoves);
        }

        let start = Instant::now();
        self.tt.clear();

        let mut work = *board;
        let mut ctx = Ctx {
            mark: self.mark,
            nodes: 0,
            pruned: 0,
            tt: &mut self.tt,
        };
        let mut best_move = None;
        let mut best_score = -INF;
        let mut move_scores = Vec::new();
        let mut alpha = -INF;
        let beta = INF;
        let mut root_dedups = 0u64;
        // Canonical form of each searched root child and its score.
        let mut seen_children: HashMap<Cells, i32> = HashMap::new();

        for sq in work.legal_moves() {
            work.apply(sq, self.mark)?;
            let canonical = canonical_form(work.cells());

            let score = match seen_children.get(&canonical) {
                Some(&twin_score) => {
                    root_dedups += 1;
                    twin_score
                }
                None => {
                    let score = search(&mut work, 0, alpha, beta, false, &mut ctx)?;
                    seen_children.insert(canonical, score);
                    score
                }
            };
            work.retract(sq);

            move_scores.push((sq, score));
            if score > best_score {
                best_score = score;
                best_move = Some(sq);
            }
            alpha = alpha.max(score);
        }

        let best_move = best_move.ok_or(DecideError::NoLegalMoves)?;
        let (nodes, pruned) = (ctx.nodes, ctx.pruned);
        let symmetry_hits = root_dedups + self.tt.hits();
        debug!(
            engine = self.name(),
            %best_move,
            score = best_score,
            nodes,
            symmetry_hits,
            unique_positions = self.tt.len(),
            "decision complete"
        );

        Ok(Decision {
            best_move,
            score: best_score,
            stats: SearchStats {
                nodes_evaluated: nodes,
                nodes_pruned: pruned,
                cache_hits: self.tt.hits(),
                cache_stores: self.tt.stores(),
                symmetry_hits,
                unique_positions: self.tt.len() as u64,
                elapsed: start.elapsed(),
                move_scores,
                ..SearchStats::default()
            },
        })
    }
}

/// Alpha-beta recursion, identical to the raw-key variant except that
/// probes and stores go through the canonical orientation.
fn search(
    board: &mut Board,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    ctx: &mut Ctx<'_>,
) -> Result<i32, MoveError> {
    let original_alpha = alpha;
    let original_beta = beta;
    let key = canonical_form(board.cells());

    if let Some(score) = ctx.tt.probe(&key, depth, alpha, beta) {
        return Ok(score);
    }

    ctx.nodes += 1;

    if rules::is_terminal(board) {
        let score = rules::evaluate(board, ctx.mark, depth);
        ctx.tt.store(key, score, depth, Bound::Exact);
        return Ok(score);
    }

    let moves = board.legal_moves();
    let mover = if maximizing { ctx.mark } else { !ctx.mark };
    let mut value = if maximizing { -INF } else { INF };

    for (i, &sq) in moves.iter().enumerate() {
        board.apply(sq, mover)?;
        let child = search(board, depth + 1, alpha, beta, !maximizing, ctx)?;
        board.retract(sq);

        if maximizing {
            value = value.max(child);
            alpha = alpha.max(value);
        } else {
            value = value.min(child);
            beta = beta.min(value);
        }

        if beta <= alpha {
            ctx.pruned += (moves.len() - i - 1) as u64;
            break;
        }
    }

    let bound = if value <= original_alpha {
        Bound::Upper
    } else if value >= original_beta {
        Bound::Lower
    } else {
        Bound::Exact
    };
    ctx.tt.store(key, value, depth, bound);

    Ok(value)
}
