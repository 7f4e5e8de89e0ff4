//! Exhaustive minimax search — the correctness baseline.

use std::time::Instant;

use oxo_core::{Board, Mark, MoveError, rules};
use tracing::debug;

use crate::stats::SearchStats;
use crate::{DecideError, Decision, Engine, INF};

/// Minimax engine without pruning.
///
/// Visits the full game tree (~550k nodes from the empty board).
/// Every other engine in the family must agree exactly with its chosen
/// move and score: root moves are tried in increasing square order and
/// ties keep the first maximum, so the result is fully deterministic.
#[derive(Debug)]
pub struct Minimax {
    mark: Mark,
}

impl Minimax {
    /// Create a minimax engine playing `mark`.
    pub fn new(mark: Mark) -> Self {
        Self { mark }
    }
}

impl Engine for Minimax {
    fn name(&self) -> &'static str {
        "minimax"
    }

    fn decide(&mut self, board: &Board) -> Result<Decision, DecideError> {
        if rules::is_terminal(board) {
            return Err(DecideError::NoLegalMoves);
        }

        let start = Instant::now();
        let mut work = *board;
        let mut nodes = 0u64;
        let mut best_move = None;
        let mut best_score = -INF;
        let mut move_scores = Vec::new();

        for sq in work.legal_moves() {
            work.apply(sq, self.mark)?;
            let score = search(&mut work, 0, false, self.mark, &mut nodes)?;
            work.retract(sq);

            move_scores.push((sq, score));
            if score > best_score {
                best_score = score;
                best_move = Some(sq);
            }
        }

        // The position is non-terminal, so at least one move was tried.
        let best_move = best_move.ok_or(DecideError::NoLegalMoves)?;
        debug!(
            engine = self.name(),
            %best_move,
            score = best_score,
            nodes,
            "decision complete"
        );

        Ok(Decision {
            best_move,
            score: best_score,
            stats: SearchStats {
                nodes_evaluated: nodes,
                elapsed: start.elapsed(),
                move_scores,
                ..SearchStats::default()
            },
        })
    }
}

/// Plain minimax recursion. `depth` counts plies below the root child;
/// `mark` is the maximizing side.
fn search(
    board: &mut Board,
    depth: u8,
    maximizing: bool,
    mark: Mark,
    nodes: &mut u64,
) -> Result<i32, MoveError> {
    *nodes += 1;

    if rules::is_terminal(board) {
        return Ok(rules::evaluate(board, mark, depth));
    }

    let mover = if maximizing { mark } else { !mark };
    let mut value = if maximizing { -INF } else { INF };

    for sq in board.legal_moves() {
        board.apply(sq, mover)?;
        let child = search(board, depth + 1, !maximizing, mark, nodes)?;
        board.retract(sq);

        value = if maximizing {
            value.max(child)
        } else {
            value.min(child)
        };
    }

    Ok(value)
}
