//! Minimax with alpha-beta pruning.

use std::time::Instant;

use oxo_core::{Board, Mark, MoveError, rules};
use tracing::debug;

use crate::stats::SearchStats;
use crate::{DecideError, Decision, Engine, INF};

/// Alpha-beta engine.
///
/// Same recursion shape and move-iteration order as [`Minimax`], plus
/// an `(alpha, beta)` window that lets provably irrelevant siblings be
/// skipped. Pruning never changes the chosen move or its score — only
/// the amount of work.
///
/// [`Minimax`]: crate::Minimax
#[derive(Debug)]
pub struct AlphaBeta {
    mark: Mark,
}

/// Counters threaded through the recursion.
struct WindowCounters {
    nodes: u64,
    pruned: u64,
}

impl AlphaBeta {
    /// Create an alpha-beta engine playing `mark`.
    pub fn new(mark: Mark) -> Self {
        Self { mark }
    }
}

impl Engine for AlphaBeta {
    fn name(&self) -> &'static str {
        "alpha-beta"
    }

    fn decide(&mut self, board: &Board) -> Result<Decision, DecideError> {
        if rules::is_terminal(board) {
            return Err(DecideError::NoLegalMoves);
        }

        let start = Instant::now();
        let mut work = *board;
        let mut counters = WindowCounters { nodes: 0, pruned: 0 };
        let mut best_move = None;
        let mut best_score = -INF;
        let mut move_scores = Vec::new();
        let mut alpha = -INF;
        let beta = INF;

        for sq in work.legal_moves() {
            work.apply(sq, self.mark)?;
            let score = search(&mut work, 0, alpha, beta, false, self.mark, &mut counters)?;
            work.retract(sq);

            move_scores.push((sq, score));
            if score > best_score {
                best_score = score;
                best_move = Some(sq);
            }
            alpha = alpha.max(score);
        }

        let best_move = best_move.ok_or(DecideError::NoLegalMoves)?;
        debug!(
            engine = self.name(),
            %best_move,
            score = best_score,
            nodes = counters.nodes,
            pruned = counters.pruned,
            "decision complete"
        );

        Ok(Decision {
            best_move,
            score: best_score,
            stats: SearchStats {
                nodes_evaluated: counters.nodes,
                nodes_pruned: counters.pruned,
                elapsed: start.elapsed(),
                move_scores,
                ..SearchStats::default()
            },
        })
    }
}

/// Alpha-beta recursion. On a cutoff the remaining siblings are
/// skipped, each counted once in `counters.pruned`.
fn search(
    board: &mut Board,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    mark: Mark,
    counters: &mut WindowCounters,
) -> Result<i32, MoveError> {
    counters.nodes += 1;

    if rules::is_terminal(board) {
        return Ok(rules::evaluate(board, mark, depth));
    }

    let moves = board.legal_moves();
    let mover = if maximizing { mark } else { !mark };
    let mut value = if maximizing { -INF } else { INF };

    for (i, &sq) in moves.iter().enumerate() {
        board.apply(sq, mover)?;
        let child = search(board, depth + 1, alpha, beta, !maximizing, mark, counters)?;
        board.retract(sq);

        if maximizing {
            value = value.max(child);
            alpha = alpha.max(value);
        } else {
            value = value.min(child);
            beta = beta.min(value);
        }

        if beta <= alpha {
            counters.pruned += (moves.len() - i - 1) as u64;
            break;
        }
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::AlphaBeta;
    use crate::{DecideError, Engine, Minimax};
    use oxo_core::{Board, Mark};

    #[test]
    fn takes_immediate_win() {
        let board: Board = "XX.OO....".parse().unwrap();
        let decision = AlphaBeta::new(Mark::X).decide(&board).unwrap();
        assert_eq!(decision.best_move.index(), 2);
        assert_eq!(decision.score, 10);
    }

    #[test]
    fn blocks_forced_loss() {
        let board: Board = "X...O...X".parse().unwrap();
        let decision = AlphaBeta::new(Mark::O).decide(&board).unwrap();
        assert_eq!(decision.best_move.index(), 1);
        assert_eq!(decision.score, 0);
    }

    #[test]
    fn terminal_board_is_rejected() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        let err = AlphaBeta::new(Mark::X).decide(&board).unwrap_err();
        assert_eq!(err, DecideError::NoLegalMoves);
    }

    #[test]
    fn prunes_strictly_on_the_empty_board() {
        let board = Board::empty();
        let baseline = Minimax::new(Mark::X).decide(&board).unwrap();
        let pruned = AlphaBeta::new(Mark::X).decide(&board).unwrap();

        assert_eq!(pruned.best_move, baseline.best_move);
        assert_eq!(pruned.score, baseline.score);
        assert!(pruned.stats.nodes_evaluated < baseline.stats.nodes_evaluated);
        assert!(pruned.stats.nodes_pruned > 0);
    }
}
