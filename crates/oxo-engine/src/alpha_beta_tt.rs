//! Alpha-beta with a transposition table keyed by raw cells.

use std::time::Instant;

use oxo_core::{Board, Mark, MoveError, rules};
use tracing::debug;

use crate::stats::SearchStats;
use crate::tt::{Bound, TranspositionTable};
use crate::{DecideError, Decision, Engine, INF};

/// Alpha-beta engine with position memoization.
///
/// Positions reached through different move orders transpose to the
/// same cell sequence; the table lets them be scored once. The table
/// is pure memoization: disabling it changes node and hit counts but
/// never the chosen move or score.
#[derive(Debug)]
pub struct AlphaBetaTt {
    mark: Mark,
    tt: TranspositionTable,
}

struct Ctx<'a> {
    mark: Mark,
    nodes: u64,
    pruned: u64,
    tt: &'a mut TranspositionTable,
}

impl AlphaBetaTt {
    /// Create an engine playing `mark` with an empty table.
    pub fn new(mark: Mark) -> Self {
        Self {
            mark,
            tt: TranspositionTable::new(),
        }
    }
}

impl Engine for AlphaBetaTt {
    fn name(&self) -> &'static str {
        "alpha-beta-tt"
    }

    fn decide(&mut self, board: &Board) -> Result<Decision, DecideError> {
        if rules::is_terminal(board) {
            return Err(DecideError::NoLegalMoves);
        }

        let start = Instant::now();
        // The table's lifetime is exactly one decision: stored depths
        // are plies from this root and are not comparable across calls.
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

        for sq in work.legal_moves() {
            work.apply(sq, self.mark)?;
            let score = search(&mut work, 0, alpha, beta, false, &mut ctx)?;
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
        debug!(
            engine = self.name(),
            %best_move,
            score = best_score,
            nodes,
            cache_hits = self.tt.hits(),
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
                elapsed: start.elapsed(),
                move_scores,
                ..SearchStats::default()
            },
        })
    }
}

/// Alpha-beta recursion with table probe and store.
///
/// The probe happens before the node is counted, so a table cutoff is
/// a hit, not an evaluation. The stored flag is derived from the
/// window as it stood at node entry: a value at or below the original
/// alpha is an upper bound (the search never raised alpha), at or
/// above the original beta a lower bound (a cutoff capped it), and
/// anything in between is exact.
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
    let key = *board.cells();

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

#[cfg(test)]
mod tests {
    use super::AlphaBetaTt;
    use crate::{AlphaBeta, DecideError, Engine};
    use oxo_core::{Board, Mark};

    #[test]
    fn takes_immediate_win() {
        let board: Board = "XX.OO....".parse().unwrap();
        let decision = AlphaBetaTt::new(Mark::X).decide(&board).unwrap();
        assert_eq!(decision.best_move.index(), 2);
        assert_eq!(decision.score, 10);
    }

    #[test]
    fn blocks_forced_loss() {
        let board: Board = "X...O...X".parse().unwrap();
        let decision = AlphaBetaTt::new(Mark::O).decide(&board).unwrap();
        assert_eq!(decision.best_move.index(), 1);
        assert_eq!(decision.score, 0);
    }

    #[test]
    fn terminal_board_is_rejected() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        let err = AlphaBetaTt::new(Mark::X).decide(&board).unwrap_err();
        assert_eq!(err, DecideError::NoLegalMoves);
    }

    #[test]
    fn table_is_pure_memoization() {
        // Same decision as plain alpha-beta, fewer nodes, some hits.
        let board = Board::empty();
        let plain = AlphaBeta::new(Mark::X).decide(&board).unwrap();
        let memoized = AlphaBetaTt::new(Mark::X).decide(&board).unwrap();

        assert_eq!(memoized.best_move, plain.best_move);
        assert_eq!(memoized.score, plain.score);
        assert!(memoized.stats.nodes_evaluated <= plain.stats.nodes_evaluated);
        assert!(memoized.stats.cache_hits > 0);
        assert!(memoized.stats.cache_stores > 0);
    }

    #[test]
    fn table_resets_between_decisions() {
        let board: Board = "X...O...X".parse().unwrap();
        let mut engine = AlphaBetaTt::new(Mark::O);
        let first = engine.decide(&board).unwrap();
        let second = engine.decide(&board).unwrap();
        // A fresh table each call: identical counts, identical result.
        assert_eq!(first.best_move, second.best_move);
        assert_eq!(first.score, second.score);
        assert_eq!(first.stats.nodes_evaluated, second.stats.nodes_evaluated);
        assert_eq!(first.stats.cache_hits, second.stats.cache_hits);
    }
}
