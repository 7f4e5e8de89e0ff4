//! NegaScout (principal variation search).

use std::time::Instant;

use oxo_core::{Board, Mark, MoveError, rules};
use tracing::debug;

use crate::stats::SearchStats;
use crate::{DecideError, Decision, Engine, INF};

/// NegaScout engine.
///
/// Negamax formulation: one recursive function scores the position for
/// the side to move, negating and swapping the window at each ply. The
/// first child at any node is searched with the full window (the
/// presumed principal variation); every later child first gets a
/// zero-width scout search that only asks whether it can beat alpha.
/// A scout result landing strictly inside the window means the child
/// is competitive after all and is re-searched with the full window.
///
/// The pruning advantage depends on move ordering, but the result is
/// minimax-equivalent regardless of ordering quality.
#[derive(Debug)]
pub struct NegaScout {
    mark: Mark,
}

struct Ctx {
    mark: Mark,
    nodes: u64,
    null_window: u64,
    re_searches: u64,
}

impl NegaScout {
    /// Create a NegaScout engine playing `mark`.
    pub fn new(mark: Mark) -> Self {
        Self { mark }
    }
}

impl Engine for NegaScout {
    fn name(&self) -> &'static str {
        "negascout"
    }

    fn decide(&mut self, board: &Board) -> Result<Decision, DecideError> {
        if rules::is_terminal(board) {
            return Err(DecideError::NoLegalMoves);
        }

        let start = Instant::now();
        let mut work = *board;
        let mut ctx = Ctx {
            mark: self.mark,
            nodes: 0,
            null_window: 0,
            re_searches: 0,
        };
        let mut best_move = None;
        let mut best_score = -INF;
        let mut move_scores = Vec::new();
        let mut alpha = -INF;
        let beta = INF;

        for (i, sq) in work.legal_moves().into_iter().enumerate() {
            work.apply(sq, self.mark)?;
            // The child is scored for the opponent; negate back.
            let score = if i == 0 {
                -search(&mut work, 0, -beta, -alpha, !self.mark, &mut ctx)?
            } else {
                ctx.null_window += 1;
                let scout = -search(&mut work, 0, -alpha - 1, -alpha, !self.mark, &mut ctx)?;
                if alpha < scout && scout < beta {
                    ctx.re_searches += 1;
                    -search(&mut work, 0, -beta, -scout, !self.mark, &mut ctx)?
                } else {
                    scout
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
        debug!(
            engine = self.name(),
            %best_move,
            score = best_score,
            nodes = ctx.nodes,
            null_window = ctx.null_window,
            re_searches = ctx.re_searches,
            "decision complete"
        );

        Ok(Decision {
            best_move,
            score: best_score,
            stats: SearchStats {
                nodes_evaluated: ctx.nodes,
                null_window_searches: ctx.null_window,
                re_searches: ctx.re_searches,
                elapsed: start.elapsed(),
                move_scores,
                ..SearchStats::default()
            },
        })
    }
}

/// NegaScout recursion. `mover` is the side to move; the returned
/// score is from `mover`'s perspective.
fn search(
    board: &mut Board,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    mover: Mark,
    ctx: &mut Ctx,
) -> Result<i32, MoveError> {
    ctx.nodes += 1;

    if rules::is_terminal(board) {
        let raw = rules::evaluate(board, ctx.mark, depth);
        return Ok(if mover == ctx.mark { raw } else { -raw });
    }

    let mut value = -INF;
    let mut first = true;

    for sq in board.legal_moves() {
        board.apply(sq, mover)?;
        let child = if first {
            first = false;
            -search(board, depth + 1, -beta, -alpha, !mover, ctx)?
        } else {
            ctx.null_window += 1;
            let scout = -search(board, depth + 1, -alpha - 1, -alpha, !mover, ctx)?;
            if alpha < scout && scout < beta {
                ctx.re_searches += 1;
                -search(board, depth + 1, -beta, -scout, !mover, ctx)?
            } else {
                scout
            }
        };
        board.retract(sq);

        value = value.max(child);
        alpha = alpha.max(value);
        if alpha >= beta {
            break;
        }
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::NegaScout;
    use crate::{DecideError, Engine, Minimax};
    use oxo_core::{Board, Mark};

    #[test]
    fn takes_immediate_win() {
        let board: Board = "XX.OO....".parse().unwrap();
        let decision = NegaScout::new(Mark::X).decide(&board).unwrap();
        assert_eq!(decision.best_move.index(), 2);
        assert_eq!(decision.score, 10);
    }

    #[test]
    fn blocks_forced_loss() {
        let board: Board = "X...O...X".parse().unwrap();
        let decision = NegaScout::new(Mark::O).decide(&board).unwrap();
        assert_eq!(decision.best_move.index(), 1);
        assert_eq!(decision.score, 0);
    }

    #[test]
    fn terminal_board_is_rejected() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        let err = NegaScout::new(Mark::X).decide(&board).unwrap_err();
        assert_eq!(err, DecideError::NoLegalMoves);
    }

    #[test]
    fn agrees_with_minimax_on_the_empty_board() {
        let baseline = Minimax::new(Mark::X).decide(&Board::empty()).unwrap();
        let scout = NegaScout::new(Mark::X).decide(&Board::empty()).unwrap();
        assert_eq!(scout.best_move, baseline.best_move);
        assert_eq!(scout.score, baseline.score);
        assert!(scout.stats.nodes_evaluated < baseline.stats.nodes_evaluated);
    }

    #[test]
    fn re_searches_never_exceed_scout_searches() {
        let decision = NegaScout::new(Mark::X).decide(&Board::empty()).unwrap();
        assert!(decision.stats.null_window_searches > 0);
        assert!(decision.stats.re_searches <= decision.stats.null_window_searches);
    }
}
