//! Uniformly random move selection — a baseline opponent.

use std::time::Instant;

use oxo_core::{Board, rules};
use rand::seq::IndexedRandom;
use tracing::debug;

use crate::stats::SearchStats;
use crate::{DecideError, Decision, Engine};

/// Engine that plays a uniformly random legal move.
///
/// No search, no evaluation; useful as a benchmark opponent. Unlike
/// the solvers it carries no mark: it never needs to know whose side
/// it is on. A terminal position is still a loud error, never a
/// sentinel move.
#[derive(Debug, Default)]
pub struct Random;

impl Random {
    /// Create a random engine.
    pub fn new() -> Self {
        Self
    }
}

impl Engine for Random {
    fn name(&self) -> &'static str {
        "random"
    }

    fn decide(&mut self, board: &Board) -> Result<Decision, DecideError> {
        if rules::is_terminal(board) {
            return Err(DecideError::NoLegalMoves);
        }

        let start = Instant::now();
        let moves = board.legal_moves();
        let best_move = *moves
            .choose(&mut rand::rng())
            .ok_or(DecideError::NoLegalMoves)?;
        debug!(engine = self.name(), %best_move, "decision complete");

        Ok(Decision {
            best_move,
            score: 0,
            stats: SearchStats {
                nodes_evaluated: 1,
                elapsed: start.elapsed(),
                ..SearchStats::default()
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Random;
    use crate::{DecideError, Engine};
    use oxo_core::Board;

    #[test]
    fn picks_a_legal_move() {
        let board: Board = "XO.XO....".parse().unwrap();
        for _ in 0..32 {
            let decision = Random::new().decide(&board).unwrap();
            assert!(board.cell(decision.best_move).is_none());
        }
    }

    #[test]
    fn terminal_board_is_rejected() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        let err = Random::new().decide(&board).unwrap_err();
        assert_eq!(err, DecideError::NoLegalMoves);
    }

    #[test]
    fn stats_count_a_single_node() {
        let decision = Random::new().decide(&Board::empty()).unwrap();
        assert_eq!(decision.stats.nodes_evaluated, 1);
        assert!(decision.stats.move_scores.is_empty());
    }
}
