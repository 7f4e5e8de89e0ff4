//! Search engines for the 3x3 game, sharing one decision contract.
//!
//! Five solvers — exhaustive minimax, alpha-beta, alpha-beta with a
//! transposition table, alpha-beta with D4 symmetry folding, and
//! NegaScout — compute the same game-theoretic result and differ only
//! in how much of the tree they explore. A sixth engine picks random
//! moves, as a baseline opponent.
//!
//! Every `decide` call is a single-threaded, run-to-completion
//! computation; engines own their tables and counters and reset them
//! per call, so one instance must not serve concurrent decisions.

pub mod stats;
pub mod tt;

mod alpha_beta;
mod alpha_beta_symmetry;
mod alpha_beta_tt;
mod minimax;
mod negascout;
mod random;

pub use alpha_beta::AlphaBeta;
pub use alpha_beta_symmetry::AlphaBetaSymmetry;
pub use alpha_beta_tt::AlphaBetaTt;
pub use minimax::Minimax;
pub use negascout::NegaScout;
pub use random::Random;
pub use stats::SearchStats;

use oxo_core::{Board, Mark, MoveError, Square};

/// Score representing an unreachable upper/lower bound.
///
/// Evaluations are depth-adjusted wins and losses in [-10, 10], so any
/// value beyond that works; keep a margin for window arithmetic.
pub(crate) const INF: i32 = 1_000;

/// Result of a completed decision.
#[derive(Debug, Clone)]
pub struct Decision {
    /// The chosen square.
    pub best_move: Square,
    /// Score of the chosen move from the engine's perspective.
    pub score: i32,
    /// Diagnostics for reporting; not read by any engine.
    pub stats: SearchStats,
}

/// Errors surfaced by [`Engine::decide`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DecideError {
    /// `decide` was called on a terminal position. Callers drive the
    /// game loop and should never do this; the engine fails loudly
    /// rather than inventing a move.
    #[error("no legal moves: the position is terminal")]
    NoLegalMoves,
    /// A move application failed mid-search. Structurally unreachable
    /// because engines only play moves from `legal_moves`, but
    /// propagated rather than unwrapped.
    #[error(transparent)]
    Move(#[from] MoveError),
}

/// The uniform contract every engine implements.
pub trait Engine {
    /// Short machine-readable engine name.
    fn name(&self) -> &'static str;

    /// Choose a move for the engine's mark on `board`.
    ///
    /// The board is copied internally; the caller's value is never
    /// mutated. Fails with [`DecideError::NoLegalMoves`] on a terminal
    /// position.
    fn decide(&mut self, board: &Board) -> Result<Decision, DecideError>;
}

/// All five deterministic solvers playing `mark`, in documentation
/// order. Handy for benchmarks and cross-engine comparison.
pub fn solvers(mark: Mark) -> Vec<Box<dyn Engine>> {
    vec![
        Box::new(Minimax::new(mark)),
        Box::new(AlphaBeta::new(mark)),
        Box::new(AlphaBetaTt::new(mark)),
        Box::new(AlphaBetaSymmetry::new(mark)),
        Box::new(NegaScout::new(mark)),
    ]
}
