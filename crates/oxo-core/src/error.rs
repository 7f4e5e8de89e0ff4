//! Error types for board construction, parsing, and move application.

use crate::square::Square;

/// Errors from structural validation of a [`Board`](crate::Board).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// The cell counts violate turn alternation (X moves first, so
    /// #X must equal #O or #O + 1).
    #[error("invalid mark counts: {x} X against {o} O")]
    TurnImbalance {
        /// Number of X marks found.
        x: usize,
        /// Number of O marks found.
        o: usize,
    },
}

/// Error from applying a move to an occupied square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The target square already holds a mark.
    #[error("square {square} is occupied")]
    SquareOccupied {
        /// The occupied square.
        square: Square,
    },
}

/// Errors that occur when parsing a board from its 9-character form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseBoardError {
    /// The string does not describe exactly 9 cells.
    #[error("expected 9 cells, found {found}")]
    WrongLength {
        /// Number of characters found.
        found: usize,
    },
    /// An unrecognized character appeared in the cell description.
    #[error("invalid cell character: '{character}'")]
    InvalidChar {
        /// The invalid character.
        character: char,
    },
    /// The parsed cells fail structural validation.
    #[error("invalid board: {0}")]
    InvalidBoard(#[from] BoardError),
}
