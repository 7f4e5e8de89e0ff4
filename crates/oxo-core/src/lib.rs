//! Core game types: board representation, rules, and D4 symmetry.

mod board;
mod error;
mod mark;
mod square;

pub mod rules;
pub mod symmetry;

pub use board::{Board, Cells};
pub use error::{BoardError, MoveError, ParseBoardError};
pub use mark::Mark;
pub use square::Square;
