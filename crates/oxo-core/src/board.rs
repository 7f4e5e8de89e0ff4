//! The game board: cell placement and turn tracking.

use std::fmt;
use std::str::FromStr;

use crate::error::{BoardError, MoveError, ParseBoardError};
use crate::mark::Mark;
use crate::square::Square;

/// Raw cell sequence in row-major order; `None` is an empty cell.
pub type Cells = [Option<Mark>; 9];

/// Complete game position: 9 cells plus the side to move.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: Cells,
    side_to_move: Mark,
}

impl Board {
    /// Return the empty starting position, X to move.
    pub const fn empty() -> Board {
        Board {
            cells: [None; 9],
            side_to_move: Mark::X,
        }
    }

    /// Construct a board from a raw cell sequence.
    ///
    /// Validates turn alternation (X moves first, so #X must equal #O
    /// or #O + 1) and derives the side to move from the counts.
    pub fn from_cells(cells: Cells) -> Result<Board, BoardError> {
        let x = cells.iter().filter(|c| **c == Some(Mark::X)).count();
        let o = cells.iter().filter(|c| **c == Some(Mark::O)).count();
        if x != o && x != o + 1 {
            return Err(BoardError::TurnImbalance { x, o });
        }
        let side_to_move = if x == o { Mark::X } else { Mark::O };
        Ok(Board {
            cells,
            side_to_move,
        })
    }

    /// Return the mark on the given square, if any.
    #[inline]
    pub const fn cell(&self, square: Square) -> Option<Mark> {
        self.cells[square.index()]
    }

    /// Return the raw cell sequence.
    #[inline]
    pub const fn cells(&self) -> &Cells {
        &self.cells
    }

    /// Return the side to move.
    #[inline]
    pub const fn side_to_move(&self) -> Mark {
        self.side_to_move
    }

    /// Return all empty squares in increasing index order.
    ///
    /// The fixed order is load-bearing: every engine iterates moves in
    /// this order, and ties at the root are broken by the first move
    /// reaching the maximum score.
    pub fn legal_moves(&self) -> Vec<Square> {
        Square::all().filter(|sq| self.cell(*sq).is_none()).collect()
    }

    /// Place `mark` on `square` and hand the turn to the opponent.
    ///
    /// Fails with [`MoveError::SquareOccupied`] if the square is not
    /// empty; the board is left untouched in that case.
    pub fn apply(&mut self, square: Square, mark: Mark) -> Result<(), MoveError> {
        if self.cells[square.index()].is_some() {
            return Err(MoveError::SquareOccupied { square });
        }
        self.cells[square.index()] = Some(mark);
        self.side_to_move = !mark;
        Ok(())
    }

    /// Remove the mark on `square` and hand the turn back to it.
    ///
    /// Callers must pair every `retract` 1:1 with a prior [`apply`] on
    /// the same square, in LIFO order. Violations corrupt the position
    /// silently in release builds; this is the search core's central
    /// resource discipline.
    ///
    /// [`apply`]: Board::apply
    pub fn retract(&mut self, square: Square) {
        debug_assert!(self.cells[square.index()].is_some());
        if let Some(mark) = self.cells[square.index()].take() {
            self.side_to_move = mark;
        }
    }

    /// Whether every cell holds a mark.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parse a board from 9 characters in row-major order.
    ///
    /// `X` and `O` are marks; `.` or a space is an empty cell.
    fn from_str(s: &str) -> Result<Board, ParseBoardError> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 9 {
            return Err(ParseBoardError::WrongLength { found: chars.len() });
        }

        let mut cells: Cells = [None; 9];
        for (i, c) in chars.into_iter().enumerate() {
            cells[i] = match c {
                'X' => Some(Mark::X),
                'O' => Some(Mark::O),
                '.' | ' ' => None,
                character => return Err(ParseBoardError::InvalidChar { character }),
            };
        }

        Ok(Board::from_cells(cells)?)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f, "---+---+---")?;
            }
            for col in 0..3 {
                if col > 0 {
                    write!(f, "|")?;
                }
                match self.cell(Square::new(row, col)) {
                    Some(mark) => write!(f, " {mark} ")?,
                    None => write!(f, "   ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    /// Compact 9-character form, matching the parse syntax.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"")?;
        for sq in Square::all() {
            match self.cell(sq) {
                Some(mark) => write!(f, "{mark}")?,
                None => write!(f, ".")?,
            }
        }
        write!(f, "\", {} to move)", self.side_to_move)
    }
}
