//! Board squares, indexed 0-8 in row-major order.

use std::fmt;

/// A square on the 3x3 board.
///
/// Index = row * 3 + col:
///
/// ```text
///  0 | 1 | 2
/// ---+---+---
///  3 | 4 | 5
/// ---+---+---
///  6 | 7 | 8
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 9;

    /// The center square (index 4).
    pub const CENTER: Square = Square(4);

    /// Create a square from a row and column (both 0-2).
    ///
    /// # Panics
    ///
    /// Debug-asserts that `row < 3` and `col < 3`.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Square {
        debug_assert!(row < 3 && col < 3);
        Square(row * 3 + col)
    }

    /// Create a square from a zero-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 9 { Some(Square(index)) } else { None }
    }

    /// Return the zero-based index (0..9).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the row of this square (0..3).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 3
    }

    /// Return the column of this square (0..3).
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 3
    }

    /// Iterate over all 9 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..9).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.0)
    }
}
