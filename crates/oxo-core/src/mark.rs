//! Player marks.

use std::fmt;
use std::ops::Not;

/// A player's mark: X or O.
///
/// Derives `Ord` (X before O) so that cell sequences have a total
/// order, which the symmetry module relies on for canonicalisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Mark {
    X = 0,
    O = 1,
}

impl Mark {
    /// Total number of marks.
    pub const COUNT: usize = 2;

    /// All marks in index order.
    pub const ALL: [Mark; 2] = [Mark::X, Mark::O];

    /// Return the index (0 for X, 1 for O).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the opposing mark.
    #[inline]
    pub const fn flip(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl Not for Mark {
    type Output = Mark;

    #[inline]
    fn not(self) -> Mark {
        self.flip()
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Mark;

    #[test]
    fn index_values() {
        assert_eq!(Mark::X.index(), 0);
        assert_eq!(Mark::O.index(), 1);
    }

    #[test]
    fn flip_roundtrip() {
        assert_eq!(Mark::X.flip(), Mark::O);
        assert_eq!(Mark::O.flip(), Mark::X);
        assert_eq!(Mark::X.flip().flip(), Mark::X);
    }

    #[test]
    fn not_operator() {
        assert_eq!(!Mark::X, Mark::O);
        assert_eq!(!Mark::O, Mark::X);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Mark::X), "X");
        assert_eq!(format!("{}", Mark::O), "O");
    }

    #[test]
    fn ordering_for_canonicalisation() {
        // None < Some(X) < Some(O): empty cells sort first.
        assert!(None < Some(Mark::X));
        assert!(Some(Mark::X) < Some(Mark::O));
    }
}
