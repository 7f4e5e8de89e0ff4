//! Dihedral-group (D4) symmetries of the 3x3 board.
//!
//! The 8 symmetries are the identity, three rotations, and four
//! reflections. Each is a fixed permutation of the 9 board indices;
//! transforming a cell sequence with permutation `t` produces
//! `out[i] = cells[t[i]]`.
//!
//! The canonical form of a position is the lexicographically smallest
//! cell sequence among its 8 transforms. Canonicalisation is used only
//! as a transposition-table key: it never affects legality, scoring,
//! or move selection.

use crate::board::Cells;
use crate::square::Square;

/// A fixed permutation of the 9 board indices.
pub type Transform = [usize; 9];

/// The 8 elements of D4: identity, rotations by 90/180/270 degrees,
/// then the horizontal, vertical, main-diagonal, and anti-diagonal
/// reflections.
pub const TRANSFORMS: [Transform; 8] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8],
    [6, 3, 0, 7, 4, 1, 8, 5, 2],
    [8, 7, 6, 5, 4, 3, 2, 1, 0],
    [2, 5, 8, 1, 4, 7, 0, 3, 6],
    [2, 1, 0, 5, 4, 3, 8, 7, 6],
    [6, 7, 8, 3, 4, 5, 0, 1, 2],
    [0, 3, 6, 1, 4, 7, 2, 5, 8],
    [8, 5, 2, 7, 4, 1, 6, 3, 0],
];

/// Apply a symmetry transform to a cell sequence.
#[inline]
pub fn apply_transform(cells: &Cells, transform: &Transform) -> Cells {
    let mut out: Cells = [None; 9];
    for (i, &src) in transform.iter().enumerate() {
        out[i] = cells[src];
    }
    out
}

/// Return the lexicographically smallest transform of `cells`.
///
/// All 8 orientations of a position share one canonical form, so it
/// serves as a symmetry-folding cache key.
pub fn canonical_form(cells: &Cells) -> Cells {
    TRANSFORMS
        .iter()
        .map(|t| apply_transform(cells, t))
        .min()
        .unwrap_or(*cells)
}

/// Return the index into [`TRANSFORMS`] of the first transform that
/// produces the canonical form.
pub fn canonical_index(cells: &Cells) -> usize {
    let canonical = canonical_form(cells);
    TRANSFORMS
        .iter()
        .position(|t| apply_transform(cells, t) == canonical)
        .unwrap_or(0)
}

/// Return the inverse permutation of a transform.
pub fn inverse(transform: &Transform) -> Transform {
    let mut inv: Transform = [0; 9];
    for (i, &j) in transform.iter().enumerate() {
        inv[j] = i;
    }
    inv
}

/// Map a square through a transform: the square in the transformed
/// orientation holding the content that `square` held originally.
pub fn map_square(square: Square, transform: &Transform) -> Square {
    let inv = inverse(transform);
    // Permutations keep indices in 0..9, so the lookup cannot fail.
    Square::from_index(inv[square.index()] as u8).unwrap_or(square)
}
