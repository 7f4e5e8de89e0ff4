//! Game rules: line detection, terminal test, and position scoring.

use crate::board::Board;
use crate::mark::Mark;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Base score for a win, before depth adjustment.
pub const WIN_BASE: i32 = 10;

/// Base score for a loss, before depth adjustment.
pub const LOSS_BASE: i32 = -10;

/// Return the mark owning three-in-a-row, if any.
pub fn winner(board: &Board) -> Option<Mark> {
    let cells = board.cells();
    for [a, b, c] in LINES {
        if cells[a].is_some() && cells[a] == cells[b] && cells[b] == cells[c] {
            return cells[a];
        }
    }
    None
}

/// Whether the game has ended: a line is complete or the board is full.
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || board.is_full()
}

/// Score a terminal position from `perspective`'s point of view.
///
/// A win scores `WIN_BASE - depth`, a loss `LOSS_BASE + depth`, a draw
/// `0`, where `depth` is the number of plies between the position under
/// decision and this terminal state. The adjustment makes faster wins
/// and slower losses strictly preferable, which keeps the root move
/// choice well-ordered among winning lines.
///
/// Must only be reached after [`is_terminal`] returned true; every
/// engine guarantees this by control flow.
pub fn evaluate(board: &Board, perspective: Mark, depth: u8) -> i32 {
    match winner(board) {
        Some(mark) if mark == perspective => WIN_BASE - depth as i32,
        Some(_) => LOSS_BASE + depth as i32,
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::{LINES, evaluate, is_terminal, winner};
    use crate::board::Board;
    use crate::mark::Mark;

    #[test]
    fn no_winner_on_empty_board() {
        let board = Board::empty();
        assert_eq!(winner(&board), None);
        assert!(!is_terminal(&board));
    }

    #[test]
    fn winner_on_each_row() {
        let x_top: Board = "XXXOO....".parse().unwrap();
        assert_eq!(winner(&x_top), Some(Mark::X));
        let x_mid: Board = "OO.XXX...".parse().unwrap();
        assert_eq!(winner(&x_mid), Some(Mark::X));
        let x_bot: Board = "OO....XXX".parse().unwrap();
        assert_eq!(winner(&x_bot), Some(Mark::X));
    }

    #[test]
    fn winner_on_each_column() {
        let left: Board = "XO.XO.X..".parse().unwrap();
        assert_eq!(winner(&left), Some(Mark::X));
        let middle: Board = "OX.OX..X.".parse().unwrap();
        assert_eq!(winner(&middle), Some(Mark::X));
        let right: Board = ".OX.OX..X".parse().unwrap();
        assert_eq!(winner(&right), Some(Mark::X));
    }

    #[test]
    fn winner_on_diagonals() {
        let main: Board = "XOO.X...X".parse().unwrap();
        assert_eq!(winner(&main), Some(Mark::X));
        let anti: Board = "OOX.X.X..".parse().unwrap();
        assert_eq!(winner(&anti), Some(Mark::X));
    }

    #[test]
    fn o_can_win_too() {
        let board: Board = "OOOXX.X..".parse().unwrap();
        assert_eq!(winner(&board), Some(Mark::O));
    }

    #[test]
    fn full_board_without_winner_is_terminal_draw() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        assert_eq!(winner(&board), None);
        assert!(is_terminal(&board));
        assert_eq!(evaluate(&board, Mark::X, 3), 0);
        assert_eq!(evaluate(&board, Mark::O, 3), 0);
    }

    #[test]
    fn evaluate_depth_adjustment() {
        let board: Board = "XXXOO....".parse().unwrap();
        // Faster wins score higher, slower losses score higher.
        assert_eq!(evaluate(&board, Mark::X, 0), 10);
        assert_eq!(evaluate(&board, Mark::X, 4), 6);
        assert_eq!(evaluate(&board, Mark::O, 0), -10);
        assert_eq!(evaluate(&board, Mark::O, 4), -6);
    }

    #[test]
    fn lines_cover_every_square() {
        let mut seen = [false; 9];
        for line in LINES {
            for idx in line {
                seen[idx] = true;
            }
        }
        assert!(seen.iter().all(|s| *s));
    }
}
