//! Game rules for tic-tac-toe.
//!
//! Pure functions that evaluate a board snapshot. Rules are kept apart from
//! board storage so the search and the caller's session share one verdict.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WIN_LINES, has_won, winner};

use super::types::{Board, Mark, Outcome};
use tracing::instrument;

/// Verdict for a board.
///
/// Evaluated in a fixed order: X win, then O win, then a full board.
#[instrument(level = "trace", skip(board), fields(board = %board.to_compact()))]
pub fn is_finished(board: &Board) -> Outcome {
    if has_won(board, Mark::X) {
        Outcome::Win(Mark::X)
    } else if has_won(board, Mark::O) {
        Outcome::Win(Mark::O)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(is_finished(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_full_board_win_beats_draw() {
        // X X X / O O X / X O O is full but won by X
        let board: Board = "XXXOOXXOO".parse().unwrap();
        assert_eq!(is_finished(&board), Outcome::Win(Mark::X));
    }

    #[test]
    fn test_x_checked_before_o() {
        // Not reachable in play; both marks hold a line.
        let board: Board = "XXXOOO...".parse().unwrap();
        assert_eq!(is_finished(&board), Outcome::Win(Mark::X));
    }

    #[test]
    fn test_o_win() {
        let board: Board = "XXO.O.OX.".parse().unwrap();
        assert_eq!(is_finished(&board), Outcome::Win(Mark::O));
    }
}
