//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Mark, Square};
use super::win::has_won;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(level = "trace", skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A draw is a full board on which neither mark holds a line.
#[instrument(level = "trace", skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && !has_won(board, Mark::X) && !has_won(board, Mark::O)
}
