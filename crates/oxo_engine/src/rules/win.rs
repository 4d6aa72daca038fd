//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Square};
use tracing::instrument;

/// Every winning index triple: rows, then columns, then diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],            // Diagonals
];

/// Checks if `mark` holds all three cells of any winning line.
#[instrument(level = "trace", skip(board))]
pub fn has_won(board: &Board, mark: Mark) -> bool {
    let target = Square::Occupied(mark);
    let squares = board.squares();
    WIN_LINES
        .iter()
        .any(|line| line.iter().all(|&i| squares[i] == target))
}

/// Returns the winning mark, checking X before O.
#[instrument(level = "trace", skip(board))]
pub fn winner(board: &Board) -> Option<Mark> {
    [Mark::X, Mark::O]
        .into_iter()
        .find(|&mark| has_won(board, mark))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert!(!has_won(&board, Mark::X));
        assert!(!has_won(&board, Mark::O));
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXX......".parse().unwrap();
        assert!(has_won(&board, Mark::X));
        assert_eq!(winner(&board), Some(Mark::X));
    }

    #[test]
    fn test_winner_diagonal() {
        let board = Board::new()
            .place(Position::TopLeft, Mark::O)
            .and_then(|b| b.place(Position::Center, Mark::O))
            .and_then(|b| b.place(Position::BottomRight, Mark::O))
            .unwrap();
        assert!(has_won(&board, Mark::O));
        assert!(!has_won(&board, Mark::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX.......".parse().unwrap();
        assert!(!has_won(&board, Mark::X));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board: Board = "XXO......".parse().unwrap();
        assert!(!has_won(&board, Mark::X));
        assert!(!has_won(&board, Mark::O));
    }
}
