//! Core domain types for the outcome engine.

use super::error::EngineError;
use super::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A mark a player places on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Mark {
    /// Mark X (moves first).
    X,
    /// Mark O (the computer's mark in single-player games).
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// No mark yet.
    Empty,
    /// Cell taken by a mark.
    Occupied(Mark),
}

impl Square {
    fn symbol(self) -> Option<char> {
        match self {
            Square::Empty => None,
            Square::Occupied(Mark::X) => Some('X'),
            Square::Occupied(Mark::O) => Some('O'),
        }
    }
}

/// 3x3 board snapshot.
///
/// Cells are stored row-major: 0, 1, 2 is the top row and 6, 7, 8 the
/// bottom row. A board is a plain value; moves produce a new board rather
/// than editing one shared by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from its nine cells.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the cell at a position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.index()]
    }

    /// Gets the cell at a raw index, rejecting indices outside 0..=8.
    pub fn get_index(&self, index: usize) -> Result<Square, EngineError> {
        self.squares
            .get(index)
            .copied()
            .ok_or(EngineError::InvalidIndex(index))
    }

    /// Checks if the cell at a position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all cells in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Empty cells in index order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// Places `mark` on an empty cell and returns the resulting board.
    #[instrument(level = "trace", skip(self))]
    pub fn place(&self, pos: Position, mark: Mark) -> Result<Board, EngineError> {
        if !self.is_empty(pos) {
            return Err(EngineError::CellOccupied(pos));
        }
        Ok(self.with(pos, mark))
    }

    /// Places `mark` at a raw index, validating both the index and the cell.
    #[instrument(level = "trace", skip(self))]
    pub fn place_index(&self, index: usize, mark: Mark) -> Result<Board, EngineError> {
        let pos = Position::from_index(index).ok_or(EngineError::InvalidIndex(index))?;
        self.place(pos, mark)
    }

    /// Copy of this board with `pos` set to `mark`, no occupancy check.
    pub(crate) fn with(&self, pos: Position, mark: Mark) -> Board {
        let mut next = *self;
        next.squares[pos.index()] = Square::Occupied(mark);
        next
    }

    /// Compact nine-character form, `.` for empty cells.
    pub fn to_compact(&self) -> String {
        self.squares
            .iter()
            .map(|s| s.symbol().unwrap_or('.'))
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = EngineError;

    /// Parses nine cells: `X`/`O` (any case) for marks and `.`, `_`, `-`
    /// or a space for empty cells.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = s.chars().collect();
        if cells.len() != 9 {
            return Err(EngineError::InvalidBoard(format!(
                "expected 9 cells, found {}",
                cells.len()
            )));
        }

        let mut squares = [Square::Empty; 9];
        for (square, c) in squares.iter_mut().zip(cells) {
            *square = match c {
                'x' | 'X' => Square::Occupied(Mark::X),
                'o' | 'O' => Square::Occupied(Mark::O),
                '.' | '_' | '-' | ' ' => Square::Empty,
                other => {
                    return Err(EngineError::InvalidBoard(format!(
                        "unexpected cell character {:?}",
                        other
                    )));
                }
            };
        }
        Ok(Self { squares })
    }
}

impl std::fmt::Display for Board {
    /// Renders the 3x3 grid, numbering empty cells 1-9.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos].symbol() {
                    Some(symbol) => write!(f, "{}", symbol)?,
                    None => write!(f, "{}", pos + 1)?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Verdict for a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Nobody has won and empty cells remain.
    InProgress,
    /// A mark holds a full line.
    Win(Mark),
    /// Board full with no winner.
    Draw,
}

impl Outcome {
    /// Returns true for `Win` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(*mark),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win(mark) => write!(f, "{} wins", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
