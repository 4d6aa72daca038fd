//! Engine error types.

use super::position::Position;
use super::types::Outcome;

/// Precondition failures reported by the engine.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum EngineError {
    /// The index is outside 0..=8.
    #[display("Index {} is out of bounds (must be 0-8)", _0)]
    InvalidIndex(#[error(not(source))] usize),

    /// The cell already holds a mark.
    #[display("{} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Position),

    /// Search was requested on a board that is already won or drawn.
    #[display("Board is already finished: {}", _0)]
    TerminalBoard(#[error(not(source))] Outcome),

    /// Board text could not be parsed.
    #[display("Invalid board: {}", _0)]
    InvalidBoard(#[error(not(source))] String),
}
