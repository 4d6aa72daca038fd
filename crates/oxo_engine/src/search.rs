//! Minimax move search.
//!
//! Exhaustive search of the remaining game tree with no pruning and no
//! depth limit. Leaf values are fixed (no discount for depth), so a win in
//! one move and a win in five are worth the same to the search.

use super::error::EngineError;
use super::position::Position;
use super::rules::is_finished;
use super::types::{Board, Mark, Outcome};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Game-theoretic value of a board, from O's point of view.
pub type Score = i32;

/// Leaf value of a board won by O.
pub const O_WIN_SCORE: Score = 10;

/// Leaf value of a board won by X.
pub const X_WIN_SCORE: Score = -10;

/// Leaf value of a drawn board.
pub const DRAW_SCORE: Score = 0;

/// The move chosen by the search and its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    position: Position,
    score: Score,
}

impl MoveResult {
    /// Chosen cell.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Value of the chosen move under perfect play.
    pub fn score(&self) -> Score {
        self.score
    }
}

/// Picks the optimal move for `side`.
///
/// O maximizes the score and X minimizes it. Among equally scored moves the
/// lowest index wins, so the choice is reproducible for a given board.
///
/// Returns [`EngineError::TerminalBoard`] if the board is already won or
/// drawn. The caller's board is never modified.
#[instrument(skip(board), fields(board = %board.to_compact()))]
pub fn best_move(board: &Board, side: Mark) -> Result<MoveResult, EngineError> {
    let mut best: Option<MoveResult> = None;
    for (position, score) in evaluate_moves(board, side)? {
        let improves = match best {
            None => true,
            Some(current) => prefers(side, score, current.score),
        };
        if improves {
            best = Some(MoveResult { position, score });
        }
    }

    // An in-progress board always has an empty cell.
    let chosen = best.ok_or(EngineError::TerminalBoard(Outcome::Draw))?;
    debug!(
        position = chosen.position.index(),
        score = chosen.score,
        "Search complete"
    );
    Ok(chosen)
}

/// Minimax value of every legal move for `side`, in index order.
#[instrument(level = "debug", skip(board), fields(board = %board.to_compact()))]
pub fn evaluate_moves(board: &Board, side: Mark) -> Result<Vec<(Position, Score)>, EngineError> {
    let outcome = is_finished(board);
    if outcome.is_terminal() {
        return Err(EngineError::TerminalBoard(outcome));
    }

    Ok(board
        .empty_positions()
        .map(|pos| (pos, minimax(&board.with(pos, side), side.opponent())))
        .collect())
}

/// True if `side` would rather have `candidate` than `incumbent`.
fn prefers(side: Mark, candidate: Score, incumbent: Score) -> bool {
    match side {
        Mark::O => candidate > incumbent,
        Mark::X => candidate < incumbent,
    }
}

/// Value of `board` with `to_act` about to move.
fn minimax(board: &Board, to_act: Mark) -> Score {
    match is_finished(board) {
        Outcome::Win(Mark::O) => return O_WIN_SCORE,
        Outcome::Win(Mark::X) => return X_WIN_SCORE,
        Outcome::Draw => return DRAW_SCORE,
        Outcome::InProgress => {}
    }

    let scores = board
        .empty_positions()
        .map(|pos| minimax(&board.with(pos, to_act), to_act.opponent()));

    // InProgress guarantees at least one empty cell.
    let best = match to_act {
        Mark::O => scores.max(),
        Mark::X => scores.min(),
    };
    best.unwrap_or(DRAW_SCORE)
}
