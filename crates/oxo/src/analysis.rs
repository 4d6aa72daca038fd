//! Position analysis for the `analyze` command.

use oxo_engine::{Board, EngineError, Mark, MoveResult, Outcome, Score, best_move, evaluate_moves, is_finished};
use serde::Serialize;
use std::fmt;
use tracing::instrument;

/// Value of one candidate move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveValue {
    /// Board index (0-8).
    pub index: usize,
    /// Minimax value, positive favoring O.
    pub score: Score,
}

/// Verdict and search results for a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// Board in compact form.
    pub board: String,
    /// Mark whose move was analyzed.
    pub side: Mark,
    /// Current verdict.
    pub outcome: Outcome,
    /// Every legal move with its value. Empty on a finished board.
    pub moves: Vec<MoveValue>,
    /// Move the search would play. `None` on a finished board.
    pub best: Option<MoveResult>,
}

impl Analysis {
    /// Analyzes `board` with `side` to move.
    #[instrument(skip(board), fields(board = %board.to_compact()))]
    pub fn of(board: &Board, side: Mark) -> Result<Self, EngineError> {
        let outcome = is_finished(board);
        let (moves, best) = if outcome.is_terminal() {
            (Vec::new(), None)
        } else {
            let moves = evaluate_moves(board, side)?
                .into_iter()
                .map(|(pos, score)| MoveValue {
                    index: pos.index(),
                    score,
                })
                .collect();
            (moves, Some(best_move(board, side)?))
        };

        Ok(Self {
            board: board.to_compact(),
            side,
            outcome,
            moves,
            best,
        })
    }
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board: {}", self.board)?;
        writeln!(f, "Outcome: {}", self.outcome)?;
        if let Some(best) = &self.best {
            writeln!(f, "Move values for {}:", self.side)?;
            for value in &self.moves {
                writeln!(f, "  cell {}: {:+}", value.index + 1, value.score)?;
            }
            write!(
                f,
                "Best move: cell {} ({}), score {:+}",
                best.position().index() + 1,
                best.position(),
                best.score()
            )?;
        }
        Ok(())
    }
}
