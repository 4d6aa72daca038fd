//! Tic-tac-toe outcome engine.
//!
//! Pure functions over a 9-cell board snapshot. The engine keeps no state
//! between calls: the caller owns the board and passes it in whole.
//!
//! # Example
//!
//! ```
//! use oxo_engine::{best_move, is_finished, Board, Mark, Outcome};
//!
//! let board: Board = "XX.OO....".parse().unwrap();
//! assert_eq!(is_finished(&board), Outcome::InProgress);
//!
//! let choice = best_move(&board, Mark::O).unwrap();
//! assert_eq!(choice.position().index(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod position;
mod rules;
mod search;
mod types;

pub use error::EngineError;
pub use position::Position;
pub use rules::{WIN_LINES, has_won, is_draw, is_finished, is_full, winner};
pub use search::{DRAW_SCORE, MoveResult, O_WIN_SCORE, Score, X_WIN_SCORE, best_move, evaluate_moves};
pub use types::{Board, Mark, Outcome, Square};
