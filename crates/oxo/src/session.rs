//! Game session state owned by the front-end.
//!
//! The engine is stateless; everything that changes over a game (board,
//! turn, phase, mode, the computer gate) lives here and is passed around
//! explicitly.

use crate::config::GameConfig;
use crate::mode::GameMode;
use oxo_engine::{Board, EngineError, Mark, Outcome, Position, best_move, is_finished};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for a mode to be chosen.
    ModeSelect,
    /// Moves are being accepted.
    InProgress,
    /// The game ended; only a reset is accepted.
    Finished(Outcome),
}

/// A move applied to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
    /// Verdict after the move.
    pub outcome: Outcome,
}

/// Reasons a session rejects a request. The session is unchanged afterwards.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SessionError {
    /// No mode has been chosen yet.
    #[display("Game has not started")]
    NotStarted,

    /// A mode was already chosen for this game.
    #[display("Game is already in progress")]
    AlreadyStarted,

    /// The game is over.
    #[display("Game is already over ({})", _0)]
    GameOver(#[error(not(source))] Outcome),

    /// The computer has not replied to the last move yet.
    #[display("Waiting for the computer to move")]
    AwaitingComputer,

    /// A computer reply was requested while no reply is pending.
    #[display("It is not the computer's turn")]
    NotComputersTurn,

    /// The move itself was invalid.
    #[display("{}", _0)]
    #[from]
    Engine(EngineError),
}

/// One tic-tac-toe game and its surrounding state.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    to_move: Mark,
    phase: Phase,
    mode: Option<GameMode>,
    player1_name: Option<String>,
    player2_name: Option<String>,
    awaiting_computer: bool,
}

impl GameSession {
    /// Creates a session in mode selection.
    #[instrument(skip(config))]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
            phase: Phase::ModeSelect,
            mode: None,
            player1_name: config.player1_name().clone(),
            player2_name: config.player2_name().clone(),
            awaiting_computer: false,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the chosen mode, if any.
    pub fn mode(&self) -> Option<GameMode> {
        self.mode
    }

    /// True while the computer's reply is pending.
    pub fn awaiting_computer(&self) -> bool {
        self.awaiting_computer
    }

    /// Display name of the player using `mark`.
    pub fn name_of(&self, mark: Mark) -> &str {
        match (mark, self.mode) {
            (Mark::X, _) => self.player1_name.as_deref().unwrap_or("Player X"),
            (Mark::O, Some(GameMode::SinglePlayer)) => "Computer",
            (Mark::O, _) => self.player2_name.as_deref().unwrap_or("Player O"),
        }
    }

    /// Message announcing a finished game.
    pub fn outcome_message(&self, outcome: Outcome) -> Option<String> {
        match outcome {
            Outcome::Win(mark) => Some(format!("{} ({}) wins!", self.name_of(mark), mark)),
            Outcome::Draw => Some("It's a draw!".to_string()),
            Outcome::InProgress => None,
        }
    }

    /// Starts a game in `mode` with an empty board and X to move.
    #[instrument(skip(self))]
    pub fn start(&mut self, mode: GameMode) -> Result<(), SessionError> {
        if self.phase != Phase::ModeSelect {
            warn!(phase = ?self.phase, "Start requested outside mode selection");
            return Err(SessionError::AlreadyStarted);
        }
        info!(mode = %mode, "Starting game");
        self.mode = Some(mode);
        self.board = Board::new();
        self.to_move = Mark::X;
        self.awaiting_computer = false;
        self.phase = Phase::InProgress;
        Ok(())
    }

    /// Applies a human move at `index` (0-8) for the mark to move.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn play(&mut self, index: usize) -> Result<Turn, SessionError> {
        self.ensure_in_progress()?;
        if self.awaiting_computer {
            debug!("Human move rejected while computer is thinking");
            return Err(SessionError::AwaitingComputer);
        }

        let position = Position::from_index(index).ok_or(EngineError::InvalidIndex(index))?;
        let next = self.board.place(position, self.to_move)?;
        Ok(self.advance(next, position))
    }

    /// Applies the computer's reply for the mark to move.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn computer_reply(&mut self) -> Result<Turn, SessionError> {
        if !self.awaiting_computer {
            return Err(SessionError::NotComputersTurn);
        }

        let choice = best_move(&self.board, self.to_move)?;
        let next = self.board.place(choice.position(), self.to_move)?;
        debug!(position = %choice.position(), score = choice.score(), "Computer chose move");
        self.awaiting_computer = false;
        Ok(self.advance(next, choice.position()))
    }

    /// Returns to mode selection with an empty board.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting session");
        self.board = Board::new();
        self.to_move = Mark::X;
        self.phase = Phase::ModeSelect;
        self.mode = None;
        self.awaiting_computer = false;
    }

    fn ensure_in_progress(&self) -> Result<(), SessionError> {
        match self.phase {
            Phase::ModeSelect => Err(SessionError::NotStarted),
            Phase::Finished(outcome) => Err(SessionError::GameOver(outcome)),
            Phase::InProgress => Ok(()),
        }
    }

    /// Commits `next` and moves the session on.
    fn advance(&mut self, next: Board, position: Position) -> Turn {
        let mark = self.to_move;
        self.board = next;

        let outcome = is_finished(&self.board);
        if outcome.is_terminal() {
            info!(outcome = %outcome, "Game finished");
            self.phase = Phase::Finished(outcome);
        } else {
            self.to_move = mark.opponent();
            self.awaiting_computer =
                self.mode == Some(GameMode::SinglePlayer) && self.to_move == Mark::O;
        }

        Turn {
            mark,
            position,
            outcome,
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_computer_gate_set_only_in_single_player() {
        let mut session = GameSession::default();
        session.start(GameMode::TwoPlayer).unwrap();
        session.play(4).unwrap();
        assert!(!session.awaiting_computer());
        assert_eq!(session.to_move(), Mark::O);

        let mut session = GameSession::default();
        session.start(GameMode::SinglePlayer).unwrap();
        session.play(4).unwrap();
        assert!(session.awaiting_computer());
    }

    #[test]
    fn test_names_fall_back_by_mode() {
        let config = GameConfig::default().with_names(None, Some("Bea".to_string()));
        let mut session = GameSession::new(&config);
        assert_eq!(session.name_of(Mark::X), "Player X");
        assert_eq!(session.name_of(Mark::O), "Bea");

        session.start(GameMode::SinglePlayer).unwrap();
        assert_eq!(session.name_of(Mark::O), "Computer");
    }
}
