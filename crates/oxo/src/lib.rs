//! oxo - terminal tic-tac-toe.
//!
//! The caller side of the outcome engine: it owns the mutable game state
//! and asks [`oxo_engine`] for verdicts and computer moves.
//!
//! # Architecture
//!
//! - **Session**: explicit game state (board, turn, phase, mode, computer gate)
//! - **Console**: text front-end that drives a session
//! - **Config**: TOML settings for mode, player names and computer delay
//! - **Analysis**: verdict and move values for a single board

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod analysis;
mod cli;
mod config;
mod console;
mod mode;
mod session;

pub use analysis::{Analysis, MoveValue};
pub use cli::{Cli, Command, Side};
pub use config::{ConfigError, GameConfig};
pub use console::Console;
pub use mode::GameMode;
pub use session::{GameSession, Phase, SessionError, Turn};
