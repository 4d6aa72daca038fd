//! Command-line interface for oxo.

use crate::mode::GameMode;
use clap::{Parser, Subcommand, ValueEnum};
use oxo_engine::Mark;

/// oxo - tic-tac-toe against a friend or a minimax opponent
#[derive(Parser, Debug)]
#[command(name = "oxo")]
#[command(about = "Terminal tic-tac-toe with a perfect-play computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal
    Play {
        /// Game mode; asked for interactively when omitted
        #[arg(short, long, value_enum)]
        mode: Option<GameMode>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Name of the player using X
        #[arg(long)]
        player1: Option<String>,

        /// Name of the player using O
        #[arg(long)]
        player2: Option<String>,

        /// Pause before the computer's reply, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Report the verdict and move values for a board
    Analyze {
        /// Nine cells, row-major: X, O, and `.` or `_` for empty
        #[arg(short, long)]
        board: String,

        /// Mark to move
        #[arg(short, long, value_enum, default_value_t = Side::O)]
        side: Side,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Let the computer play both sides from an empty board
    Selfplay,
}

/// Mark argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Side {
    /// Mark X
    X,
    /// Mark O
    O,
}

impl From<Side> for Mark {
    fn from(side: Side) -> Self {
        match side {
            Side::X => Mark::X,
            Side::O => Mark::O,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_flags() {
        let cli = Cli::try_parse_from([
            "oxo",
            "play",
            "--mode",
            "single-player",
            "--player1",
            "Ada",
        ])
        .unwrap();
        match cli.command {
            Command::Play { mode, player1, .. } => {
                assert_eq!(mode, Some(GameMode::SinglePlayer));
                assert_eq!(player1.as_deref(), Some("Ada"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_analyze_defaults_to_o() {
        let cli = Cli::try_parse_from(["oxo", "analyze", "--board", "X........"]).unwrap();
        match cli.command {
            Command::Analyze { side, json, .. } => {
                assert_eq!(Mark::from(side), Mark::O);
                assert!(!json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
