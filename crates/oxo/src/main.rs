//! oxo - terminal tic-tac-toe.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use oxo::{Analysis, Cli, Command, Console, GameConfig, GameMode, GameSession};
use oxo_engine::{Board, Mark, best_move, is_finished};
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so the board on stdout stays readable.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            mode,
            config,
            player1,
            player2,
            delay_ms,
        } => run_play(mode, config, player1, player2, delay_ms),
        Command::Analyze { board, side, json } => run_analyze(&board, side.into(), json),
        Command::Selfplay => run_selfplay(),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip_all)]
fn run_play(
    mode: Option<GameMode>,
    config_path: Option<PathBuf>,
    player1: Option<String>,
    player2: Option<String>,
    delay_ms: Option<u64>,
) -> Result<()> {
    let config = match config_path {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    }
    .with_mode(mode)
    .with_names(player1, player2)
    .with_computer_delay_ms(delay_ms);

    info!(?config, "Starting terminal game");

    let mut session = GameSession::new(&config);
    let stdin = std::io::stdin();
    let mut console = Console::new(stdin.lock(), std::io::stdout())
        .with_mode(*config.mode())
        .with_computer_delay(Duration::from_millis(*config.computer_delay_ms()));
    console.run(&mut session)
}

/// Print the verdict and move values for one board
#[instrument]
fn run_analyze(board: &str, side: Mark, json: bool) -> Result<()> {
    let board: Board = board.parse()?;
    let analysis = Analysis::of(&board, side)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        println!("{}", board);
        println!("{}", analysis);
    }
    Ok(())
}

/// Play the search against itself and print the game
#[instrument]
fn run_selfplay() -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    let mut board = Board::new();
    let mut to_move = Mark::X;

    let outcome = loop {
        let outcome = is_finished(&board);
        if outcome.is_terminal() {
            break outcome;
        }
        let choice = best_move(&board, to_move)?;
        board = board.place(choice.position(), to_move)?;
        writeln!(
            stdout,
            "{} plays {} (score {:+})",
            to_move,
            choice.position(),
            choice.score()
        )?;
        to_move = to_move.opponent();
    };

    writeln!(stdout, "\n{}\n\n{}", board, outcome)?;
    Ok(())
}
